//! Contact store and birthday queries
//!
//! Records are keyed by name in an ordered map, so listing and search
//! results come back sorted by name.
//!
//! ## Birthday window
//!
//! For each record with a birthday, the next occurrence is the anniversary
//! in today's year, or next year's if that date has already passed. A record
//! is included when its next occurrence lies in `[today, today + days - 1]`.
//! Congratulations are not moved off weekends.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::Clock;
use crate::error::{CoreError, CoreResult, EntityKind};
use crate::record::Record;

/// Upcoming birthdays grouped by date, ascending
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthdayWindow(BTreeMap<NaiveDate, Vec<String>>);

impl BirthdayWindow {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Names celebrating on `date`
    pub fn on(&self, date: NaiveDate) -> Option<&[String]> {
        self.0.get(&date).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &Vec<String>)> {
        self.0.iter()
    }

    fn insert(&mut self, date: NaiveDate, name: &str) {
        self.0.entry(date).or_default().push(name.to_string());
    }
}

impl fmt::Display for BirthdayWindow {
    /// One line per date: `Wednesday: Alice, Bob`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .0
            .iter()
            .map(|(date, names)| format!("{}: {}", date.format("%A"), names.join(", ")))
            .collect();
        f.write_str(&lines.join("\n"))
    }
}

/// All contacts, keyed by name
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct ContactStore {
    records: BTreeMap<String, Record>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name
    pub fn add(&mut self, record: Record) {
        debug!(name = record.name(), "Storing contact");
        self.records.insert(record.name().to_string(), record);
    }

    /// Get a record by name
    pub fn find(&self, name: &str) -> CoreResult<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| CoreError::not_found(EntityKind::Contact, name))
    }

    /// Get a record by name for in-place edits
    pub fn find_mut(&mut self, name: &str) -> CoreResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| CoreError::not_found(EntityKind::Contact, name))
    }

    /// Return the record for `name`, creating an empty one if needed
    pub fn find_or_create(&mut self, name: &str) -> &mut Record {
        self.records
            .entry(name.to_string())
            .or_insert_with(|| Record::new(name))
    }

    /// Remove a record by name
    pub fn delete(&mut self, name: &str) -> CoreResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| CoreError::not_found(EntityKind::Contact, name))?;
        debug!(name, "Deleted contact");
        Ok(record)
    }

    /// Case-insensitive substring search over every field of every record
    pub fn search(&self, word: &str) -> Vec<&Record> {
        let word = word.to_lowercase();
        self.records
            .values()
            .filter(|r| r.searchable_text().contains(&word))
            .collect()
    }

    /// All records, ordered by name
    pub fn all(&self) -> Vec<&Record> {
        self.records.values().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose next birthday falls within `days_count` days from today
    ///
    /// Today counts as the first day, so `days_count = 1` means today only.
    pub fn birthdays_in_window(
        &self,
        days_count: u32,
        clock: &impl Clock,
    ) -> CoreResult<BirthdayWindow> {
        if days_count == 0 {
            return Err(CoreError::InvalidDayCount(days_count));
        }

        let start = clock.today();
        let end = start
            .checked_add_signed(Duration::days(i64::from(days_count) - 1))
            .unwrap_or(NaiveDate::MAX);

        let mut window = BirthdayWindow::default();
        for record in self.records.values() {
            let Some(birthday) = record.birthday else {
                continue;
            };
            let Some(next) = birthday.next_occurrence(start) else {
                continue;
            };
            if start <= next && next <= end {
                window.insert(next, record.name());
            }
        }

        debug!(
            days_count,
            %start,
            dates = window.len(),
            "Computed birthday window"
        );
        Ok(window)
    }

    /// Names of contacts whose birthday is celebrated today
    pub fn today_birthdays(&self, clock: &impl Clock) -> Vec<&str> {
        let today = clock.today();
        self.records
            .values()
            .filter(|r| r.birthday.is_some_and(|b| b.falls_on(today)))
            .map(Record::name)
            .collect()
    }
}

impl From<Vec<Record>> for ContactStore {
    fn from(records: Vec<Record>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.add(record);
        }
        store
    }
}

impl From<ContactStore> for Vec<Record> {
    fn from(store: ContactStore) -> Self {
        store.records.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn june_10() -> FixedClock {
        FixedClock(date(2024, 6, 10))
    }

    fn with_birthday(name: &str, birthday: &str) -> Record {
        let mut record = Record::new(name);
        record.add_birthday(birthday).unwrap();
        record
    }

    #[test]
    fn test_add_and_find() {
        let mut store = ContactStore::new();
        let mut record = Record::new("Alice");
        record.add_phone("1234567890").unwrap();
        store.add(record);

        let found = store.find("Alice").unwrap();
        assert_eq!(found.phones.len(), 1);
        assert_eq!(found.phones[0].as_str(), "1234567890");
    }

    #[test]
    fn test_add_overwrites_same_name() {
        let mut store = ContactStore::new();
        store.add(Record::new("Alice"));
        let mut replacement = Record::new("Alice");
        replacement.add_address("Kyiv");
        store.add(replacement);

        assert_eq!(store.len(), 1);
        assert_eq!(store.find("Alice").unwrap().address.as_deref(), Some("Kyiv"));
    }

    #[test]
    fn test_find_missing_fails() {
        let store = ContactStore::new();
        assert_eq!(
            store.find("Nobody").unwrap_err(),
            CoreError::not_found(EntityKind::Contact, "Nobody")
        );
    }

    #[test]
    fn test_find_or_create() {
        let mut store = ContactStore::new();
        store.find_or_create("Alice").add_phone("1234567890").unwrap();
        store.find_or_create("Alice").add_phone("0987654321").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.find("Alice").unwrap().phones.len(), 2);
    }

    #[test]
    fn test_delete() {
        let mut store = ContactStore::new();
        store.add(Record::new("Alice"));

        let removed = store.delete("Alice").unwrap();
        assert_eq!(removed.name(), "Alice");
        assert!(store.is_empty());
        assert!(matches!(
            store.delete("Alice"),
            Err(CoreError::NotFound {
                kind: EntityKind::Contact,
                ..
            })
        ));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut store = ContactStore::new();
        store.add(Record::new("Alice"));
        store.add(Record::new("Bob"));

        let results = store.search("ALICE");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name(), "Alice");
    }

    #[test]
    fn test_search_matches_any_field() {
        let mut store = ContactStore::new();
        let mut alice = Record::new("Alice");
        alice.add_phone("1234567890").unwrap();
        alice.add_address("Baker Street");
        store.add(alice);
        let mut bob = Record::new("Bob");
        bob.add_email("bob@example.com").unwrap();
        bob.add_birthday("12.06.1990").unwrap();
        store.add(bob);

        assert_eq!(store.search("4567")[0].name(), "Alice");
        assert_eq!(store.search("baker")[0].name(), "Alice");
        assert_eq!(store.search("EXAMPLE.com")[0].name(), "Bob");
        assert_eq!(store.search("12.06")[0].name(), "Bob");
        assert!(store.search("zzz").is_empty());
    }

    #[test]
    fn test_all_is_ordered_by_name() {
        let mut store = ContactStore::new();
        store.add(Record::new("Charlie"));
        store.add(Record::new("Alice"));
        store.add(Record::new("Bob"));

        let names: Vec<&str> = store.all().into_iter().map(Record::name).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);
    }

    #[test]
    fn test_birthday_within_window() {
        let mut store = ContactStore::new();
        store.add(with_birthday("Alice", "12.06.1990"));

        let window = store.birthdays_in_window(7, &june_10()).unwrap();
        assert_eq!(window.len(), 1);
        assert_eq!(
            window.on(date(2024, 6, 12)),
            Some(&["Alice".to_string()][..])
        );
    }

    #[test]
    fn test_birthday_outside_one_day_window() {
        let mut store = ContactStore::new();
        store.add(with_birthday("Alice", "12.06.1990"));

        let window = store.birthdays_in_window(1, &june_10()).unwrap();
        assert!(window.is_empty());
    }

    #[test]
    fn test_window_edges_are_inclusive() {
        let mut store = ContactStore::new();
        store.add(with_birthday("Today", "10.06.1980"));
        store.add(with_birthday("LastDay", "16.06.1980"));
        store.add(with_birthday("TooLate", "17.06.1980"));
        store.add(with_birthday("Yesterday", "09.06.1980"));

        let window = store.birthdays_in_window(7, &june_10()).unwrap();
        assert!(window.on(date(2024, 6, 10)).is_some());
        assert!(window.on(date(2024, 6, 16)).is_some());
        assert_eq!(window.len(), 2);
    }

    #[test]
    fn test_passed_birthday_moves_to_next_year() {
        let mut store = ContactStore::new();
        store.add(with_birthday("Alice", "01.01.1990"));

        assert!(store.birthdays_in_window(7, &june_10()).unwrap().is_empty());

        let window = store.birthdays_in_window(366, &june_10()).unwrap();
        assert!(window.on(date(2025, 1, 1)).is_some());
    }

    #[test]
    fn test_window_wraps_year_end() {
        let mut store = ContactStore::new();
        store.add(with_birthday("Newyear", "02.01.2000"));
        let clock = FixedClock(date(2024, 12, 30));

        let window = store.birthdays_in_window(7, &clock).unwrap();
        assert!(window.on(date(2025, 1, 2)).is_some());
    }

    #[test]
    fn test_window_groups_same_day() {
        let mut store = ContactStore::new();
        store.add(with_birthday("Bob", "12.06.1985"));
        store.add(with_birthday("Alice", "12.06.1990"));
        store.add(Record::new("NoBirthday"));

        let window = store.birthdays_in_window(7, &june_10()).unwrap();
        assert_eq!(
            window.on(date(2024, 6, 12)).unwrap(),
            &["Alice".to_string(), "Bob".to_string()]
        );
    }

    #[test]
    fn test_zero_day_window_is_rejected() {
        let store = ContactStore::new();
        assert_eq!(
            store.birthdays_in_window(0, &june_10()),
            Err(CoreError::InvalidDayCount(0))
        );
    }

    #[test]
    fn test_window_display() {
        let mut store = ContactStore::new();
        store.add(with_birthday("Carol", "14.06.1970"));
        store.add(with_birthday("Alice", "12.06.1990"));
        store.add(with_birthday("Bob", "12.06.1985"));

        let window = store.birthdays_in_window(7, &june_10()).unwrap();
        // 2024-06-12 is a Wednesday, 2024-06-14 a Friday
        assert_eq!(window.to_string(), "Wednesday: Alice, Bob\nFriday: Carol");
    }

    #[test]
    fn test_today_birthdays() {
        let mut store = ContactStore::new();
        store.add(with_birthday("Alice", "10.06.1990"));
        store.add(with_birthday("Bob", "11.06.1990"));
        store.add(Record::new("Carol"));

        assert_eq!(store.today_birthdays(&june_10()), vec!["Alice"]);
    }

    #[test]
    fn test_leap_day_today_matches_one_day_window() {
        let mut store = ContactStore::new();
        store.add(with_birthday("Leap", "29.02.2000"));
        let clock = FixedClock(date(2023, 2, 28));

        let window = store.birthdays_in_window(1, &clock).unwrap();
        assert_eq!(window.on(clock.0).unwrap(), &["Leap".to_string()]);
        assert_eq!(store.today_birthdays(&clock), vec!["Leap"]);
    }

    #[test]
    fn test_store_serialization() {
        let mut store = ContactStore::new();
        let mut alice = Record::new("Alice");
        alice.add_phone("1234567890").unwrap();
        store.add(alice);
        store.add(Record::new("Bob"));

        let json = serde_json::to_string(&store).unwrap();
        assert!(json.starts_with('['));
        let deserialized: ContactStore = serde_json::from_str(&json).unwrap();
        assert_eq!(store, deserialized);
    }
}
