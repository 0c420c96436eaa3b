//! Contact record
//!
//! A `Record` bundles everything known about one contact. The name is the
//! record's key in the `ContactStore` and cannot change; renaming a contact
//! means deleting and re-adding it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fields::{validate_birthday, validate_email, validate_phone, Birthday, Email, Phone};
use crate::error::CoreResult;

/// A single contact
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Contact name (store key)
    name: String,
    /// Phone numbers in insertion order; duplicates allowed
    #[serde(default)]
    pub phones: Vec<Phone>,
    /// Email addresses in insertion order
    #[serde(default)]
    pub emails: Vec<Email>,
    #[serde(default)]
    pub birthday: Option<Birthday>,
    #[serde(default)]
    pub address: Option<String>,
}

impl Record {
    /// Create an empty record with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            emails: Vec::new(),
            birthday: None,
            address: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ==================== Phones ====================

    /// Validate and append a phone
    pub fn add_phone(&mut self, raw: &str) -> CoreResult<()> {
        self.phones.push(validate_phone(raw)?);
        Ok(())
    }

    /// Remove every phone equal to `value`; absent values are ignored
    pub fn remove_phone(&mut self, value: &str) {
        self.phones.retain(|p| p.as_str() != value);
    }

    /// Replace every occurrence of `old` with `new`
    ///
    /// Both values are validated first. Does nothing if `old` is not present.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> CoreResult<()> {
        let old = validate_phone(old)?;
        let new = validate_phone(new)?;
        for phone in self.phones.iter_mut().filter(|p| **p == old) {
            *phone = new.clone();
        }
        Ok(())
    }

    /// Find the first phone equal to `value`
    pub fn find_phone(&self, value: &str) -> CoreResult<Option<&Phone>> {
        let query = validate_phone(value)?;
        Ok(self.phones.iter().find(|p| **p == query))
    }

    // ==================== Emails ====================

    /// Validate and append an email
    pub fn add_email(&mut self, raw: &str) -> CoreResult<()> {
        self.emails.push(validate_email(raw)?);
        Ok(())
    }

    /// Remove every email equal to `value`; absent values are ignored
    pub fn remove_email(&mut self, value: &str) {
        self.emails.retain(|e| e.as_str() != value);
    }

    /// Replace every occurrence of `old` with `new`
    pub fn change_email(&mut self, old: &str, new: &str) -> CoreResult<()> {
        let old = validate_email(old)?;
        let new = validate_email(new)?;
        for email in self.emails.iter_mut().filter(|e| **e == old) {
            *email = new.clone();
        }
        Ok(())
    }

    /// Find the first email equal to `value`
    pub fn find_email(&self, value: &str) -> CoreResult<Option<&Email>> {
        let query = validate_email(value)?;
        Ok(self.emails.iter().find(|e| **e == query))
    }

    // ==================== Single-valued fields ====================

    /// Validate and set the birthday, replacing any previous one
    pub fn add_birthday(&mut self, raw: &str) -> CoreResult<()> {
        self.birthday = Some(validate_birthday(raw)?);
        Ok(())
    }

    /// Set the address, replacing any previous one
    pub fn add_address(&mut self, address: impl Into<String>) {
        self.address = Some(address.into());
    }

    /// Lower-cased text that `ContactStore::search` matches against
    pub fn searchable_text(&self) -> String {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        let emails: Vec<&str> = self.emails.iter().map(Email::as_str).collect();
        [
            self.name.clone(),
            phones.join(" "),
            emails.join(" "),
            self.birthday.map(|b| b.to_string()).unwrap_or_default(),
            self.address.clone().unwrap_or_default(),
        ]
        .join(" ")
        .to_lowercase()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}; phones: {}", self.name, phones.join(", "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, "; birthday: {}", birthday)?;
        }
        if !self.emails.is_empty() {
            let emails: Vec<&str> = self.emails.iter().map(Email::as_str).collect();
            write!(f, "; email(s): {}", emails.join(", "))?;
        }
        if let Some(address) = &self.address {
            write!(f, "; address: {}", address)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_record_new() {
        let record = Record::new("Alice");
        assert_eq!(record.name(), "Alice");
        assert!(record.phones.is_empty());
        assert!(record.emails.is_empty());
        assert!(record.birthday.is_none());
        assert!(record.address.is_none());
    }

    #[test]
    fn test_add_phone_keeps_duplicates() {
        let mut record = Record::new("Alice");
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.phones.len(), 2);
    }

    #[test]
    fn test_add_invalid_phone_leaves_record_unchanged() {
        let mut record = Record::new("Alice");
        let err = record.add_phone("12345").unwrap_err();
        assert_eq!(err, CoreError::InvalidPhone("12345".to_string()));
        assert!(record.phones.is_empty());
    }

    #[test]
    fn test_remove_phone_is_idempotent() {
        let mut record = Record::new("Alice");
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        record.add_phone("1234567890").unwrap();

        record.remove_phone("1234567890");
        assert_eq!(record.phones.len(), 1);
        assert_eq!(record.phones[0].as_str(), "0987654321");

        record.remove_phone("1234567890");
        assert_eq!(record.phones.len(), 1);
    }

    #[test]
    fn test_edit_phone_replaces_all_matches() {
        let mut record = Record::new("Alice");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();

        record.edit_phone("1111111111", "3333333333").unwrap();
        let phones: Vec<&str> = record.phones.iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["3333333333", "2222222222", "3333333333"]);
    }

    #[test]
    fn test_edit_phone_absent_is_noop() {
        let mut record = Record::new("Alice");
        record.add_phone("1111111111").unwrap();
        record.edit_phone("9999999999", "3333333333").unwrap();
        assert_eq!(record.phones[0].as_str(), "1111111111");
    }

    #[test]
    fn test_edit_phone_validates_both() {
        let mut record = Record::new("Alice");
        record.add_phone("1111111111").unwrap();
        assert!(record.edit_phone("111", "3333333333").is_err());
        assert!(record.edit_phone("1111111111", "333").is_err());
        assert_eq!(record.phones[0].as_str(), "1111111111");
    }

    #[test]
    fn test_find_phone() {
        let mut record = Record::new("Alice");
        record.add_phone("1234567890").unwrap();

        let found = record.find_phone("1234567890").unwrap();
        assert_eq!(found.map(Phone::as_str), Some("1234567890"));
        assert!(record.find_phone("0000000000").unwrap().is_none());
        assert!(record.find_phone("bad").is_err());
    }

    #[test]
    fn test_email_operations() {
        let mut record = Record::new("Alice");
        record.add_email("alice@example.com").unwrap();
        assert!(record.add_email("not-an-email").is_err());
        assert_eq!(record.emails.len(), 1);

        record
            .change_email("alice@example.com", "alice@work.org")
            .unwrap();
        assert!(record.find_email("alice@example.com").unwrap().is_none());
        assert!(record.find_email("alice@work.org").unwrap().is_some());

        record.remove_email("alice@work.org");
        record.remove_email("alice@work.org");
        assert!(record.emails.is_empty());
    }

    #[test]
    fn test_birthday_and_address_overwrite() {
        let mut record = Record::new("Alice");
        record.add_birthday("01.01.1990").unwrap();
        record.add_birthday("12.06.1991").unwrap();
        assert_eq!(record.birthday.unwrap().to_string(), "12.06.1991");

        assert!(record.add_birthday("1991-06-12").is_err());
        assert_eq!(record.birthday.unwrap().to_string(), "12.06.1991");

        record.add_address("Kyiv");
        record.add_address("Lviv, Main St 1");
        assert_eq!(record.address.as_deref(), Some("Lviv, Main St 1"));
    }

    #[test]
    fn test_display_minimal() {
        let mut record = Record::new("Bob");
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.to_string(), "Contact name: Bob; phones: 1234567890");
    }

    #[test]
    fn test_display_full() {
        let mut record = Record::new("Bob");
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        record.add_birthday("05.03.1980").unwrap();
        record.add_email("bob@example.com").unwrap();
        record.add_address("Odesa");
        assert_eq!(
            record.to_string(),
            "Contact name: Bob; phones: 1234567890, 0987654321; birthday: 05.03.1980; \
             email(s): bob@example.com; address: Odesa"
        );
    }

    #[test]
    fn test_searchable_text() {
        let mut record = Record::new("Alice");
        record.add_phone("1234567890").unwrap();
        record.add_email("Alice@Example.com").unwrap();
        record.add_birthday("12.06.1990").unwrap();
        record.add_address("Baker Street");

        let text = record.searchable_text();
        assert!(text.contains("alice"));
        assert!(text.contains("1234567890"));
        assert!(text.contains("alice@example.com"));
        assert!(text.contains("12.06.1990"));
        assert!(text.contains("baker street"));
    }

    #[test]
    fn test_record_serialization() {
        let mut record = Record::new("Alice");
        record.add_phone("1234567890").unwrap();
        record.add_birthday("29.02.2024").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
