//! Validated field types
//!
//! `Phone`, `Email` and `Birthday` can only be built through the validators in
//! this module, so a value that exists is always well-formed. Deserialization
//! goes through the same validators.
//!
//! Rules:
//! - phone: exactly 10 ASCII digits
//! - email: `local-part@domain.tld`, local part is alphanumeric runs joined by
//!   `.`, `-` or `_`; domain labels are alphanumeric/hyphen; last label is at
//!   least two letters
//! - birthday: `DD.MM.YYYY`, must be a real calendar date

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Date format used for birthday input and display
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Required phone length
pub const PHONE_LEN: usize = 10;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]+([.\-_][A-Za-z0-9]+)*@[A-Za-z0-9-]+(\.[A-Za-z]{2,})+$")
        .expect("valid email regex")
});

/// Validate a raw phone number
pub fn validate_phone(raw: &str) -> CoreResult<Phone> {
    if raw.chars().count() != PHONE_LEN || !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoreError::InvalidPhone(raw.to_string()));
    }
    Ok(Phone(raw.to_string()))
}

/// Validate a raw email address (full-string match)
pub fn validate_email(raw: &str) -> CoreResult<Email> {
    if !EMAIL_RE.is_match(raw) {
        return Err(CoreError::InvalidEmail(raw.to_string()));
    }
    Ok(Email(raw.to_string()))
}

/// Validate a raw birthday in `DD.MM.YYYY` form
pub fn validate_birthday(raw: &str) -> CoreResult<Birthday> {
    NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
        .map(Birthday)
        .map_err(|_| CoreError::InvalidBirthday(raw.to_string()))
}

/// A 10-digit phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Phone {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_phone(s)
    }
}

impl TryFrom<String> for Phone {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_phone(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

/// A validated email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Email {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_email(s)
    }
}

impl TryFrom<String> for Email {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_email(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

/// A birth date; the year is kept but only month/day drive recurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary in `year`.
    ///
    /// Feb 29 maps to Feb 28 in non-leap years. `None` only when `year` is
    /// outside chrono's supported range.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = (self.0.month(), self.0.day());
        NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
            if month == 2 && day == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }

    /// First anniversary on or after `today`
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.anniversary_in(today.year())?;
        if this_year < today {
            self.anniversary_in(today.year() + 1)
        } else {
            Some(this_year)
        }
    }

    /// Anniversary is celebrated on `date`
    ///
    /// Follows `anniversary_in`, so a Feb 29 birthday falls on Feb 28 in
    /// common years.
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        self.anniversary_in(date.year()) == Some(date)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl FromStr for Birthday {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_birthday(s)
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_phones_round_trip() {
        for raw in ["1234567890", "0000000000", "0931234567"] {
            let phone = validate_phone(raw).unwrap();
            assert_eq!(phone.as_str(), raw);
            assert_eq!(phone.to_string(), raw);
        }
    }

    #[test]
    fn test_phone_wrong_length() {
        for raw in ["", "123", "123456789", "12345678901"] {
            assert_eq!(
                validate_phone(raw),
                Err(CoreError::InvalidPhone(raw.to_string()))
            );
        }
    }

    #[test]
    fn test_phone_non_digits() {
        assert!(validate_phone("12345abcde").is_err());
        assert!(validate_phone("+380931234").is_err());
        assert!(validate_phone("123 456 78").is_err());
    }

    #[test]
    fn test_valid_emails() {
        for raw in [
            "a.b-c@sub.example.co",
            "user@example.com",
            "john_doe@mail-server.org",
            "x1@y2.io",
        ] {
            assert!(validate_email(raw).is_ok(), "{} should be valid", raw);
        }
    }

    #[test]
    fn test_invalid_emails() {
        for raw in [
            "not-an-email",
            "@example.com",
            "user@",
            "user@example",
            "user@example.c",
            "user..name@example.com",
            ".user@example.com",
            "user@example.com trailing",
            " user@example.com",
        ] {
            assert!(validate_email(raw).is_err(), "{} should be invalid", raw);
        }
    }

    #[test]
    fn test_birthday_parsing() {
        let leap = validate_birthday("29.02.2024").unwrap();
        assert_eq!(leap.date(), date(2024, 2, 29));
        assert_eq!(leap.to_string(), "29.02.2024");

        assert!(validate_birthday("31.04.2023").is_err());
        assert!(validate_birthday("29.02.2023").is_err());
        assert!(validate_birthday("2024-02-29").is_err());
        assert!(validate_birthday("").is_err());
    }

    #[test]
    fn test_next_occurrence_later_this_year() {
        let birthday = validate_birthday("12.06.1990").unwrap();
        assert_eq!(
            birthday.next_occurrence(date(2024, 6, 10)),
            Some(date(2024, 6, 12))
        );
    }

    #[test]
    fn test_next_occurrence_today() {
        let birthday = validate_birthday("10.06.1990").unwrap();
        assert_eq!(
            birthday.next_occurrence(date(2024, 6, 10)),
            Some(date(2024, 6, 10))
        );
    }

    #[test]
    fn test_next_occurrence_already_passed() {
        let birthday = validate_birthday("01.01.1990").unwrap();
        assert_eq!(
            birthday.next_occurrence(date(2024, 6, 10)),
            Some(date(2025, 1, 1))
        );
    }

    #[test]
    fn test_leap_day_in_common_year() {
        let birthday = validate_birthday("29.02.2000").unwrap();
        assert_eq!(birthday.anniversary_in(2023), Some(date(2023, 2, 28)));
        assert_eq!(birthday.anniversary_in(2024), Some(date(2024, 2, 29)));
        assert_eq!(
            birthday.next_occurrence(date(2023, 3, 1)),
            Some(date(2024, 2, 29))
        );
    }

    #[test]
    fn test_falls_on_ignores_year() {
        let birthday = validate_birthday("15.08.1985").unwrap();
        assert!(birthday.falls_on(date(2024, 8, 15)));
        assert!(!birthday.falls_on(date(2024, 8, 16)));
    }

    #[test]
    fn test_leap_day_falls_on_feb_28_in_common_years() {
        let birthday: Birthday = "29.02.2000".parse().unwrap();
        assert!(birthday.falls_on(date(2023, 2, 28)));
        assert!(!birthday.falls_on(date(2023, 3, 1)));
        assert!(birthday.falls_on(date(2024, 2, 29)));
        assert!(!birthday.falls_on(date(2024, 2, 28)));
    }

    #[test]
    fn test_deserialize_rejects_invalid_phone() {
        let ok: Phone = serde_json::from_str("\"1234567890\"").unwrap();
        assert_eq!(ok.as_str(), "1234567890");
        assert!(serde_json::from_str::<Phone>("\"12345\"").is_err());
        assert!(serde_json::from_str::<Email>("\"nope\"").is_err());
    }
}
