//! Core error handling
//!
//! Every contact and note operation either returns its result or fails with
//! one of these kinds. The CLI turns them into user-facing messages.

use std::fmt;
use thiserror::Error;

/// What kind of entity a lookup failed to find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Contact,
    Note,
    Phone,
    Email,
    Tag,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Contact => "contact",
            EntityKind::Note => "note",
            EntityKind::Phone => "phone",
            EntityKind::Email => "email",
            EntityKind::Tag => "tag",
        };
        f.write_str(name)
    }
}

/// Errors returned by the contact and note stores
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Phone is not exactly 10 decimal digits
    #[error("Invalid phone '{0}': phone number must be exactly 10 digits")]
    InvalidPhone(String),

    /// Email does not match `local-part@domain.tld`
    #[error("Invalid email '{0}': expected an address like name@example.com")]
    InvalidEmail(String),

    /// Birthday is not a calendar date in DD.MM.YYYY form
    #[error("Invalid birthday '{0}': birthday should have format DD.MM.YYYY")]
    InvalidBirthday(String),

    /// Lookup of a contact, note, phone, email or tag failed
    #[error("No such {kind}: '{key}'")]
    NotFound { kind: EntityKind, key: String },

    /// Birthday window must span at least one day
    #[error("Invalid day count {0}: the window must cover at least one day")]
    InvalidDayCount(u32),

    /// A note rename would overwrite another note
    #[error("A note titled '{0}' already exists")]
    TitleTaken(String),
}

impl CoreError {
    pub fn not_found(kind: EntityKind, key: impl Into<String>) -> Self {
        CoreError::NotFound {
            kind,
            key: key.into(),
        }
    }

    /// True for errors caused by malformed field input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidPhone(_) | CoreError::InvalidEmail(_) | CoreError::InvalidBirthday(_)
        )
    }
}

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;
