//! InfoCLI Core Library
//!
//! This crate provides the core functionality for InfoCLI, a personal
//! assistant for contacts and notes.
//!
//! # Quick Start
//!
//! ```text
//! let mut store = Store::open()?;
//!
//! // Add a contact
//! let record = store.contacts_mut().find_or_create("Alice");
//! record.add_phone("1234567890")?;
//! record.add_birthday("12.06.1990")?;
//!
//! // Upcoming birthdays
//! let window = store.contacts().birthdays_in_window(7, &SystemClock)?;
//! store.save()?;
//! ```
//!
//! # Modules
//!
//! - `store`: Unified storage interface (main entry point)
//! - `fields`: Validated phone, email and birthday types
//! - `record`, `contacts`: Contacts and the contact store
//! - `note`, `notes`: Notes and the note store
//! - `clock`: Injectable "today"
//! - `storage`: JSON snapshot persistence
//! - `config`: Application configuration

pub mod clock;
pub mod config;
pub mod contacts;
pub mod error;
pub mod fields;
pub mod note;
pub mod notes;
pub mod record;
pub mod storage;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use contacts::{BirthdayWindow, ContactStore};
pub use error::{CoreError, CoreResult, EntityKind};
pub use fields::{validate_birthday, validate_email, validate_phone, Birthday, Email, Phone};
pub use note::Note;
pub use notes::{NoteEdit, NoteStore};
pub use record::Record;
pub use storage::{JsonPersistence, Persistence, StorageError};
pub use store::Store;
