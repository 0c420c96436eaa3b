//! Storage layer
//!
//! Contacts and notes live in memory while the program runs and are
//! persisted as one JSON snapshot:
//!
//! - loaded once at startup (missing or unreadable snapshot = empty stores)
//! - saved after changes, always via atomic replace

pub mod error;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use persistence::{JsonPersistence, Persistence, Snapshot};
