//! Unified storage interface
//!
//! The `Store` owns both in-memory collections and the persistence adapter
//! that loads and saves them. It is the single entry point used by the
//! command dispatcher.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = Store::open()?;  // Loads the snapshot, or starts empty
//!
//! store.contacts_mut().find_or_create("Alice").add_phone("1234567890")?;
//! store.save()?;
//! ```

use anyhow::{Context, Result};

use crate::config::Config;
use crate::contacts::ContactStore;
use crate::notes::NoteStore;
use crate::storage::{JsonPersistence, Persistence};

/// Contacts, notes and where they are persisted
pub struct Store<P: Persistence = JsonPersistence> {
    contacts: ContactStore,
    notes: NoteStore,
    persistence: P,
}

impl Store<JsonPersistence> {
    /// Open the store using the default configuration
    pub fn open() -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        Ok(Self::open_with_config(&config))
    }

    /// Open the store backed by the snapshot named in `config`
    pub fn open_with_config(config: &Config) -> Self {
        Self::with_persistence(JsonPersistence::new(config))
    }
}

impl<P: Persistence> Store<P> {
    /// Load both collections from `persistence`
    pub fn with_persistence(persistence: P) -> Self {
        let (contacts, notes) = persistence.load();
        Self {
            contacts,
            notes,
            persistence,
        }
    }

    pub fn contacts(&self) -> &ContactStore {
        &self.contacts
    }

    pub fn contacts_mut(&mut self) -> &mut ContactStore {
        &mut self.contacts
    }

    pub fn notes(&self) -> &NoteStore {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut NoteStore {
        &mut self.notes
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Check if there is nothing stored yet
    pub fn is_new(&self) -> bool {
        self.contacts.is_empty() && self.notes.is_empty()
    }

    /// Write both collections to durable storage
    pub fn save(&self) -> Result<()> {
        self.persistence
            .save(&self.contacts, &self.notes)
            .context("Failed to save contacts and notes")
    }
}
