//! Snapshot persistence
//!
//! Both stores are written to a single JSON file. Saves use atomic writes
//! (write to temp file, then rename) so an interrupted save leaves the
//! previous snapshot intact.
//!
//! Storage location: `~/.local/share/infocli/assistant.json` (configurable
//! via `Config`)

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::contacts::ContactStore;
use crate::notes::NoteStore;
use crate::storage::error::{StorageError, StorageResult};

/// Loads and saves the contact and note stores
pub trait Persistence {
    /// Load both stores
    ///
    /// Never fails: a missing or unreadable snapshot yields empty stores.
    fn load(&self) -> (ContactStore, NoteStore);

    /// Overwrite durable storage with the given stores
    fn save(&self, contacts: &ContactStore, notes: &NoteStore) -> StorageResult<()>;
}

/// On-disk layout of the snapshot file
#[derive(Debug, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub contacts: ContactStore,
    #[serde(default)]
    pub notes: NoteStore,
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    contacts: &'a ContactStore,
    notes: &'a NoteStore,
}

/// JSON file persistence
#[derive(Debug, Clone)]
pub struct JsonPersistence {
    path: PathBuf,
}

impl JsonPersistence {
    /// Persist to the snapshot path from the configuration
    pub fn new(config: &Config) -> Self {
        Self::at(config.snapshot_path())
    }

    /// Persist to an explicit file
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if a snapshot exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Where an unparseable snapshot is copied before it is ignored
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".corrupt.backup");
        PathBuf::from(name)
    }

    /// Read the snapshot from disk
    ///
    /// Returns `None` if the file doesn't exist. A file that exists but
    /// cannot be parsed is backed up and reported as `CorruptSnapshot`.
    pub fn read_snapshot(&self) -> StorageResult<Option<Snapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }

        // Bytes, not a String: invalid UTF-8 must reach the corrupt-snapshot branch
        let content = fs::read(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;

        match serde_json::from_slice(&content) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                let backup_path = self.backup_path();
                fs::copy(&self.path, &backup_path)
                    .map_err(|source| StorageError::write_failure(source, backup_path.clone()))?;
                Err(StorageError::CorruptSnapshot {
                    path: self.path.clone(),
                    backup_path,
                    details: e.to_string(),
                })
            }
        }
    }
}

impl Persistence for JsonPersistence {
    fn load(&self) -> (ContactStore, NoteStore) {
        match self.read_snapshot() {
            Ok(Some(snapshot)) => {
                info!(
                    path = %self.path.display(),
                    contacts = snapshot.contacts.len(),
                    notes = snapshot.notes.len(),
                    "Loaded snapshot"
                );
                (snapshot.contacts, snapshot.notes)
            }
            Ok(None) => {
                debug!(path = %self.path.display(), "No snapshot yet, starting empty");
                Default::default()
            }
            Err(e) => {
                warn!(
                    error = %e,
                    hint = e.recovery_suggestion().unwrap_or_default(),
                    "Could not load snapshot, starting empty"
                );
                Default::default()
            }
        }
    }

    fn save(&self, contacts: &ContactStore, notes: &NoteStore) -> StorageResult<()> {
        let json = serde_json::to_vec_pretty(&SnapshotRef { contacts, notes })?;
        atomic_write(&self.path, &json)?;
        debug!(
            path = %self.path.display(),
            contacts = contacts.len(),
            notes = notes.len(),
            "Saved snapshot"
        );
        Ok(())
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::write_failure(e, parent.to_path_buf()))?;
    }

    let temp_path = path.with_extension("tmp");

    let mut file =
        File::create(&temp_path).map_err(|e| StorageError::write_failure(e, temp_path.clone()))?;
    file.write_all(data)
        .map_err(|e| StorageError::write_failure(e, temp_path.clone()))?;
    file.sync_all()
        .map_err(|e| StorageError::write_failure(e, temp_path.clone()))?;

    fs::rename(&temp_path, path).map_err(|source| StorageError::Replace {
        temp: temp_path.clone(),
        target: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
