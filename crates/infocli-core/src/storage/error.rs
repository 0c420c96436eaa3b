//! Snapshot storage errors

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why the snapshot could not be read or written
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("No permission to write '{path}'")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Out of disk space while writing '{path}'")]
    DiskFull {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not read snapshot '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Snapshot exists but is not a valid contacts/notes document
    #[error("Snapshot '{path}' is unreadable ({details}); copied to '{backup_path}'")]
    CorruptSnapshot {
        path: PathBuf,
        backup_path: PathBuf,
        details: String,
    },

    #[error("Could not encode contacts and notes: {0}")]
    Encode(#[from] serde_json::Error),

    /// The finished temp file could not replace the snapshot
    #[error("Could not move '{temp}' over '{target}': {source}")]
    Replace {
        temp: PathBuf,
        target: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// Classify a failed write to `path`
    pub fn write_failure(source: io::Error, path: PathBuf) -> Self {
        if source.kind() == io::ErrorKind::PermissionDenied {
            StorageError::PermissionDenied { path, source }
        } else if is_out_of_space(&source) {
            StorageError::DiskFull { path, source }
        } else {
            StorageError::Write { path, source }
        }
    }

    /// What the user can do about it, if anything
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            StorageError::DiskFull { .. } => Some("Free some disk space, then run the command again."),
            StorageError::PermissionDenied { .. } => {
                Some("Make the data directory writable, or choose another one with `info-cli config set data_dir <path>`.")
            }
            StorageError::CorruptSnapshot { .. } => {
                Some("Your previous contacts and notes are in the .corrupt.backup file next to the snapshot.")
            }
            _ => None,
        }
    }
}

// StorageFull is not a stable ErrorKind on every toolchain
fn is_out_of_space(error: &io::Error) -> bool {
    let msg = error.to_string().to_lowercase();
    ["no space left", "disk full", "quota exceeded", "not enough space"]
        .iter()
        .any(|needle| msg.contains(needle))
}

pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(kind: io::ErrorKind, msg: &str) -> StorageError {
        StorageError::write_failure(io::Error::new(kind, msg), PathBuf::from("/data/assistant.json"))
    }

    #[test]
    fn test_permission_denied_has_hint() {
        let err = classify(io::ErrorKind::PermissionDenied, "access denied");
        assert!(matches!(err, StorageError::PermissionDenied { .. }));
        assert!(err.recovery_suggestion().unwrap().contains("data_dir"));
    }

    #[test]
    fn test_out_of_space_is_disk_full() {
        let err = classify(io::ErrorKind::Other, "No space left on device");
        assert!(matches!(err, StorageError::DiskFull { .. }));
        assert!(err.recovery_suggestion().is_some());
    }

    #[test]
    fn test_other_failures_have_no_hint() {
        let err = classify(io::ErrorKind::Other, "broken pipe");
        assert!(matches!(err, StorageError::Write { .. }));
        assert!(err.recovery_suggestion().is_none());
    }

    #[test]
    fn test_corrupt_snapshot_names_backup() {
        let err = StorageError::CorruptSnapshot {
            path: PathBuf::from("/data/assistant.json"),
            backup_path: PathBuf::from("/data/assistant.json.corrupt.backup"),
            details: "expected value at line 1".to_string(),
        };

        assert!(err.to_string().contains("assistant.json.corrupt.backup"));
        assert!(err.recovery_suggestion().is_some());
    }
}
