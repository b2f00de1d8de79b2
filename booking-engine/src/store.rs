//! Snapshot persistence for the booking table
//!
//! The whole table is one JSON document, rewritten on every committed
//! mutation. Writes go to a sibling tmp file first and rename over the
//! target, so a concurrent reader never observes a half-written
//! snapshot. The table is reconstructible state, not a ledger, so load
//! chooses availability over strictness: anything unreadable becomes an
//! empty table.

use shared::{BookingError, BookingTable};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Persistence errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("snapshot io error: {0}")]
    Io(#[from] io::Error),

    #[error("snapshot serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<StoreError> for BookingError {
    fn from(err: StoreError) -> Self {
        BookingError::PersistenceUnavailable(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot. A missing, unreadable or malformed file yields
    /// an empty table; the problem is logged, never returned.
    pub fn load(&self) -> BookingTable {
        if !self.path.exists() {
            return BookingTable::new();
        }
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Unreadable snapshot, starting with an empty table"
                );
                return BookingTable::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Malformed snapshot, starting with an empty table"
                );
                BookingTable::new()
            }
        }
    }

    /// Serialize the whole table and replace the snapshot.
    ///
    /// Atomic write: tmp file + rename.
    pub fn save(&self, table: &BookingTable) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(table)?;

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp_path = PathBuf::from(tmp);

        fs::write(&tmp_path, content)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }
}
