//! JSON snapshot file handling.
//!
//! Missing files are not an error (a fresh session simply has no saved
//! state), and corrupt files are logged and treated as missing rather than
//! aborting the session.

use hedge_sim_core::PositionSnapshot;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from snapshot file operations.
#[derive(Error, Debug)]
pub enum PersistError {
    /// IO error reading/writing the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Saves and loads position snapshots at a fixed path.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Writes the snapshot as pretty JSON, creating parent directories if
    /// they don't exist.
    ///
    /// # Errors
    /// Returns `PersistError` when the file cannot be created or written.
    pub fn save(&self, snapshot: &PositionSnapshot) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, snapshot)?;

        debug!(
            path = %self.path.display(),
            legs = snapshot.option_positions.len(),
            "saved position snapshot"
        );

        Ok(())
    }

    /// Loads the saved snapshot.
    ///
    /// Returns `Ok(None)` when no file exists or when the file cannot be
    /// parsed (the latter is logged as a warning; the session starts fresh).
    ///
    /// # Errors
    /// Returns `PersistError` only for IO failures on an existing file.
    pub fn load(&self) -> Result<Option<PositionSnapshot>, PersistError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no snapshot file, starting fresh");
            return Ok(None);
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        match serde_json::from_reader(reader) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "snapshot file is unreadable, starting fresh"
                );
                Ok(None)
            }
        }
    }

    /// Deletes the snapshot file if it exists.
    ///
    /// # Errors
    /// Returns `PersistError` when removal fails.
    pub fn clear(&self) -> Result<(), PersistError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            debug!(path = %self.path.display(), "cleared snapshot file");
        }
        Ok(())
    }
}
