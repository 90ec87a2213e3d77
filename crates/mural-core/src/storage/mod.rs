//! Key-value slot persistence
//!
//! The feedback list lives in a single named slot holding one string
//! payload, mirroring browser key-value storage. [`FileSlot`] backs the
//! slot with a file on disk; [`MemorySlot`] keeps it in memory for tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::Result;

/// File name of the feedback slot (the board's storage key).
pub const SLOT_FILE_NAME: &str = "portfolio-feedbacks.json";

/// A single named slot of string payloads.
pub trait StorageSlot {
    /// Read the slot payload; `None` when the slot was never written.
    fn read(&self) -> Result<Option<String>>;

    /// Overwrite the slot payload.
    fn write(&self, payload: &str) -> Result<()>;

    /// Remove the slot entirely, returning it to the never-written state.
    fn clear(&self) -> Result<()>;
}

/// File-backed slot.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot backed by the given file path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn write(&self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, payload)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

/// In-memory slot for tests and doubles.
///
/// Clones share the same underlying cell, so a test can keep a handle to a
/// slot it handed to a store.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    payload: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    /// Create an empty, never-written slot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-filled with a payload
    #[must_use]
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Arc::new(Mutex::new(Some(payload.into()))),
        }
    }

    fn cell(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.payload.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.cell().clone())
    }

    fn write(&self, payload: &str) -> Result<()> {
        *self.cell() = Some(payload.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.cell() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_slot_missing_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("feedbacks.json"));

        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn test_file_slot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("nested").join("feedbacks.json"));

        slot.write("[1,2,3]").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("[1,2,3]"));

        slot.clear().unwrap();
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn test_file_slot_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("feedbacks.json"));

        slot.clear().unwrap();
        slot.clear().unwrap();
    }

    #[test]
    fn test_memory_slot_clones_share_state() {
        let slot = MemorySlot::new();
        let handle = slot.clone();

        slot.write("payload").unwrap();
        assert_eq!(handle.read().unwrap().as_deref(), Some("payload"));

        handle.clear().unwrap();
        assert_eq!(slot.read().unwrap(), None);
    }
}
