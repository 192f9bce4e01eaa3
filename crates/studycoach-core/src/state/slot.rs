//! Persistence slot -- the single durable location for the encoded state.
//!
//! Only the state store talks to a slot; everything else reads plain values
//! out of the store.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::StorageError;
use crate::storage::data_dir;

/// A key-less single-value textual storage location.
pub trait PersistenceSlot: Send {
    /// Current slot content, `None` when never written.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the slot content.
    fn write(&self, token: &str) -> Result<(), StorageError>;
}

/// File-backed slot: `state.dat` under the application data directory.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Probe storage and return a slot under the default data directory.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the data directory cannot
    /// be created; callers fall back to a [`MemorySlot`].
    pub fn open() -> Result<Self, StorageError> {
        let dir = data_dir().map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(Self {
            path: dir.join("state.dat"),
        })
    }

    /// Slot at an explicit path. Used by tests and custom deployments.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl PersistenceSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed(e.to_string())),
        }
    }

    fn write(&self, token: &str) -> Result<(), StorageError> {
        fs::write(&self.path, token).map_err(|e| StorageError::WriteFailed(e.to_string()))
    }
}

/// In-process slot used when durable storage is unavailable, and in tests.
#[derive(Default)]
pub struct MemorySlot {
    cell: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistenceSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        let cell = self
            .cell
            .lock()
            .map_err(|_| StorageError::ReadFailed("slot lock poisoned".into()))?;
        Ok(cell.clone())
    }

    fn write(&self, token: &str) -> Result<(), StorageError> {
        let mut cell = self
            .cell
            .lock()
            .map_err(|_| StorageError::WriteFailed("slot lock poisoned".into()))?;
        *cell = Some(token.to_string());
        Ok(())
    }
}
