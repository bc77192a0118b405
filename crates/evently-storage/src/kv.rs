//! File-backed JSON key-value operations.
//!
//! [`LocalStore`] is the durable local storage of the application -- the
//! analog of the browser's `localStorage`. Each key maps to one JSON file
//! under the store's root directory. Reads and writes are synchronous; the
//! store holds a single small record per key, so there is nothing to pool
//! or batch.
//!
//! # Key Patterns
//!
//! | Key | Value | Description |
//! |-----|-------|-------------|
//! | `user` | JSON `{id, name, email, role}` | The active session, written on login and deleted on logout |

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;

/// Handle to a directory of per-key JSON files.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Open the store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        tracing::debug!(root = %root.display(), "Local store opened");
        Ok(Self { root })
    }

    /// Serialize `value` as JSON and store it at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidKey`] for keys that do not map to a
    /// file name, [`StorageError::Serialization`] if serialization fails,
    /// or [`StorageError::Io`] if the write fails.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let json = serde_json::to_string(value)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Read the value at `key` and deserialize from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::KeyNotFound`] if the key does not exist,
    /// [`StorageError::Serialization`] if the stored payload does not
    /// parse, or [`StorageError::Io`] if the read fails.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<T, StorageError> {
        let path = self.path_for(key)?;
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::KeyNotFound(key.to_owned()));
            }
            Err(e) => return Err(StorageError::Io(e)),
        };
        Ok(serde_json::from_str(&contents)?)
    }

    /// Delete a key from the store.
    ///
    /// Deleting an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the delete fails for any reason
    /// other than the key being absent.
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    /// The directory this store writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a key to its backing file.
    ///
    /// Keys are restricted to ASCII alphanumerics, `-`, and `_` so a key
    /// can never escape the root directory.
    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}
