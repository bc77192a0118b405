//! Error types for the storage layer.
//!
//! All errors are propagated via [`StorageError`], which wraps the
//! underlying I/O and JSON errors with context about which key-value
//! operation failed.

/// Errors that can occur in the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A key was not present in the store.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// A key contains characters that do not map to a file name.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}
