//! Error types for object storage operations

use thiserror::Error;

/// Errors returned by an [`ObjectStore`](crate::ObjectStore)
#[derive(Error, Debug)]
pub enum StorageError {
    /// Writing an object failed
    #[error("Failed to store object {key}: {message}")]
    Put { key: String, message: String },

    /// Listing objects under a prefix failed
    #[error("Failed to list objects under {prefix}: {message}")]
    List { prefix: String, message: String },
}

/// Type alias for Result with StorageError
pub type StorageResult<T> = Result<T, StorageError>;
