//! Error types for the storage layer.

use juicestack_model::ValidationError;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A persisted snapshot from an unknown schema version.
    #[error("unsupported snapshot schema version {found} (supported: {supported})")]
    UnsupportedSchema { found: u32, supported: u32 },

    /// A persisted snapshot that fails model validation.
    #[error("invalid snapshot data: {0}")]
    InvalidData(#[from] ValidationError),
}
