//! Error types for the storage layer.

use thiserror::Error;
use todo_types::{ItemId, ValidationError};

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from DuckDB.
    #[error("database error: {0}")]
    Database(#[from] duckdb::Error),

    /// Serialization/deserialization of a stored document.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Request input rejected before touching the collection.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No item has the given id.
    #[error("item not found: {0}")]
    NotFound(ItemId),

    /// The store cannot be reached (poisoned connection, failed worker).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The connection string could not be understood.
    #[error("invalid store url: {0}")]
    InvalidUrl(String),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Returns true for failures of the backing store itself, as opposed to
    /// problems with the request.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            StoreError::Database(_) | StoreError::Unavailable(_) | StoreError::Io(_)
        )
    }
}
