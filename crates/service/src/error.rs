//! Typed error enum for the service layer.

use flora_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, duplicate, dangling reference).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input (blank name, missing descriptor id).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The write would collide with an existing row.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl ServiceError {
    /// Whether this error represents a duplicate/conflict.
    pub fn is_duplicate(&self) -> bool {
        match self {
            Self::Conflict(_) => true,
            Self::Storage(e) => e.is_duplicate(),
            Self::InvalidInput(_) => false,
        }
    }
}
