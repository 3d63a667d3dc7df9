//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (duplicate, dangling reference,
//! database failures) instead of downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Unique constraint violation (category name, link pair).
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// Foreign key violation, e.g. a link to a category that does not exist.
    #[error("foreign key violation: {0}")]
    ForeignKey(String),

    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Schema bootstrap failure.
    #[error("schema error: {0}")]
    Schema(String),
}

impl StorageError {
    /// Whether this error is a unique-constraint violation.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }

    /// Whether this error is a foreign-key violation.
    pub fn is_foreign_key(&self) -> bool {
        matches!(self, Self::ForeignKey(_))
    }
}

/// Custom `From<sqlx::Error>`, not blanket `#[from]`.
///
/// - SQLSTATE 23505 → `Duplicate`
/// - SQLSTATE 23503 → `ForeignKey`
/// - Everything else → `Database`
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == "23505") => {
                Self::Duplicate(db_err.message().to_owned())
            },
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == "23503") => {
                Self::ForeignKey(db_err.message().to_owned())
            },
            _ => Self::Database(err),
        }
    }
}
