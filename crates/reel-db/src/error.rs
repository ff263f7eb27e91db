//! Database error types for reel-db.

use reel_core::errors::CoreError;
use reel_rotation::StoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned malformed data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (duplicate name, illegal transition, ...).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Input rejected before reaching the database.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<DatabaseError> for StoreError {
    fn from(error: DatabaseError) -> Self {
        Self::backend(error)
    }
}

/// Map a UNIQUE constraint violation to `InvalidState`, passing other errors through.
pub(crate) fn map_unique(error: libsql::Error, what: impl FnOnce() -> String) -> DatabaseError {
    if error.to_string().contains("UNIQUE constraint failed") {
        DatabaseError::InvalidState(format!("{} already exists", what()))
    } else {
        DatabaseError::LibSql(error)
    }
}
