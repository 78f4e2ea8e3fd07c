//! Database error types for acad-db.

use acad_core::errors::AcademyError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned an unusable value.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// An already classified error raised while reading or writing a row
    /// (e.g., a column codec failure).
    #[error(transparent)]
    Classified(#[from] AcademyError),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

impl From<DatabaseError> for AcademyError {
    /// Classified errors pass through unchanged; every other store fault is
    /// an internal processing failure.
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Classified(inner) => inner,
            other => Self::processing("store access failed", other),
        }
    }
}
