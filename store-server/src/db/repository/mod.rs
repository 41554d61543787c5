//! Repository Module
//!
//! CRUD access to the SQLite tables: free functions over a pool (or a
//! transaction's connection) per table. Stock mutation lives in
//! [`crate::checkout`]; nothing here decrements counters.

pub mod order;
pub mod product;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Current wall-clock time as Unix millis — the only timestamp format
/// the repository layer stores.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
