//! Adapter-level errors, converted to domain errors at the port boundary

use raspberry_domain::error::AwardsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum SqliteError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("SQLite connection lock poisoned")]
    Poisoned,
}

impl From<SqliteError> for AwardsError {
    fn from(err: SqliteError) -> Self {
        AwardsError::storage_failure(err.to_string())
    }
}
