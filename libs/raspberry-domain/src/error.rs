//! Domain errors for the awards pipeline
//!
//! Row-level validation problems are NOT errors: they are collected as
//! `ValidationFailure`s and never abort a batch. Everything in this enum
//! aborts the operation that produced it.

use thiserror::Error;

/// Errors that can occur while loading movies or computing award intervals
///
/// These errors are independent of the adapters behind the ports (no csv or
/// rusqlite error types leak in here).
#[derive(Error, Debug)]
pub enum AwardsError {
    /// The batch load was requested without a file path
    #[error("CSV file path is required")]
    MissingFilePath,

    /// The movie file could not be opened, read or decoded
    #[error("Failed to read movie file: {0}")]
    SourceUnavailable(String),

    /// No producer has two or more wins, so no interval exists
    #[error("No prize range has been calculated.")]
    NoPrizeRange,

    /// Stored or provided data does not meet a domain invariant
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// The persistence backend failed
    #[error("Storage operation failed: {0}")]
    StorageFailure(String),

    /// An unexpected internal error occurred
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AwardsError {
    /// Create a source unavailable error with a message
    pub fn source_unavailable(msg: impl Into<String>) -> Self {
        Self::SourceUnavailable(msg.into())
    }

    /// Create an invalid data error with a message
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Create a storage failure error with a message
    pub fn storage_failure(msg: impl Into<String>) -> Self {
        Self::StorageFailure(msg.into())
    }

    /// Create an internal error with a message
    pub fn internal_error(msg: impl Into<String>) -> Self {
        Self::InternalError(msg.into())
    }
}

/// Result type alias for awards operations
pub type Result<T> = std::result::Result<T, AwardsError>;
