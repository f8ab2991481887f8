//! Error types for Daybook core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages.

use thiserror::Error;

/// Result type alias for Daybook operations.
pub type Result<T> = std::result::Result<T, DaybookError>;

/// Core error type for Daybook operations.
#[derive(Debug, Error)]
pub enum DaybookError {
    /// Reading or writing persisted state failed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Operation needs at least one entry
    #[error("The journal has no entries")]
    EmptyCollection,

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for DaybookError {
    fn from(err: std::io::Error) -> Self {
        DaybookError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for DaybookError {
    fn from(err: serde_json::Error) -> Self {
        DaybookError::Persistence(err.to_string())
    }
}
