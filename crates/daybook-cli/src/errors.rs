//! CLI error types for structured error handling.
//!
//! Core errors are mapped to specific exit codes here so every command
//! reports them the same way.

use std::fmt;

use daybook_core::DaybookError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Entry not found
    NotFound { message: String, hint: String },

    /// Journal is empty
    Empty { message: String },

    /// Invalid user input
    InvalidInput(String),

    /// Persisted journal unreadable or unwritable
    Persistence { message: String, hint: String },

    /// Anything else
    General(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } | CliError::Persistence { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::Empty { message } => write!(f, "{}", message),
            CliError::InvalidInput(message) | CliError::General(message) => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::Empty { .. } => exit_codes::EMPTY_JOURNAL,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Persistence { .. } => exit_codes::PERSISTENCE_FAILED,
            CliError::General(_) => 1,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}

impl From<DaybookError> for CliError {
    fn from(err: DaybookError) -> Self {
        match err {
            DaybookError::NotFound(what) => CliError::not_found(
                format!("No {} in the journal", what),
                "Hint: Run `daybook list` to see entry IDs.",
            ),
            DaybookError::EmptyCollection => CliError::Empty {
                message: "The journal is empty.".to_string(),
            },
            DaybookError::InvalidInput(message) => CliError::InvalidInput(message),
            DaybookError::Persistence(message) => CliError::Persistence {
                message,
                hint: "Hint: The journal file was left untouched; fix or move it and retry."
                    .to_string(),
            },
            DaybookError::Other(message) => CliError::General(message),
        }
    }
}
