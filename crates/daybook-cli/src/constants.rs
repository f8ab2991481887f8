//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Entry not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// The journal has no entries for an operation that needs one.
    pub const EMPTY_JOURNAL: i32 = 5;

    /// Stored journal could not be read or parsed.
    pub const PERSISTENCE_FAILED: i32 = 6;
}

/// Maximum characters of entry text shown in list tables.
pub const TABLE_TEXT_MAX: usize = 60;
