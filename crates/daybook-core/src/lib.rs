//! # Daybook Core
//!
//! Core library for Daybook - a small, CLI-first personal journal.
//!
//! This crate provides the entry model, text statistics, and the journal
//! store independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **entry**: The immutable journal record
//! - **tokenize**: Word extraction and normalization
//! - **stats**: Word, letter and word-pair frequency rankings
//! - **journal**: The entry collection and its persistence
//! - **storage**: Storage backends (file, memory) and the on-disk format

pub mod entry;
pub mod error;
pub mod fs;
pub mod journal;
pub mod random;
pub mod stats;
pub mod storage;
pub mod tokenize;

pub use entry::Entry;
pub use error::{DaybookError, Result};
pub use journal::Journal;
pub use stats::{LetterFrequency, Stats, WordPair};
pub use storage::{FileBackend, MemoryBackend, StorageBackend};
pub use tokenize::tokenize;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
