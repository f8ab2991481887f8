//! Storage abstraction for Daybook.
//!
//! A backend only knows how to read and write one opaque blob. The
//! [`Journal`](crate::journal::Journal) owns the entries and decides when
//! to persist; the format module turns entries into that blob and back.
//!
//! ## Backends
//!
//! - `FileBackend`: a single JSON file replaced atomically on every write
//! - `MemoryBackend`: in-process bytes, for tests and dry runs
//!
//! There is no locking. Two processes writing the same file is
//! last-writer-wins.

pub mod file;
pub mod format;
pub mod memory;
pub mod traits;

pub use file::FileBackend;
pub use format::{decode_entries, encode_entries, FORMAT_VERSION};
pub use memory::MemoryBackend;
pub use traits::StorageBackend;
