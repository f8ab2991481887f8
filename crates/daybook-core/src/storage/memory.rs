//! In-memory storage backend.

use std::cell::{Cell, RefCell};

use crate::error::{DaybookError, Result};
use crate::storage::traits::StorageBackend;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the journal is
/// single-threaded.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    bytes: RefCell<Option<Vec<u8>>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `bytes` already stored.
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let backend = Self::default();
        *backend.bytes.borrow_mut() = Some(bytes.into());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Copy of the currently stored blob.
    pub fn snapshot(&self) -> Option<Vec<u8>> {
        self.bytes.borrow().clone()
    }
}

impl StorageBackend for MemoryBackend {
    fn read_all(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.bytes.borrow().clone())
    }

    fn write_all(&self, bytes: &[u8]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(DaybookError::Persistence(
                "Simulated write error".to_string(),
            ));
        }
        *self.bytes.borrow_mut() = Some(bytes.to_vec());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
