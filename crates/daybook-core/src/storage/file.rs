//! Single-file storage backend.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{DaybookError, Result};
use crate::fs::write_atomic;
use crate::storage::traits::StorageBackend;

/// Stores the journal as one file on disk.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageBackend for FileBackend {
    fn read_all(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(DaybookError::Persistence(format!(
                "Failed to read {}: {}",
                self.path.display(),
                err
            ))),
        }
    }

    fn write_all(&self, bytes: &[u8]) -> Result<()> {
        write_atomic(&self.path, bytes).map_err(|err| {
            DaybookError::Persistence(format!(
                "Failed to write {}: {}",
                self.path.display(),
                err
            ))
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
