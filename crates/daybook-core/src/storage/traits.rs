//! Storage backend trait definition.

use crate::error::Result;

/// Raw "read everything / write everything" storage.
///
/// Implementations must ensure:
/// - `read_all` distinguishes "nothing stored yet" (`Ok(None)`) from failure
/// - `write_all` replaces the whole stored blob, never appends
/// - Any handle acquired for a call is released before the call returns
pub trait StorageBackend {
    /// Read the stored blob.
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` if nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `DaybookError::Persistence` on I/O failure.
    fn read_all(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the stored blob with `bytes`.
    ///
    /// # Errors
    ///
    /// Returns `DaybookError::Persistence` if the write fails. The previous
    /// blob is left in place.
    fn write_all(&self, bytes: &[u8]) -> Result<()>;

    /// Human-readable location, for logs and messages.
    fn describe(&self) -> String;
}

/// Lets a caller keep ownership of a backend while a journal borrows it.
impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn read_all(&self) -> Result<Option<Vec<u8>>> {
        (**self).read_all()
    }

    fn write_all(&self, bytes: &[u8]) -> Result<()> {
        (**self).write_all(bytes)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
