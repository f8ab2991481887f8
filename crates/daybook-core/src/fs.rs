//! Filesystem utilities for whole-file atomic replacement.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Replace `destination` with `bytes` so readers never observe a partial file.
///
/// Writes a sibling temp file, syncs it, then renames it over the
/// destination. The temp file handle is dropped before the rename on every
/// path, and the temp file is removed if anything fails.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, the temp file
/// cannot be written, or the rename fails even after the fallback attempt.
pub fn write_atomic(destination: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = temp_path_for(destination);
    let written = (|| {
        let mut file = File::create(&temp_path)?;
        file.write_all(bytes)?;
        file.sync_all()
    })();
    if let Err(err) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    rename_with_fallback(&temp_path, destination)
}

fn temp_path_for(destination: &Path) -> PathBuf {
    let name = destination
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "journal".to_string());
    destination.with_file_name(format!(".{}.tmp", name))
}

/// Rename, removing the destination and retrying only where rename refuses
/// to overwrite (notably Windows).
///
/// Any other failure leaves the destination alone and removes the temp file.
/// If the destination was removed and the retry still fails, the temp file is
/// kept since it holds the only copy of the data.
fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    let Err(initial_err) = fs::rename(temp_path, destination) else {
        return Ok(());
    };
    if !refuses_overwrite(&initial_err) {
        let _ = fs::remove_file(temp_path);
        return Err(initial_err);
    }

    let _ = fs::remove_file(destination);
    fs::rename(temp_path, destination).map_err(|retry_err| {
        io::Error::new(
            retry_err.kind(),
            format!(
                "Atomic rename failed (initial: {}, retry: {}); new contents kept at {}",
                initial_err,
                retry_err,
                temp_path.display()
            ),
        )
    })
}

fn refuses_overwrite(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
    )
}
