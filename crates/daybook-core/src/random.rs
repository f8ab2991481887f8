//! Uniform index selection backed by OS entropy.

use crate::error::{DaybookError, Result};

fn random_u64() -> Result<u64> {
    let mut bytes = [0u8; 8];
    getrandom::getrandom(&mut bytes)
        .map_err(|e| DaybookError::Other(format!("Failed to read OS randomness: {}", e)))?;
    Ok(u64::from_le_bytes(bytes))
}

/// Pick an index in `0..len` uniformly.
///
/// Draws are rejected above the largest multiple of `len` so the modulo does
/// not favor low indices.
///
/// # Errors
///
/// Returns `DaybookError::EmptyCollection` when `len` is zero.
pub fn uniform_index(len: usize) -> Result<usize> {
    if len == 0 {
        return Err(DaybookError::EmptyCollection);
    }
    let bound = len as u64;
    let zone = u64::MAX - (u64::MAX % bound);
    loop {
        let value = random_u64()?;
        if value < zone {
            return Ok((value % bound) as usize);
        }
    }
}
