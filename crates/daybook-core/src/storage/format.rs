//! On-disk journal document.
//!
//! ```json
//! { "format_version": "1", "entries": [ { "id": "...", "text": "...", "created_on": "2024-03-09" } ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::error::{DaybookError, Result};

/// Format version written by this build.
pub const FORMAT_VERSION: &str = "1";

#[derive(Serialize)]
struct DocumentRef<'a> {
    format_version: &'a str,
    entries: &'a [Entry],
}

#[derive(Deserialize)]
struct Document {
    format_version: String,
    entries: Vec<Entry>,
}

/// Serialize the full entry sequence.
pub fn encode_entries(entries: &[Entry]) -> Result<Vec<u8>> {
    let document = DocumentRef {
        format_version: FORMAT_VERSION,
        entries,
    };
    Ok(serde_json::to_vec_pretty(&document)?)
}

/// Parse a stored blob back into entries.
///
/// A blob that is empty or only whitespace decodes to no entries, matching a
/// journal file that was created but never written.
///
/// # Errors
///
/// Returns `DaybookError::Persistence` if the blob is not a valid document or
/// carries an unknown format version.
pub fn decode_entries(bytes: &[u8]) -> Result<Vec<Entry>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let document: Document = serde_json::from_slice(bytes)
        .map_err(|e| DaybookError::Persistence(format!("Corrupted journal data: {}", e)))?;
    if document.format_version != FORMAT_VERSION {
        return Err(DaybookError::Persistence(format!(
            "Unsupported journal format version: {}",
            document.format_version
        )));
    }
    Ok(document.entries)
}
