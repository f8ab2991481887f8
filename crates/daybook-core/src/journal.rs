//! The journal store.
//!
//! `Journal` owns the ordered entry sequence and keeps the backend in step
//! with it: every mutation re-encodes and writes the whole sequence before
//! returning.

use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;

use crate::entry::Entry;
use crate::error::{DaybookError, Result};
use crate::random::uniform_index;
use crate::stats::Stats;
use crate::storage::{decode_entries, encode_entries, StorageBackend};

/// Ordered collection of entries persisted through a backend.
pub struct Journal<B: StorageBackend> {
    backend: B,
    entries: Vec<Entry>,
}

impl<B: StorageBackend> Journal<B> {
    /// Restore the journal from `backend`.
    ///
    /// Nothing stored yet gives an empty journal.
    ///
    /// # Errors
    ///
    /// Returns `DaybookError::Persistence` if the stored data cannot be read
    /// or parsed. Callers should treat this as fatal rather than start over
    /// with an empty journal.
    pub fn load(backend: B) -> Result<Self> {
        let entries = match backend.read_all()? {
            Some(bytes) => decode_entries(&bytes)?,
            None => {
                debug!(location = %backend.describe(), "no journal stored yet");
                Vec::new()
            }
        };
        debug!(
            location = %backend.describe(),
            count = entries.len(),
            "journal loaded"
        );
        Ok(Self { backend, entries })
    }

    /// Append an entry dated today and persist.
    ///
    /// # Errors
    ///
    /// Returns `DaybookError::Persistence` if the write fails. The entry stays
    /// in memory; a later successful `save` makes it durable.
    pub fn new_entry(&mut self, text: impl Into<String>) -> Result<&Entry> {
        self.add_entry(Entry::new(text))
    }

    /// Append an entry with an explicit date and persist.
    pub fn new_entry_on(&mut self, text: impl Into<String>, date: NaiveDate) -> Result<&Entry> {
        self.add_entry(Entry::with_date(text, date))
    }

    /// Append a pre-built entry and persist.
    pub fn add_entry(&mut self, entry: Entry) -> Result<&Entry> {
        let id = entry.id();
        self.entries.push(entry);
        info!(%id, "entry added");
        self.save()?;
        let index = self.entries.len() - 1;
        Ok(&self.entries[index])
    }

    /// All entries matching `query`, in journal order.
    pub fn search(&self, query: &str) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|entry| entry.matches(query))
            .collect()
    }

    /// One entry chosen uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns `DaybookError::EmptyCollection` if the journal has no entries.
    pub fn random_entry(&self) -> Result<&Entry> {
        let index = uniform_index(self.entries.len())?;
        Ok(&self.entries[index])
    }

    /// Remove `entry` (matched by identity) and persist.
    ///
    /// # Errors
    ///
    /// Returns `DaybookError::NotFound` if no entry with that identity is in
    /// the journal; nothing is written in that case.
    pub fn delete_entry(&mut self, entry: &Entry) -> Result<Entry> {
        self.delete_by_id(entry.id())
    }

    /// Remove the entry with `id` and persist.
    pub fn delete_by_id(&mut self, id: Uuid) -> Result<Entry> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.id() == id)
            .ok_or_else(|| DaybookError::NotFound(format!("entry {}", id)))?;
        let removed = self.entries.remove(position);
        info!(%id, "entry deleted");
        self.save()?;
        Ok(removed)
    }

    /// Resolve an entry by full id or unique id prefix.
    ///
    /// # Errors
    ///
    /// Returns `DaybookError::InvalidInput` for an empty or ambiguous prefix
    /// and `DaybookError::NotFound` when nothing matches.
    pub fn find(&self, id_prefix: &str) -> Result<&Entry> {
        let needle = id_prefix.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return Err(DaybookError::InvalidInput(
                "Entry ID must not be empty".to_string(),
            ));
        }
        if let Ok(id) = Uuid::parse_str(&needle) {
            return self
                .entries
                .iter()
                .find(|entry| entry.id() == id)
                .ok_or_else(|| DaybookError::NotFound(format!("entry {}", id)));
        }

        let mut matches = self
            .entries
            .iter()
            .filter(|entry| entry.id().to_string().starts_with(&needle));
        match (matches.next(), matches.next()) {
            (Some(entry), None) => Ok(entry),
            (None, _) => Err(DaybookError::NotFound(format!("entry {}", id_prefix))),
            (Some(_), Some(_)) => Err(DaybookError::InvalidInput(format!(
                "Entry ID prefix \"{}\" is ambiguous",
                id_prefix
            ))),
        }
    }

    /// Write the full sequence to the backend. Safe to call repeatedly.
    pub fn save(&self) -> Result<()> {
        let bytes = encode_entries(&self.entries)?;
        self.backend.write_all(&bytes)?;
        debug!(
            location = %self.backend.describe(),
            count = self.entries.len(),
            bytes = bytes.len(),
            "journal persisted"
        );
        Ok(())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Statistics over the current entries.
    pub fn stats(&self) -> Stats<'_> {
        Stats::new(&self.entries)
    }
}
