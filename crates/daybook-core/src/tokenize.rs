//! Word extraction from raw entry text.
//!
//! A token is a whitespace-delimited piece with any leading or trailing
//! non-ASCII-letter characters removed, lower-cased. Interior characters
//! are kept, so "don't" and "well-known" survive intact while "(hello!"
//! becomes "hello".

use crate::entry::Entry;

/// Tokenize `text` lazily, in order of occurrence.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(|piece| {
        let word = piece.trim_matches(|c: char| !c.is_ascii_alphabetic());
        if word.is_empty() {
            None
        } else {
            Some(word.to_lowercase())
        }
    })
}

/// Flattened token stream over all entries, entry order then token order.
pub fn corpus_tokens(entries: &[Entry]) -> impl Iterator<Item = String> + '_ {
    entries.iter().flat_map(|entry| tokenize(entry.text()))
}
