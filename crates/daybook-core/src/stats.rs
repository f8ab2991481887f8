//! Frequency rankings over journal text.
//!
//! Everything here is computed fresh from the entries on each call. Rankings
//! sort by count descending and keep first-seen order among equal counts.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use serde::Serialize;

use crate::entry::Entry;
use crate::tokenize::corpus_tokens;

pub const DEFAULT_WORDS_LIMIT: usize = 20;
pub const DEFAULT_LONGEST_LIMIT: usize = 20;
pub const DEFAULT_COMBOS_LIMIT: usize = 10;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Two adjacent tokens in the flattened token stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WordPair {
    pub first: String,
    pub second: String,
}

impl fmt::Display for WordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}

/// Letter histogram over all 26 ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterFrequency {
    /// Every letter, most frequent first; ties in alphabetical order.
    pub letters: Vec<(char, usize)>,
    /// Sum of all letter counts.
    pub total: usize,
}

impl LetterFrequency {
    /// Share of `count` in the total as a percentage, 0.0 when there are no letters.
    pub fn percentage(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }
}

/// Read-only statistics view over a slice of entries.
#[derive(Debug, Clone, Copy)]
pub struct Stats<'a> {
    entries: &'a [Entry],
}

impl<'a> Stats<'a> {
    pub fn new(entries: &'a [Entry]) -> Self {
        Self { entries }
    }

    /// Top `n` tokens by occurrence count.
    pub fn most_common_words(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = rank_by_count(corpus_tokens(self.entries));
        ranked.truncate(n);
        ranked
    }

    /// Top `n` distinct tokens by character length.
    pub fn longest_words(&self, n: usize) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut words: Vec<String> = corpus_tokens(self.entries)
            .filter(|word| seen.insert(word.clone()))
            .collect();
        words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        words.truncate(n);
        words
    }

    /// Letter counts over the raw entry text, all 26 letters included.
    pub fn most_common_letters(&self) -> LetterFrequency {
        let mut counts = [0usize; 26];
        let mut total = 0;
        for entry in self.entries {
            for ch in entry.text().chars() {
                if let Some(lower) = single_ascii_lowercase(ch) {
                    counts[(lower as u8 - b'a') as usize] += 1;
                    total += 1;
                }
            }
        }

        let mut letters: Vec<(char, usize)> = ALPHABET.chars().zip(counts).collect();
        letters.sort_by(|a, b| b.1.cmp(&a.1));
        LetterFrequency { letters, total }
    }

    /// Top `n` adjacent token pairs.
    ///
    /// Pairs are taken over the flattened stream of every entry's tokens, so
    /// the last word of one entry pairs with the first word of the next.
    pub fn most_common_word_combos(&self, n: usize) -> Vec<(WordPair, usize)> {
        let tokens: Vec<String> = corpus_tokens(self.entries).collect();
        let pairs = tokens.windows(2).map(|window| WordPair {
            first: window[0].clone(),
            second: window[1].clone(),
        });
        let mut ranked = rank_by_count(pairs);
        ranked.truncate(n);
        ranked
    }
}

/// The ASCII letter `ch` lower-cases to, if it lower-cases to exactly one.
fn single_ascii_lowercase(ch: char) -> Option<char> {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(first), None) if first.is_ascii_lowercase() => Some(first),
        _ => None,
    }
}

/// Count items and order by count descending, first-seen order on ties.
fn rank_by_count<T, I>(items: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut positions: HashMap<T, usize> = HashMap::new();
    let mut counted: Vec<(T, usize)> = Vec::new();
    for item in items {
        match positions.get(&item) {
            Some(&index) => counted[index].1 += 1,
            None => {
                positions.insert(item.clone(), counted.len());
                counted.push((item, 1));
            }
        }
    }
    // sort_by is stable
    counted.sort_by(|a, b| b.1.cmp(&a.1));
    counted
}
