//! The journal entry record.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One journal record.
///
/// Fields are private so an entry cannot change after construction. Identity
/// is the `id`; two entries with the same text and date are still distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    id: Uuid,
    text: String,
    created_on: NaiveDate,
}

impl Entry {
    /// Create an entry dated today (local time).
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_date(text, Local::now().date_naive())
    }

    /// Create an entry with an explicit date.
    pub fn with_date(text: impl Into<String>, created_on: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            created_on,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    /// True if `query` occurs in the `YYYY-MM-DD` date or in the text.
    ///
    /// Case-sensitive, no normalization.
    pub fn matches(&self, query: &str) -> bool {
        self.created_on.format("%Y-%m-%d").to_string().contains(query) || self.text.contains(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_matches_text_substring() {
        let entry = Entry::with_date("Walked the dog at dawn", date(2024, 3, 9));
        assert!(entry.matches("dog"));
        assert!(entry.matches("the dog at"));
        assert!(!entry.matches("cat"));
    }

    #[test]
    fn test_matches_is_case_sensitive() {
        let entry = Entry::with_date("Walked the dog", date(2024, 3, 9));
        assert!(entry.matches("Walked"));
        assert!(!entry.matches("walked"));
    }

    #[test]
    fn test_matches_iso_date() {
        let entry = Entry::with_date("nothing much", date(2024, 3, 9));
        assert!(entry.matches("2024-03-09"));
        assert!(entry.matches("2024-03"));
        assert!(entry.matches("-09"));
        assert!(!entry.matches("2024-3-9"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let entry = Entry::with_date("", date(2024, 1, 1));
        assert!(entry.matches(""));
    }

    #[test]
    fn test_identical_content_has_distinct_identity() {
        let a = Entry::with_date("same", date(2024, 1, 1));
        let b = Entry::with_date("same", date(2024, 1, 1));
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_new_uses_today() {
        let before = Local::now().date_naive();
        let entry = Entry::new("today");
        let after = Local::now().date_naive();
        assert!(entry.created_on() >= before && entry.created_on() <= after);
        assert_eq!(entry.text(), "today");
    }
}
