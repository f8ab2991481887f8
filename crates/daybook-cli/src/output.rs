//! Output formatting for entries and statistics.

use daybook_core::{Entry, LetterFrequency, WordPair};
use serde_json::{json, Value};

use crate::constants::TABLE_TEXT_MAX;
use crate::ui::render::{table, truncate, Column};
use crate::ui::UiContext;

const SHORT_ID_LEN: usize = 8;

fn short_id(entry: &Entry) -> String {
    entry.id().to_string()[..SHORT_ID_LEN].to_string()
}

pub fn entry_json(entry: &Entry) -> Value {
    json!({
        "id": entry.id().to_string(),
        "created_on": entry.created_on().format("%Y-%m-%d").to_string(),
        "text": entry.text(),
    })
}

pub fn entries_json<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Value {
    Value::Array(entries.into_iter().map(entry_json).collect())
}

/// Render entries as a table (pretty) or `id<TAB>date<TAB>text` lines (plain).
pub fn entry_list(ctx: &UiContext, entries: &[&Entry]) -> String {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| {
            if ctx.mode.is_pretty() {
                vec![
                    short_id(entry),
                    entry.created_on().to_string(),
                    truncate(entry.text(), TABLE_TEXT_MAX),
                ]
            } else {
                vec![
                    entry.id().to_string(),
                    entry.created_on().to_string(),
                    entry.text().replace('\n', " "),
                ]
            }
        })
        .collect();
    table(
        ctx,
        &[Column::text("ID"), Column::text("DATE"), Column::text("TEXT")],
        &rows,
    )
}

/// Render one entry in full.
pub fn entry_detail(entry: &Entry) -> String {
    format!(
        "{} - {}\n{}",
        entry.created_on(),
        entry.text(),
        entry.id()
    )
}

pub fn word_counts(ctx: &UiContext, counts: &[(String, usize)]) -> String {
    let rows: Vec<Vec<String>> = counts
        .iter()
        .map(|(word, count)| vec![word.clone(), count.to_string()])
        .collect();
    table(
        ctx,
        &[Column::text("WORD"), Column::numeric("OCCURRENCES")],
        &rows,
    )
}

pub fn word_counts_json(counts: &[(String, usize)]) -> Value {
    Value::Array(
        counts
            .iter()
            .map(|(word, count)| json!({ "word": word, "count": count }))
            .collect(),
    )
}

pub fn longest_words(ctx: &UiContext, words: &[String]) -> String {
    let rows: Vec<Vec<String>> = words
        .iter()
        .map(|word| vec![word.clone(), word.chars().count().to_string()])
        .collect();
    table(ctx, &[Column::text("WORD"), Column::numeric("LENGTH")], &rows)
}

pub fn longest_words_json(words: &[String]) -> Value {
    Value::Array(
        words
            .iter()
            .map(|word| json!({ "word": word, "length": word.chars().count() }))
            .collect(),
    )
}

pub fn letters(ctx: &UiContext, frequency: &LetterFrequency) -> String {
    let rows: Vec<Vec<String>> = frequency
        .letters
        .iter()
        .map(|(letter, count)| {
            vec![
                letter.to_string(),
                count.to_string(),
                format!("{:.2}", frequency.percentage(*count)),
            ]
        })
        .collect();
    table(
        ctx,
        &[
            Column::text("LETTER"),
            Column::numeric("OCCURRENCES"),
            Column::numeric("PERCENT"),
        ],
        &rows,
    )
}

pub fn letters_json(frequency: &LetterFrequency) -> Value {
    let letters: Vec<Value> = frequency
        .letters
        .iter()
        .map(|(letter, count)| {
            json!({
                "letter": letter.to_string(),
                "count": count,
                "percentage": frequency.percentage(*count),
            })
        })
        .collect();
    json!({ "letters": letters, "total": frequency.total })
}

pub fn word_combos(ctx: &UiContext, combos: &[(WordPair, usize)]) -> String {
    let rows: Vec<Vec<String>> = combos
        .iter()
        .map(|(pair, count)| vec![pair.to_string(), count.to_string()])
        .collect();
    table(
        ctx,
        &[Column::text("WORDS"), Column::numeric("OCCURRENCES")],
        &rows,
    )
}

pub fn word_combos_json(combos: &[(WordPair, usize)]) -> Value {
    Value::Array(
        combos
            .iter()
            .map(|(pair, count)| {
                json!({ "first": pair.first, "second": pair.second, "count": count })
            })
            .collect(),
    )
}
