//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table as ComfyTable};
use owo_colors::{OwoColorize, Style};

use super::context::UiContext;

/// Apply `style` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Render a hint line ("Hint: text", dimmed in pretty mode).
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", Style::new().dimmed(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Column definition for table rendering.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub numeric: bool,
}

impl Column {
    pub const fn text(header: &'static str) -> Self {
        Self {
            header,
            numeric: false,
        }
    }

    pub const fn numeric(header: &'static str) -> Self {
        Self {
            header,
            numeric: true,
        }
    }
}

/// Render rows as a bordered table in pretty mode, tab separated otherwise.
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = ComfyTable::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = columns
        .iter()
        .map(|c| {
            let cell = Cell::new(c.header);
            if ctx.color {
                cell.add_attribute(Attribute::Bold)
            } else {
                cell
            }
        })
        .collect();
    table.set_header(header_cells);

    for row in rows {
        table.add_row(row);
    }

    for (i, col) in columns.iter().enumerate() {
        if col.numeric {
            if let Some(column) = table.column_mut(i) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
    }

    table.to_string()
}

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;

    fn plain() -> UiContext {
        UiContext {
            color: false,
            mode: OutputMode::Plain,
            quiet: false,
        }
    }

    #[test]
    fn test_plain_table_is_tab_separated_without_header() {
        let rows = vec![
            vec!["the".to_string(), "3".to_string()],
            vec!["cat".to_string(), "2".to_string()],
        ];
        let out = table(&plain(), &[Column::text("word"), Column::numeric("count")], &rows);
        assert_eq!(out, "the\t3\ncat\t2");
    }

    #[test]
    fn test_pretty_table_has_headers() {
        let ctx = UiContext {
            color: false,
            mode: OutputMode::Pretty,
            quiet: false,
        };
        let rows = vec![vec!["the".to_string(), "3".to_string()]];
        let out = table(&ctx, &[Column::text("word"), Column::numeric("count")], &rows);
        assert!(out.contains("word"));
        assert!(out.contains("count"));
        assert!(out.contains("the"));
    }

    #[test]
    fn test_styled_without_color_is_identity() {
        assert_eq!(styled("x", Style::new().bold(), false), "x");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer sentence", 8), "a lon...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_hint_plain() {
        assert_eq!(hint(&plain(), "try this"), "hint=try this");
    }
}
