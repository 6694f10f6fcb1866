//! Table rendering for CLI outputs.
//!
//! Works on any [`Tabular`] source, so list and aggregate reports share the
//! same renderer regardless of their column count.

use crate::models::report::Tabular;
use ansi_term::{Colour, Style};
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub colored: bool,
}

impl Table {
    pub fn from_tabular<T: Tabular>(source: &T) -> Self {
        let rows = source.records();
        let columns = source
            .headers()
            .into_iter()
            .enumerate()
            .map(|(i, h)| {
                let widest_cell = rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(c.as_str()))
                    .max()
                    .unwrap_or(0);
                Column {
                    header: h.to_string(),
                    width: widest_cell.max(UnicodeWidthStr::width(h)),
                }
            })
            .collect();

        Self {
            columns,
            rows,
            colored: true,
        }
    }

    pub fn plain(mut self) -> Self {
        self.colored = false;
        self
    }

    pub fn render(&self) -> String {
        let header_style = Style::new().fg(Colour::Green).underline();
        let first_col_style = Style::new().fg(Colour::Yellow);
        let mut out = String::new();

        // Header
        for col in &self.columns {
            let cell = pad_right(&col.header, col.width);
            if self.colored {
                out.push_str(&header_style.paint(cell).to_string());
            } else {
                out.push_str(&cell);
            }
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let value = row.get(i).map(String::as_str).unwrap_or("");
                let cell = pad_right(value, col.width);
                if self.colored && i == 0 {
                    out.push_str(&first_col_style.paint(cell).to_string());
                } else {
                    out.push_str(&cell);
                }
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

/// Pad by display width, so non-ASCII project names keep columns aligned.
fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{s}{}", " ".repeat(pad))
}
