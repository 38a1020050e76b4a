//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator: char,
}

impl Table {
    /// New table whose column widths start at the header widths.
    pub fn new(headers: &[&str], separator: char) -> Self {
        let columns = headers
            .iter()
            .map(|h| Column {
                header: h.to_string(),
                width: UnicodeWidthStr::width(*h),
            })
            .collect();

        Self {
            columns,
            rows: Vec::new(),
            separator,
        }
    }

    /// Append a row, widening columns as needed. Missing cells render empty.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(row.iter()) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        self.render_styled(|_, cell| cell.to_string())
    }

    /// Like `render`, with `style(column, cell)` applied to each body cell.
    /// Padding is computed on the unstyled text.
    pub fn render_styled<F>(&self, style: F) -> String
    where
        F: Fn(usize, &str) -> String,
    {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            push_cell(&mut out, &col.header, col.header.clone(), col.width);
        }
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&self.separator.to_string().repeat(total.saturating_sub(1)));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                push_cell(&mut out, cell, style(i, cell), col.width);
            }
            out.push('\n');
        }

        out
    }
}

// `{:<width$}` pads by char count; pad by display width instead.
fn push_cell(out: &mut String, s: &str, shown: String, width: usize) {
    out.push_str(&shown);
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    out.push_str(&" ".repeat(pad + 1));
}
