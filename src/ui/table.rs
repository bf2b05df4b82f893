//! Table rendering for the report.
//!
//! Cells may hold ANSI styling and several lines. Widths are measured on
//! visible text, and a multi-line cell makes its whole row taller. A table
//! can be rendered within a width limit by truncating its last column.

use console::{measure_text_width, truncate_str, Style};

/// The last column never shrinks below this when fitting a width.
pub const MIN_LAST_COLUMN: usize = 12;

/// A titled table with box-drawing borders.
#[derive(Debug, Clone)]
pub struct Table {
    title: Option<String>,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
    border: Style,
    header: Style,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| cell_width(h)).collect();

        Self {
            title: None,
            headers,
            rows: Vec::new(),
            column_widths,
            border: Style::new(),
            header: Style::new(),
        }
    }

    /// Title centered above the table.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Styles for borders and the header row.
    pub fn with_styles(mut self, border: Style, header: Style) -> Self {
        self.border = border;
        self.header = header;
        self
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, cell) in row.iter().enumerate() {
            if i < self.column_widths.len() {
                self.column_widths[i] = self.column_widths[i].max(cell_width(cell));
            }
        }

        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total visible width including borders.
    pub fn width(&self) -> usize {
        total_width(&self.column_widths)
    }

    /// Column widths for a table at most `max_width` wide.
    ///
    /// Only the last column shrinks, and never below `MIN_LAST_COLUMN`, so
    /// the result can still be wider than asked on a very narrow terminal.
    pub fn fitted_widths(&self, max_width: usize) -> Vec<usize> {
        let mut widths = self.column_widths.clone();
        let excess = self.width().saturating_sub(max_width);

        if let Some(last) = widths.last_mut() {
            let floor = (*last).min(MIN_LAST_COLUMN);
            *last = last.saturating_sub(excess).max(floor);
        }
        widths
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        self.render_with(&self.column_widths)
    }

    /// Render the table no wider than `max_width`, truncating the last
    /// column with an ellipsis.
    pub fn render_within(&self, max_width: usize) -> String {
        self.render_with(&self.fitted_widths(max_width))
    }

    fn render_with(&self, widths: &[usize]) -> String {
        let mut lines = Vec::new();

        if let Some(title) = &self.title {
            let pad = total_width(widths).saturating_sub(cell_width(title)) / 2;
            lines.push(format!("{}{}", " ".repeat(pad), title));
        }

        lines.push(self.render_border(widths, '┌', '┬', '┐'));
        let headers: Vec<String> = self
            .headers
            .iter()
            .map(|h| self.header.apply_to(h).to_string())
            .collect();
        lines.extend(self.render_row(widths, &headers));
        lines.push(self.render_border(widths, '├', '┼', '┤'));

        for row in &self.rows {
            lines.extend(self.render_row(widths, row));
        }

        lines.push(self.render_border(widths, '└', '┴', '┘'));
        lines.join("\n")
    }

    fn render_border(&self, widths: &[usize], left: char, mid: char, right: char) -> String {
        let mut s = String::new();
        s.push(left);

        for (i, width) in widths.iter().enumerate() {
            s.push_str(&"─".repeat(width + 2));
            if i < widths.len() - 1 {
                s.push(mid);
            }
        }

        s.push(right);
        self.border.apply_to(s).to_string()
    }

    fn render_row(&self, widths: &[usize], row: &[String]) -> Vec<String> {
        let cells: Vec<Vec<&str>> = (0..widths.len())
            .map(|i| {
                let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
                cell.lines().collect()
            })
            .collect();
        let height = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);
        let bar = self.border.apply_to("│").to_string();

        (0..height)
            .map(|line| {
                let mut s = bar.clone();
                for (i, width) in widths.iter().enumerate() {
                    let text = cells[i].get(line).copied().unwrap_or("");
                    let text = truncate_str(text, *width, "…");
                    let fill = width.saturating_sub(measure_text_width(&text));
                    s.push_str(&format!(" {}{} {}", text, " ".repeat(fill), bar));
                }
                s
            })
            .collect()
    }
}

fn total_width(widths: &[usize]) -> usize {
    widths.iter().map(|w| w + 3).sum::<usize>() + 1
}

/// Widest visible line of a cell.
fn cell_width(cell: &str) -> usize {
    cell.lines().map(measure_text_width).max().unwrap_or(0)
}
