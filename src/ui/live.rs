//! Live table for interactive terminals.
//!
//! The table is redrawn in place after every row. While a check runs a
//! spinner sits under the table on stderr; it is cleared before each
//! redraw so the line count stays right.
//!
//! Redrawing in place only works while the whole table is on screen. Rows
//! are truncated to the terminal width, and once the table grows taller
//! than the terminal it is wiped and printed once at `finish` instead.

use console::{measure_text_width, Term};
use std::io::Write;

use super::spinner::{check_message, CheckSpinner};
use super::{
    report_table, row_cells, summary_line, DoctorTheme, GlyphSet, OutputMode, ReportSurface, Table,
};
use crate::checks::CheckResult;
use crate::report::ReportSummary;

/// Surface that redraws the table as rows arrive.
pub struct LiveSurface {
    term: Term,
    mode: OutputMode,
    theme: DoctorTheme,
    glyphs: GlyphSet,
    table: Option<Table>,
    drawn_lines: usize,
    spinner: Option<CheckSpinner>,
    deferred: bool,
}

/// Lines kept free under the table for the spinner and the summary.
const RESERVED_LINES: usize = 2;

/// What a redraw should put on screen.
#[derive(Debug, PartialEq, Eq)]
enum Frame {
    /// The rendered table fits the viewport.
    Fits(String),
    /// The table cannot be redrawn in place.
    Overflows,
}

/// Fit `table` into a `(rows, cols)` viewport.
///
/// Without a known size the table is drawn as is.
fn fit_frame(table: &Table, viewport: Option<(usize, usize)>) -> Frame {
    let Some((rows, cols)) = viewport else {
        return Frame::Fits(table.render());
    };

    let max_width = usable_width(cols);
    let rendered = table.render_within(max_width);
    let too_wide = rendered.lines().any(|l| measure_text_width(l) > max_width);
    let too_tall = rendered.lines().count() + RESERVED_LINES > rows;

    if too_wide || too_tall {
        Frame::Overflows
    } else {
        Frame::Fits(rendered)
    }
}

/// A line filling the last column makes some terminals wrap early.
fn usable_width(cols: usize) -> usize {
    cols.saturating_sub(1)
}

impl LiveSurface {
    pub fn new(mode: OutputMode, theme: DoctorTheme, glyphs: GlyphSet) -> Self {
        Self {
            term: Term::stdout(),
            mode,
            theme,
            glyphs,
            table: None,
            drawn_lines: 0,
            spinner: None,
            deferred: false,
        }
    }

    /// Terminal size as `(rows, cols)`, when stdout is a terminal.
    fn viewport(&self) -> Option<(usize, usize)> {
        self.term
            .size_checked()
            .map(|(rows, cols)| (rows as usize, cols as usize))
    }

    fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.clear();
        }
    }

    fn redraw(&mut self) {
        if self.deferred {
            return;
        }
        let Some(table) = &self.table else {
            return;
        };
        let frame = fit_frame(table, self.viewport());

        if self.drawn_lines > 0 {
            self.term.clear_last_lines(self.drawn_lines).ok();
            self.drawn_lines = 0;
        }

        match frame {
            Frame::Fits(rendered) => {
                self.term.write_line(&rendered).ok();
                self.drawn_lines = rendered.lines().count();
            }
            Frame::Overflows => {
                tracing::debug!("Report outgrew the terminal; printing it when done");
                self.deferred = true;
            }
        }
    }

    /// Print the whole table once, fitted to the terminal width.
    fn print_deferred(&self) {
        let Some(table) = &self.table else {
            return;
        };
        let rendered = match self.viewport() {
            Some((_, cols)) => table.render_within(usable_width(cols)),
            None => table.render(),
        };
        self.term.write_line(&rendered).ok();
    }
}

impl ReportSurface for LiveSurface {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn begin(&mut self, title: &str, columns: &[&str]) {
        self.table = Some(report_table(title, columns, &self.theme));
        self.drawn_lines = 0;
        self.deferred = false;
        self.redraw();
    }

    fn check_started(&mut self, subject: &str, condition: &str) {
        self.stop_spinner();
        if self.mode.shows_spinners() {
            let message = self.theme.info.apply_to(check_message(subject, condition));
            self.spinner = Some(CheckSpinner::new(&message.to_string()));
        }
    }

    fn add_row(&mut self, row: &CheckResult) {
        self.stop_spinner();
        if let Some(table) = self.table.as_mut() {
            table.add_row(row_cells(row, &self.theme, &self.glyphs));
        }
        self.redraw();
    }

    fn finish(&mut self, summary: &ReportSummary) {
        self.stop_spinner();
        if self.deferred {
            self.print_deferred();
        }
        if self.mode.shows_summary() {
            writeln!(self.term, "{}", summary_line(summary, &self.theme)).ok();
        }
        self.term.flush().ok();
    }

    fn error(&mut self, msg: &str) {
        self.stop_spinner();
        Term::stderr()
            .write_line(&self.theme.format_error(msg))
            .ok();
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}
