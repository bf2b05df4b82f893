//! Static report for pipes, CI logs and `--non-interactive`.
//!
//! Rows are collected and the table is printed once when the run ends.
//! Progress lines in verbose mode go to stderr so stdout holds only the
//! table.

use std::io::{self, Stdout, Write};

use super::{
    report_table, row_cells, summary_line, DoctorTheme, GlyphSet, OutputMode, ReportSurface, Table,
};
use crate::checks::CheckResult;
use crate::report::ReportSummary;

/// Surface that prints the finished table.
pub struct PlainSurface<W: Write> {
    out: W,
    mode: OutputMode,
    theme: DoctorTheme,
    glyphs: GlyphSet,
    table: Option<Table>,
}

impl PlainSurface<Stdout> {
    /// Surface printing to stdout.
    pub fn stdout(mode: OutputMode, theme: DoctorTheme, glyphs: GlyphSet) -> Self {
        Self::with_writer(io::stdout(), mode, theme, glyphs)
    }
}

impl<W: Write> PlainSurface<W> {
    /// Surface printing to any writer.
    pub fn with_writer(out: W, mode: OutputMode, theme: DoctorTheme, glyphs: GlyphSet) -> Self {
        Self {
            out,
            mode,
            theme,
            glyphs,
            table: None,
        }
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSurface for PlainSurface<W> {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn begin(&mut self, title: &str, columns: &[&str]) {
        self.table = Some(report_table(title, columns, &self.theme));
    }

    fn check_started(&mut self, subject: &str, condition: &str) {
        if self.mode.shows_progress() {
            eprintln!("STATUS: checking {} {}", subject, condition);
        }
    }

    fn add_row(&mut self, row: &CheckResult) {
        if let Some(table) = self.table.as_mut() {
            table.add_row(row_cells(row, &self.theme, &self.glyphs));
        }
    }

    fn finish(&mut self, summary: &ReportSummary) {
        if let Some(table) = self.table.take() {
            writeln!(self.out, "{}", table.render()).ok();
        }
        if self.mode.shows_summary() {
            writeln!(self.out, "{}", summary_line(summary, &self.theme)).ok();
        }
        self.out.flush().ok();
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::Outcome;

    fn surface(mode: OutputMode) -> PlainSurface<Vec<u8>> {
        PlainSurface::with_writer(Vec::new(), mode, DoctorTheme::plain(), GlyphSet::bracketed())
    }

    fn render(mut surface: PlainSurface<Vec<u8>>, rows: &[CheckResult]) -> String {
        surface.begin("Doctor result", &["Target", "Condition", "Result", "Details"]);
        let mut summary = ReportSummary::default();
        for row in rows {
            surface.check_started(&row.subject, &row.condition);
            surface.add_row(row);
            summary.record(row);
        }
        surface.finish(&summary);
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn prints_table_and_summary() {
        let output = render(
            surface(OutputMode::Normal),
            &[
                CheckResult::new("make", "is installed", Outcome::pass("/usr/bin/make")),
                CheckResult::new("jq", "is installed", Outcome::fail("")),
            ],
        );

        assert!(output.contains("Doctor result"));
        assert!(output.contains("/usr/bin/make"));
        assert!(output.contains("[ok]"));
        assert!(output.contains("[FAIL]"));
        assert!(output.trim_end().ends_with("1 passed, 1 failed"));
    }

    #[test]
    fn quiet_omits_summary() {
        let output = render(
            surface(OutputMode::Quiet),
            &[CheckResult::new("jq", "is installed", Outcome::fail(""))],
        );

        assert!(output.contains("[FAIL]"));
        assert!(!output.contains("passed"));
    }

    #[test]
    fn multi_line_detail_spans_lines() {
        let output = render(
            surface(OutputMode::Normal),
            &[CheckResult::new(
                "Google Cloud",
                "default credentials set",
                Outcome::fail("first\ngcloud auth application-default login"),
            )],
        );

        let first = output.lines().position(|l| l.contains("first")).unwrap();
        assert!(output.lines().nth(first + 1).unwrap().contains("application-default"));
    }

    #[test]
    fn not_interactive() {
        assert!(!surface(OutputMode::Normal).is_interactive());
    }
}
