//! Mock surface for testing.
//!
//! `MockSurface` implements the `ReportSurface` trait and captures every
//! call for later assertion.

use super::{OutputMode, ReportSurface};
use crate::checks::CheckResult;
use crate::report::ReportSummary;

/// Mock surface for testing.
#[derive(Debug, Default)]
pub struct MockSurface {
    mode: OutputMode,
    interactive: bool,
    title: Option<String>,
    columns: Vec<String>,
    started: Vec<(String, String)>,
    rows: Vec<CheckResult>,
    summaries: Vec<ReportSummary>,
    errors: Vec<String>,
}

impl MockSurface {
    /// Create a new MockSurface with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockSurface with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Title passed to `begin`.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Columns passed to `begin`.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// (subject, condition) of every started check.
    pub fn started(&self) -> &[(String, String)] {
        &self.started
    }

    /// Rows in the order they were added.
    pub fn rows(&self) -> &[CheckResult] {
        &self.rows
    }

    /// First row matching subject and condition.
    pub fn row(&self, subject: &str, condition: &str) -> Option<&CheckResult> {
        self.rows
            .iter()
            .find(|r| r.subject == subject && r.condition == condition)
    }

    /// Check if a row for subject and condition was added.
    pub fn has_row(&self, subject: &str, condition: &str) -> bool {
        self.row(subject, condition).is_some()
    }

    /// Summaries passed to `finish`.
    pub fn summaries(&self) -> &[ReportSummary] {
        &self.summaries
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl ReportSurface for MockSurface {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn begin(&mut self, title: &str, columns: &[&str]) {
        self.title = Some(title.to_string());
        self.columns = columns.iter().map(|c| c.to_string()).collect();
    }

    fn check_started(&mut self, subject: &str, condition: &str) {
        self.started
            .push((subject.to_string(), condition.to_string()));
    }

    fn add_row(&mut self, row: &CheckResult) {
        self.rows.push(row.clone());
    }

    fn finish(&mut self, summary: &ReportSummary) {
        self.summaries.push(*summary);
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
