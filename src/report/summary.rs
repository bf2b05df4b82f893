//! Pass/fail counts for one run.

use crate::checks::CheckResult;

/// Tally of the rows a run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub passed: usize,
    pub failed: usize,
}

impl ReportSummary {
    /// Count one row.
    pub fn record(&mut self, row: &CheckResult) {
        if row.is_pass() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Summary line, e.g. `12 passed, 3 failed`.
    pub fn describe(&self) -> String {
        format!("{} passed, {} failed", self.passed, self.failed)
    }
}
