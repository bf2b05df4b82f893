//! Check outcomes and report rows.

use std::fmt;

/// Pass/fail outcome of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// Verdict from a boolean condition.
    pub fn from_bool(passed: bool) -> Self {
        if passed {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }

    pub fn is_pass(self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "pass"),
            Verdict::Fail => write!(f, "fail"),
        }
    }
}

/// What a check decided, before it is labeled with subject and condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub verdict: Verdict,
    pub detail: String,
}

impl Outcome {
    pub fn pass(detail: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::Pass,
            detail: detail.into(),
        }
    }

    pub fn fail(detail: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::Fail,
            detail: detail.into(),
        }
    }
}

/// One row of the doctor report.
///
/// Built once by a check and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Tool or system the check is about (e.g. "docker", "Google Cloud").
    pub subject: String,
    /// Human label of what was tested (e.g. "is installed").
    pub condition: String,
    /// Pass or fail.
    pub verdict: Verdict,
    /// Explanation; a remediation hint on failure, often empty on success.
    pub detail: String,
}

impl CheckResult {
    /// Label an outcome.
    pub fn new(subject: &str, condition: &str, outcome: Outcome) -> Self {
        Self {
            subject: subject.to_string(),
            condition: condition.to_string(),
            verdict: outcome.verdict,
            detail: outcome.detail,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.verdict.is_pass()
    }

    /// Display strings in column order: target, condition, result, details.
    pub fn cells(&self) -> [String; 4] {
        [
            self.subject.clone(),
            self.condition.clone(),
            self.verdict.to_string(),
            self.detail.clone(),
        ]
    }
}
