//! Runs the registry and streams rows into a surface.

use std::thread;
use std::time::Duration;

use super::summary::ReportSummary;
use crate::checks::{Check, CheckContext, CheckRegistry, CheckResult};
use crate::ui::ReportSurface;

/// Title above the report table.
pub const REPORT_TITLE: &str = "Doctor result";

/// Report columns, in display order.
pub const REPORT_COLUMNS: [&str; 4] = ["Target", "Condition", "Result", "Details"];

/// Delay after each row so the live table visibly fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub beat: Duration,
    pub beats: u32,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            beat: Duration::from_millis(40),
            beats: 1,
        }
    }
}

impl Pacing {
    /// No delay; used by tests and non-interactive output.
    pub fn none() -> Self {
        Self {
            beat: Duration::ZERO,
            beats: 0,
        }
    }

    pub fn total(&self) -> Duration {
        self.beat * self.beats
    }

    fn pause(&self) {
        let total = self.total();
        if !total.is_zero() {
            thread::sleep(total);
        }
    }
}

/// Executes every applicable check in registry order.
#[derive(Debug, Clone)]
pub struct ReportRunner {
    registry: CheckRegistry,
    pacing: Pacing,
}

impl ReportRunner {
    pub fn new(registry: CheckRegistry) -> Self {
        Self {
            registry,
            pacing: Pacing::default(),
        }
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    /// Run the report.
    ///
    /// Every check yields exactly one row; a failing or erroring check
    /// never stops the ones after it.
    pub fn run(&self, ctx: &CheckContext<'_>, surface: &mut dyn ReportSurface) -> ReportSummary {
        let mut summary = ReportSummary::default();
        surface.begin(REPORT_TITLE, &REPORT_COLUMNS);

        for spec in self.registry.iter() {
            if spec.applies_on_platform {
                let row = self.run_one(&spec.existence_check(), ctx, surface);
                summary.record(&row);
            } else {
                tracing::debug!("Skipping {}: not required on this platform", spec.tool_name);
            }

            for check in &spec.supplementary_checks {
                let row = self.run_one(check, ctx, surface);
                summary.record(&row);
            }
        }

        tracing::debug!("Report finished: {}", summary.describe());
        surface.finish(&summary);
        summary
    }

    fn run_one(
        &self,
        check: &Check,
        ctx: &CheckContext<'_>,
        surface: &mut dyn ReportSurface,
    ) -> CheckResult {
        surface.check_started(check.subject(), check.condition());
        let row = check.execute(ctx);
        surface.add_row(&row);
        self.pacing.pause();
        row
    }
}
