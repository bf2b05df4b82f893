//! The doctor report.
//!
//! [`ReportRunner`] walks the [`CheckRegistry`](crate::checks::CheckRegistry)
//! in order, executes each applicable check and streams the rows into a
//! [`ReportSurface`](crate::ui::ReportSurface).

pub mod runner;
pub mod summary;

pub use runner::{Pacing, ReportRunner, REPORT_COLUMNS, REPORT_TITLE};
pub use summary::ReportSummary;
