//! Report rendering.
//!
//! This module provides:
//! - [`ReportSurface`] trait, the target rows are streamed into
//! - [`LiveSurface`] for interactive terminals, redrawn after every row
//! - [`PlainSurface`] for pipes and CI, printed once at the end
//! - [`MockSurface`] for tests
//! - Theme, glyphs and table rendering
//!
//! # Example
//!
//! ```
//! use devdoctor::checks::{CheckResult, Outcome};
//! use devdoctor::report::ReportSummary;
//! use devdoctor::ui::{MockSurface, ReportSurface};
//!
//! let mut surface = MockSurface::new();
//! surface.begin("Doctor result", &["Target", "Condition", "Result", "Details"]);
//! surface.add_row(&CheckResult::new("jq", "is installed", Outcome::fail("")));
//! surface.finish(&ReportSummary { passed: 0, failed: 1 });
//!
//! assert!(surface.has_row("jq", "is installed"));
//! ```

pub mod icons;
pub mod live;
pub mod mock;
pub mod output;
pub mod plain;
pub mod spinner;
pub mod table;
pub mod theme;

pub use icons::GlyphSet;
pub use live::LiveSurface;
pub use mock::MockSurface;
pub use output::OutputMode;
pub use plain::PlainSurface;
pub use spinner::CheckSpinner;
pub use table::Table;
pub use theme::{should_use_colors, DoctorTheme};

use console::Term;

use crate::checks::CheckResult;
use crate::report::ReportSummary;

/// Where report rows go.
///
/// The runner calls `begin` once, then `check_started` and `add_row` for
/// every check, then `finish` once.
pub trait ReportSurface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Start an empty table.
    fn begin(&mut self, title: &str, columns: &[&str]);

    /// A check is about to run.
    fn check_started(&mut self, subject: &str, condition: &str);

    /// Append a finished row.
    fn add_row(&mut self, row: &CheckResult);

    /// All rows are in.
    fn finish(&mut self, summary: &ReportSummary);

    /// Display an error that ended the run.
    fn error(&mut self, msg: &str);

    /// Check if rows are drawn live.
    fn is_interactive(&self) -> bool;
}

/// Create the surface for this invocation.
///
/// The live table needs a terminal on stdout; anything else gets the
/// static table.
pub fn create_surface(interactive: bool, mode: OutputMode, colors: bool) -> Box<dyn ReportSurface> {
    let theme = DoctorTheme::for_colors(colors);
    let glyphs = GlyphSet::detect();

    if interactive && Term::stdout().is_term() {
        Box::new(LiveSurface::new(mode, theme, glyphs))
    } else {
        Box::new(PlainSurface::stdout(mode, theme, glyphs))
    }
}

/// Styled display cells for a row.
pub fn row_cells(row: &CheckResult, theme: &DoctorTheme, glyphs: &GlyphSet) -> Vec<String> {
    vec![
        row.subject.clone(),
        row.condition.clone(),
        glyphs.styled(row.verdict, theme),
        theme.paint_lines(theme.verdict(row.verdict), &row.detail),
    ]
}

/// Empty table styled with the theme.
pub fn report_table(title: &str, columns: &[&str], theme: &DoctorTheme) -> Table {
    Table::new(columns.to_vec())
        .with_title(title)
        .with_styles(theme.border.clone(), theme.primary.clone())
}

/// Line printed under the table.
pub fn summary_line(summary: &ReportSummary, theme: &DoctorTheme) -> String {
    let style = if summary.all_passed() {
        &theme.success
    } else {
        &theme.warning
    };
    style.apply_to(summary.describe()).to_string()
}
