//! devdoctor - Workstation checks for development prerequisites.
//!
//! devdoctor inspects the local machine for the tools a development setup
//! needs, checks their versions and a few account settings, and reports
//! the results in a table that fills in as each check completes.
//!
//! # Modules
//!
//! - [`checks`] - Check variants, the tool registry and the host seam
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration paths and JSON readers
//! - [`error`] - Error types and result aliases
//! - [`report`] - Runs the registry and tallies the outcome
//! - [`shell`] - Shell command execution and PATH lookup
//! - [`ui`] - Live and static tables, spinner and theme
//!
//! # Example
//!
//! ```
//! use devdoctor::checks::{CheckContext, CheckRegistry, MockHost, Platform};
//! use devdoctor::config::{CloudSettings, ConfigPaths};
//! use devdoctor::report::{Pacing, ReportRunner};
//! use devdoctor::ui::MockSurface;
//! use std::path::Path;
//!
//! let host = MockHost::new().with_executable("jq", "/usr/bin/jq");
//! let paths = ConfigPaths::from_roots(
//!     Path::new("/home/dev"),
//!     Path::new("/home/dev/.config"),
//!     Path::new("/home/dev/.config/devdoctor"),
//! );
//! let cloud = CloudSettings::default();
//! let ctx = CheckContext {
//!     host: &host,
//!     platform: Some(Platform::Linux),
//!     paths: &paths,
//!     cloud: &cloud,
//! };
//!
//! let runner = ReportRunner::new(CheckRegistry::new(Some(Platform::Linux)))
//!     .with_pacing(Pacing::none());
//! let mut surface = MockSurface::new();
//! let summary = runner.run(&ctx, &mut surface);
//!
//! assert!(surface.row("jq", "is installed").unwrap().is_pass());
//! assert!(summary.failed > 0);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod shell;
pub mod ui;

pub use error::{DoctorError, Result};
