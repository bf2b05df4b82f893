//! Workstation checks.
//!
//! This module provides:
//! - The [`Check`] variants and their `execute` contract
//! - The built-in [`CheckRegistry`] of monitored tools
//! - The [`Host`] seam through which checks observe the machine
//! - Version extraction and comparison
//!
//! # Example
//!
//! ```
//! use devdoctor::checks::{Check, CheckContext, MockHost, Platform, Verdict};
//! use devdoctor::config::{CloudSettings, ConfigPaths};
//! use std::path::Path;
//!
//! let host = MockHost::new().with_executable("make", "/usr/bin/make");
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
//! let row = Check::existence("make").execute(&ctx);
//! assert_eq!(row.verdict, Verdict::Pass);
//! assert_eq!(row.detail, "/usr/bin/make");
//! ```

pub mod check;
pub mod host;
pub mod platform;
pub mod probes;
pub mod registry;
pub mod result;
pub mod version;

pub use check::{Check, CheckContext};
pub use host::{Host, MockHost, SystemHost};
pub use platform::{applies_on, Platform};
pub use probes::CustomProbe;
pub use registry::{CheckRegistry, ToolCheckSpec};
pub use result::{CheckResult, Outcome, Verdict};
pub use version::{ToolVersion, VersionedTool};
