//! Configuration paths and JSON readers.
//!
//! - Path resolution from environment variables in [`paths`]
//! - File schemas in [`schema`]
//! - Loading and project-name resolution in [`loader`]
//!
//! # Example
//!
//! ```
//! use devdoctor::config::{CloudSettings, ConfigPaths, Stage, DEFAULT_PROJECT_NAME};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let root = temp.path().join(".config");
//! let paths = ConfigPaths::from_roots(temp.path(), &root, &root.join("devdoctor"));
//!
//! // Nothing configured yet: hints use placeholders
//! let settings = CloudSettings::resolve(&paths, Stage::Dev);
//! assert_eq!(settings.project_name, DEFAULT_PROJECT_NAME);
//! ```

pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::{
    load_common, load_json, load_workspace_config, parse_json, CloudSettings, DEFAULT_ACCOUNT,
    DEFAULT_PROJECT_NAME,
};
pub use paths::{ConfigPaths, CONFIG_ROOT_ENV, DOCTOR_HOME_ENV};
pub use schema::{
    CommonGcpProject, CommonJson, ConfigAccount, ConfigGcpProjectDetail, ConfigGcpProjects,
    ConfigJson, ConfigSlack, ConfigWorkspace, Stage, Staged,
};
