//! Configuration file loading.
//!
//! The doctor never fails because of configuration: a missing or broken
//! file only means remediation hints fall back to placeholder values.

use crate::config::paths::ConfigPaths;
use crate::config::schema::{CommonJson, ConfigJson, Stage};
use crate::error::{DoctorError, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Project name shown in hints when no configuration names one.
pub const DEFAULT_PROJECT_NAME: &str = "your-dev-project";

/// Account placeholder shown in hints when `common.json` has no email.
pub const DEFAULT_ACCOUNT: &str = "<your-name@example.com>";

/// Values from configuration that parametrize checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudSettings {
    /// Cloud project used in remediation commands.
    pub project_name: String,
    /// Account used in remediation commands.
    pub account: String,
}

impl Default for CloudSettings {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            account: DEFAULT_ACCOUNT.to_string(),
        }
    }
}

impl CloudSettings {
    /// Resolve settings for a stage from the configured files.
    ///
    /// `common.json` wins when it exists; otherwise the first project of
    /// the stage in `config.json` is used. Unreadable files are logged and
    /// treated as absent.
    pub fn resolve(paths: &ConfigPaths, stage: Stage) -> Self {
        let mut settings = Self::default();

        match load_common(&paths.common_json) {
            Ok(common) => {
                settings.project_name = common.gcp.get(stage).project.clone();
                if !common.email.is_empty() {
                    settings.account = common.email;
                }
                return settings;
            }
            Err(DoctorError::ConfigNotFound { .. }) => {}
            Err(e) => tracing::warn!("Ignoring common config: {}", e),
        }

        match load_workspace_config(&paths.config_json) {
            Ok(config) => {
                let first = config
                    .gcp
                    .as_ref()
                    .and_then(|gcp| gcp.get(stage).projects.first());
                match first {
                    Some(project) => settings.project_name = project.project_name.clone(),
                    None => tracing::debug!(
                        "No {} project in {}",
                        stage,
                        paths.config_json.display()
                    ),
                }
            }
            Err(DoctorError::ConfigNotFound { path }) => {
                tracing::debug!("No configuration at {}", path.display());
            }
            Err(e) => tracing::warn!("Ignoring workspace config: {}", e),
        }

        settings
    }
}

/// Load `common.json`.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the JSON is invalid.
pub fn load_common(path: &Path) -> Result<CommonJson> {
    load_json(path)
}

/// Load `config.json`.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the JSON is invalid.
pub fn load_workspace_config(path: &Path) -> Result<ConfigJson> {
    load_json(path)
}

/// Read a file and parse it as JSON.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(DoctorError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    parse_json(&content, path)
}

/// Parse JSON content, attributing errors to `path`.
pub fn parse_json<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T> {
    serde_json::from_str(content).map_err(|e| DoctorError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
