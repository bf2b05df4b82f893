//! Locations of the files the doctor reads.
//!
//! Nothing here touches the filesystem beyond resolving the current
//! directory for relative overrides; whether the files exist is for the
//! loader and the checks to find out.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{DoctorError, Result};

/// XDG-style variable holding the configuration root.
pub const CONFIG_ROOT_ENV: &str = "XDG_CONFIG_HOME";

/// Variable that overrides the devdoctor config directory.
pub const DOCTOR_HOME_ENV: &str = "DEVDOCTOR_CONFIG_HOME";

/// Directory name under the config root.
const DOCTOR_DIR: &str = "devdoctor";

/// Resolved paths for configuration and credential files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// `$XDG_CONFIG_HOME`, or `~/.config`.
    pub config_root: PathBuf,

    /// Directory holding `common.json` and `config.json`.
    pub doctor_home: PathBuf,

    /// Shared settings: `<doctor_home>/common.json`.
    pub common_json: PathBuf,

    /// Per-workspace settings, used when `common.json` is absent.
    pub config_json: PathBuf,

    /// Container runtime client config: `~/.docker/config.json`.
    pub docker_config_json: PathBuf,

    /// Cloud SDK application default credentials.
    pub gcloud_adc_json: PathBuf,
}

impl ConfigPaths {
    /// Discover paths from the process environment.
    ///
    /// `doctor_home` takes precedence over everything (it comes from
    /// `--config-dir` or `DEVDOCTOR_CONFIG_HOME`).
    pub fn discover(doctor_home: Option<&Path>) -> Result<Self> {
        let home = dirs::home_dir().ok_or(DoctorError::NoHomeDir)?;
        Ok(Self::discover_with_env(&home, doctor_home, |key| {
            std::env::var_os(key)
        }))
    }

    /// Discover paths with a custom env var lookup function.
    pub fn discover_with_env<F>(home: &Path, doctor_home: Option<&Path>, env_fn: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let config_root = env_fn(CONFIG_ROOT_ENV)
            .filter(|v| !v.is_empty())
            .map(|v| expand_path(Path::new(&v), home))
            .unwrap_or_else(|| home.join(".config"));

        let doctor_home = doctor_home
            .map(|p| expand_path(p, home))
            .unwrap_or_else(|| config_root.join(DOCTOR_DIR));

        Self::from_roots(home, &config_root, &doctor_home)
    }

    /// Build paths from explicit roots.
    pub fn from_roots(home: &Path, config_root: &Path, doctor_home: &Path) -> Self {
        Self {
            config_root: config_root.to_path_buf(),
            doctor_home: doctor_home.to_path_buf(),
            common_json: doctor_home.join("common.json"),
            config_json: doctor_home.join("config.json"),
            docker_config_json: home.join(".docker").join("config.json"),
            gcloud_adc_json: config_root
                .join("gcloud")
                .join("application_default_credentials.json"),
        }
    }
}

/// Expand a leading `~` and anchor relative paths at the current directory.
fn expand_path(path: &Path, home: &Path) -> PathBuf {
    let expanded = match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    };

    if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(&expanded))
            .unwrap_or(expanded)
    }
}
