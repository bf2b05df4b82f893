//! JSON configuration schemas.
//!
//! Two files describe a developer's cloud setup:
//!
//! - `common.json`, shared across workspaces
//! - `config.json`, the older per-workspace layout, consulted only when
//!   `common.json` is absent
//!
//! Field names on disk are camelCase.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Deployment stage a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Dev,
    Stg,
    Prod,
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            _ => Err(format!("unknown stage: {}", s)),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dev => write!(f, "dev"),
            Self::Stg => write!(f, "stg"),
            Self::Prod => write!(f, "prod"),
        }
    }
}

/// Per-stage values, shared by both file layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staged<T> {
    pub dev: T,
    pub stg: T,
    pub prod: T,
}

impl<T> Staged<T> {
    /// Value for one stage.
    pub fn get(&self, stage: Stage) -> &T {
        match stage {
            Stage::Dev => &self.dev,
            Stage::Stg => &self.stg,
            Stage::Prod => &self.prod,
        }
    }
}

/// `common.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonJson {
    /// Account used with the cloud SDK.
    pub email: String,
    pub workspace_path: PathBuf,
    pub gcp: Staged<CommonGcpProject>,
}

/// A stage's projects in `common.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonGcpProject {
    pub project: String,
    pub restricted_project: String,
}

/// `config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigJson {
    #[serde(default)]
    pub account: Option<ConfigAccount>,
    #[serde(default)]
    pub workspaces: Vec<ConfigWorkspace>,
    #[serde(default)]
    pub slack: Option<ConfigSlack>,
    #[serde(default)]
    pub gcp: Option<Staged<ConfigGcpProjects>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigAccount {
    pub mail_address: String,
    pub company: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigWorkspace {
    pub name: String,
    pub activate: bool,
    pub current_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSlack {
    /// Spelling matches the key written by existing tooling.
    pub mension_name: String,
}

/// A stage's project list in `config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigGcpProjects {
    #[serde(default)]
    pub projects: Vec<ConfigGcpProjectDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigGcpProjectDetail {
    pub project_name: String,
    pub restricted_project_name: String,
    pub region: String,
    pub activate: bool,
}
