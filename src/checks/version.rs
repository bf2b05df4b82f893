//! Tool version extraction and comparison.
//!
//! Versions are compared component by component as integers, so
//! `2.10.0 > 2.9.0` and `20.10.7 >= 9.9.9`. Missing trailing components
//! count as zero (`2.0 == 2.0.0`).

use anyhow::{Context, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use super::host::Host;
use crate::error::DoctorError;

static RE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)*)").unwrap());

/// A dotted numeric version such as `20.10.7`.
#[derive(Debug, Clone)]
pub struct ToolVersion {
    raw: String,
    parts: Vec<u64>,
}

impl ToolVersion {
    /// Extract the first dotted numeric version found in `text`.
    ///
    /// Leading prefixes like `v` and trailing suffixes like `-desktop.1`
    /// are ignored.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = RE_VERSION.captures(text)?;
        let raw = caps.get(1)?.as_str();
        let parts = raw
            .split('.')
            .map(|p| p.parse::<u64>().ok())
            .collect::<Option<Vec<_>>>()?;

        Some(Self {
            raw: raw.to_string(),
            parts,
        })
    }

    /// The version as it appeared in the tool output.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Numeric components.
    pub fn parts(&self) -> &[u64] {
        &self.parts
    }
}

impl Ord for ToolVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.parts.len().max(other.parts.len());
        for i in 0..len {
            let a = self.parts.get(i).copied().unwrap_or(0);
            let b = other.parts.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for ToolVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ToolVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ToolVersion {}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Tools whose version the doctor knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionedTool {
    Gh,
    Docker,
    DockerCompose,
    Mutagen,
    Gcloud,
}

impl VersionedTool {
    /// Name shown in the report.
    pub fn name(self) -> &'static str {
        match self {
            Self::Gh => "gh",
            Self::Docker => "docker",
            Self::DockerCompose => "docker compose",
            Self::Mutagen => "mutagen",
            Self::Gcloud => "gcloud",
        }
    }

    /// Shell pipeline printing the bare version.
    pub fn version_command(self) -> &'static str {
        match self {
            Self::Gh => "gh version | grep version | awk '{ print $3; }'",
            Self::Docker => "docker --version | awk '{ print $3; }' | tr -d ','",
            Self::DockerCompose => {
                "docker compose version | awk '{ print $4; }' | sed -e 's/-.*$//g' -e 's/v//g'"
            }
            Self::Mutagen => "mutagen --version | awk '{ print $3; }'",
            Self::Gcloud => "gcloud --version | grep SDK | awk '{ print $4; }'",
        }
    }
}

/// Run the tool's version pipeline and parse what it prints.
pub fn current_version(host: &dyn Host, tool: VersionedTool) -> Result<ToolVersion> {
    let result = host.run(tool.version_command())?;
    let output = result.stdout.trim();

    if let Some(version) = ToolVersion::parse(output) {
        return Ok(version);
    }

    let shown = if output.is_empty() {
        result.first_error_line()
    } else {
        output
    };
    Err(DoctorError::VersionParse {
        tool: tool.name().to_string(),
        output: shown.to_string(),
    }
    .into())
}

/// Parse a minimum version declared in the registry.
pub fn parse_required(required: &str) -> Result<ToolVersion> {
    ToolVersion::parse(required).with_context(|| format!("invalid minimum version {:?}", required))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::host::MockHost;

    fn v(s: &str) -> ToolVersion {
        ToolVersion::parse(s).unwrap()
    }

    #[test]
    fn parse_plain_version() {
        let version = v("20.10.7");
        assert_eq!(version.as_str(), "20.10.7");
        assert_eq!(version.parts(), &[20, 10, 7]);
    }

    #[test]
    fn parse_ignores_prefix_and_suffix() {
        assert_eq!(v("v2.32.1").as_str(), "2.32.1");
        assert_eq!(v("1.29.2-desktop.1").as_str(), "1.29.2");
        assert_eq!(v("Docker version 24.0.7, build afdd53b").as_str(), "24.0.7");
    }

    #[test]
    fn parse_rejects_text_without_digits() {
        assert!(ToolVersion::parse("").is_none());
        assert!(ToolVersion::parse("command not found").is_none());
    }

    #[test]
    fn numeric_not_lexicographic_ordering() {
        assert!(v("2.10.0") > v("2.9.0"));
        assert!(v("20.10.7") >= v("9.9.9"));
        assert!(v("0.13.0") > v("0.9.12"));
    }

    #[test]
    fn equal_versions_compare_equal() {
        assert_eq!(v("2.0.0"), v("2.0.0"));
        assert!(v("2.0.0") >= v("2.0.0"));
    }

    #[test]
    fn missing_components_are_zero() {
        assert_eq!(v("2.0"), v("2.0.0"));
        assert!(v("2.0.1") > v("2"));
    }

    #[test]
    fn lower_patch_is_less() {
        assert!(v("0.0.1") < v("2.0.0"));
        assert!(v("379.0.0") > v("378.9.9"));
    }

    #[test]
    fn display_uses_raw_text() {
        assert_eq!(v("v1.29.2").to_string(), "1.29.2");
    }

    #[test]
    fn every_tool_has_a_pipeline() {
        for tool in [
            VersionedTool::Gh,
            VersionedTool::Docker,
            VersionedTool::DockerCompose,
            VersionedTool::Mutagen,
            VersionedTool::Gcloud,
        ] {
            assert!(tool.version_command().contains('|'));
            assert!(!tool.name().is_empty());
        }
    }

    #[test]
    fn current_version_parses_pipeline_output() {
        let host = MockHost::new().with_command(
            VersionedTool::Docker.version_command(),
            0,
            "24.0.7\n",
            "",
        );
        let version = current_version(&host, VersionedTool::Docker).unwrap();
        assert_eq!(version.as_str(), "24.0.7");
    }

    #[test]
    fn current_version_reports_shell_error_when_output_empty() {
        let host = MockHost::new().with_command(
            VersionedTool::Gh.version_command(),
            0,
            "",
            "sh: gh: command not found\n",
        );
        let err = current_version(&host, VersionedTool::Gh).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("gh"));
        assert!(msg.contains("command not found"));
    }

    #[test]
    fn parse_required_rejects_garbage() {
        assert!(parse_required("latest").is_err());
        assert_eq!(parse_required("1.29.2").unwrap(), v("1.29.2"));
    }
}
