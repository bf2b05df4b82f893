//! The check variants and their single execution contract.

use super::host::Host;
use super::platform::Platform;
use super::probes::CustomProbe;
use super::result::{CheckResult, Outcome, Verdict};
use super::version::{self, VersionedTool};
use crate::config::{CloudSettings, ConfigPaths};
use crate::error::Result;

/// Everything a check may look at.
#[derive(Clone, Copy)]
pub struct CheckContext<'a> {
    pub host: &'a dyn Host,
    /// Detected host platform; `None` when unrecognised.
    pub platform: Option<Platform>,
    pub paths: &'a ConfigPaths,
    pub cloud: &'a CloudSettings,
}

/// One atomic verification, producing one report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// The executable is on the search path.
    Existence { tool: String },
    /// The tool's version is at least `min_version`.
    VersionFloor {
        tool: VersionedTool,
        min_version: String,
    },
    /// A bespoke probe.
    Custom(CustomProbe),
}

impl Check {
    pub fn existence(tool: &str) -> Self {
        Check::Existence {
            tool: tool.to_string(),
        }
    }

    pub fn version_floor(tool: VersionedTool, min_version: &str) -> Self {
        Check::VersionFloor {
            tool,
            min_version: min_version.to_string(),
        }
    }

    /// Target column.
    pub fn subject(&self) -> &str {
        match self {
            Check::Existence { tool } => tool,
            Check::VersionFloor { tool, .. } => tool.name(),
            Check::Custom(probe) => probe.subject(),
        }
    }

    /// Condition column.
    pub fn condition(&self) -> &'static str {
        match self {
            Check::Existence { .. } => "is installed",
            Check::VersionFloor { .. } => "meets version requirement",
            Check::Custom(probe) => probe.condition(),
        }
    }

    /// Run the check and label the outcome.
    ///
    /// Never fails: an error while evaluating becomes a failing row whose
    /// detail is the error message.
    pub fn execute(&self, ctx: &CheckContext<'_>) -> CheckResult {
        let outcome = match self.evaluate(ctx) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!(
                    "{} {} could not be checked: {}",
                    self.subject(),
                    self.condition(),
                    e
                );
                Outcome::fail(e.to_string())
            }
        };

        tracing::debug!(
            "{} {}: {} {:?}",
            self.subject(),
            self.condition(),
            outcome.verdict,
            outcome.detail
        );
        CheckResult::new(self.subject(), self.condition(), outcome)
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Result<Outcome> {
        match self {
            Check::Existence { tool } => Ok(match ctx.host.find_executable(tool) {
                Some(path) => Outcome::pass(path.display().to_string()),
                None => Outcome::fail(""),
            }),
            Check::VersionFloor { tool, min_version } => {
                let required = version::parse_required(min_version)?;
                let current = version::current_version(ctx.host, *tool)?;
                Ok(Outcome {
                    verdict: Verdict::from_bool(current >= required),
                    detail: format!("{} >={}", current, min_version),
                })
            }
            Check::Custom(probe) => probe.evaluate(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::host::MockHost;
    use std::path::Path;

    fn run(check: &Check, host: &MockHost) -> CheckResult {
        let paths = ConfigPaths::from_roots(
            Path::new("/home/dev"),
            Path::new("/home/dev/.config"),
            Path::new("/home/dev/.config/devdoctor"),
        );
        let cloud = CloudSettings::default();
        let ctx = CheckContext {
            host,
            platform: Some(Platform::Linux),
            paths: &paths,
            cloud: &cloud,
        };
        check.execute(&ctx)
    }

    #[test]
    fn existence_found_reports_path() {
        let host = MockHost::new().with_executable("make", "/usr/bin/make");
        let row = run(&Check::existence("make"), &host);

        assert_eq!(row.subject, "make");
        assert_eq!(row.condition, "is installed");
        assert_eq!(row.verdict, Verdict::Pass);
        assert_eq!(row.detail, "/usr/bin/make");
    }

    #[test]
    fn existence_missing_has_empty_detail() {
        let row = run(&Check::existence("jq"), &MockHost::new());
        assert_eq!(row.verdict, Verdict::Fail);
        assert_eq!(row.detail, "");
    }

    #[test]
    fn version_equal_to_floor_passes() {
        let host = MockHost::new().with_command(VersionedTool::Gh.version_command(), 0, "2.0.0\n", "");
        let row = run(&Check::version_floor(VersionedTool::Gh, "2.0.0"), &host);

        assert_eq!(row.subject, "gh");
        assert_eq!(row.condition, "meets version requirement");
        assert_eq!(row.verdict, Verdict::Pass);
        assert_eq!(row.detail, "2.0.0 >=2.0.0");
    }

    #[test]
    fn version_below_floor_fails() {
        let host = MockHost::new().with_command(VersionedTool::Mutagen.version_command(), 0, "0.0.1\n", "");
        let row = run(&Check::version_floor(VersionedTool::Mutagen, "0.13.0"), &host);

        assert_eq!(row.verdict, Verdict::Fail);
        assert_eq!(row.detail, "0.0.1 >=0.13.0");
    }

    #[test]
    fn version_compares_numerically() {
        let host = MockHost::new().with_command(
            VersionedTool::DockerCompose.version_command(),
            0,
            "2.10.0\n",
            "",
        );
        let row = run(&Check::version_floor(VersionedTool::DockerCompose, "2.9.0"), &host);

        assert_eq!(row.subject, "docker compose");
        assert!(row.is_pass());
    }

    #[test]
    fn unparseable_version_becomes_failing_row() {
        let row = run(&Check::version_floor(VersionedTool::Gcloud, "379.0.0"), &MockHost::new());

        assert_eq!(row.subject, "gcloud");
        assert_eq!(row.verdict, Verdict::Fail);
        assert!(row.detail.contains("gcloud"));
    }

    #[test]
    fn spawn_error_becomes_failing_row() {
        let host = MockHost::new().with_spawn_error("pgrep -f dockerd");
        let row = run(&Check::Custom(CustomProbe::DockerDaemon), &host);

        assert_eq!(row.subject, "Docker daemon");
        assert_eq!(row.condition, "process is running");
        assert_eq!(row.verdict, Verdict::Fail);
        assert!(row.detail.contains("pgrep -f dockerd"));
    }

    #[test]
    fn invalid_floor_becomes_failing_row() {
        let host = MockHost::new().with_command(VersionedTool::Gh.version_command(), 0, "2.0.0", "");
        let row = run(&Check::version_floor(VersionedTool::Gh, "latest"), &host);

        assert_eq!(row.verdict, Verdict::Fail);
        assert!(row.detail.contains("latest"));
    }
}
