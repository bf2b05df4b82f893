//! The `doctor` command.
//!
//! Resolves configuration, builds the registry for the host platform and
//! runs the report. The exit code is 0 whenever the report completed; the
//! table is the result.

use std::path::Path;

use crate::checks::{CheckContext, CheckRegistry, Host, Platform, SystemHost};
use crate::cli::args::DoctorArgs;
use crate::config::{CloudSettings, ConfigPaths};
use crate::error::Result;
use crate::report::{Pacing, ReportRunner};
use crate::ui::ReportSurface;

use super::dispatcher::{Command, CommandResult};

/// The doctor command implementation.
pub struct DoctorCommand {
    args: DoctorArgs,
    paths: ConfigPaths,
    host: Box<dyn Host>,
    platform: Option<Platform>,
}

impl DoctorCommand {
    /// Create a doctor command for this machine.
    ///
    /// `config_dir` overrides the devdoctor config directory.
    pub fn new(args: DoctorArgs, config_dir: Option<&Path>) -> Result<Self> {
        let paths = ConfigPaths::discover(config_dir)?;
        Ok(Self::with_host(
            args,
            paths,
            Box::new(SystemHost::new()),
            Platform::current(),
        ))
    }

    /// Create a doctor command against an explicit host.
    pub fn with_host(
        args: DoctorArgs,
        paths: ConfigPaths,
        host: Box<dyn Host>,
        platform: Option<Platform>,
    ) -> Self {
        Self {
            args,
            paths,
            host,
            platform,
        }
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }
}

impl Command for DoctorCommand {
    fn execute(&self, surface: &mut dyn ReportSurface) -> Result<CommandResult> {
        tracing::debug!(
            "Running doctor on {:?} with config in {}",
            self.platform,
            self.paths.doctor_home.display()
        );

        let cloud = CloudSettings::resolve(&self.paths, self.args.stage);
        tracing::debug!(
            "Hints use project {} and account {}",
            cloud.project_name,
            cloud.account
        );

        let ctx = CheckContext {
            host: self.host.as_ref(),
            platform: self.platform,
            paths: &self.paths,
            cloud: &cloud,
        };

        let pacing = if surface.is_interactive() {
            Pacing::default()
        } else {
            Pacing::none()
        };
        let runner = ReportRunner::new(CheckRegistry::new(self.platform)).with_pacing(pacing);
        let summary = runner.run(&ctx, surface);

        if !summary.all_passed() {
            tracing::debug!("{} check(s) failed", summary.failed);
        }
        Ok(CommandResult::success())
    }
}
