//! Bespoke checks.
//!
//! Each probe runs one external command or inspects one file and matches
//! the result against a known success signature. Failures carry a
//! remediation hint in the row detail.

use serde_json::Value;

use super::check::CheckContext;
use super::platform::Platform;
use super::result::Outcome;
use crate::config::parse_json;
use crate::error::Result;

/// Command proving the SSH key is accepted by GitHub.
pub const GITHUB_SSH_COMMAND: &str = "ssh -o 'ConnectTimeout 5' -T git@github.com";

/// Signature GitHub prints on stderr for an accepted key.
pub const GITHUB_SSH_SUCCESS: &str = "successfully authenticated";

pub const GH_AUTH_STATUS_COMMAND: &str = "gh auth status";

/// Signature `gh auth status` prints when no host is logged in.
pub const GH_NOT_LOGGED_IN: &str = "You are not logged into any GitHub hosts.";

pub const RESOURCE_MANAGER_COMMAND: &str =
    "gcloud services list --enabled | grep -q cloudresourcemanager.googleapis.com";

const GH_LOGIN_HINT: &str = "Not logged in. Run gh auth login to log in to a GitHub host.";

const DOCKER_DAEMON_HINT: &str = "Docker daemon process not found. Start the Docker daemon.";

const CONFIGURE_DOCKER_HINT: &str =
    "Artifact Registry is not configured. Run gcloud auth configure-docker.";

/// Checks with their own command and success signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomProbe {
    GithubSsh,
    GhAuthLogin,
    DockerDaemon,
    DockerCredHelpers,
    GcloudApplicationCredentials,
    ResourceManagerApi,
}

impl CustomProbe {
    pub fn subject(self) -> &'static str {
        match self {
            Self::GithubSsh => "ssh",
            Self::GhAuthLogin => "gh",
            Self::DockerDaemon => "Docker daemon",
            Self::DockerCredHelpers
            | Self::GcloudApplicationCredentials
            | Self::ResourceManagerApi => "Google Cloud",
        }
    }

    pub fn condition(self) -> &'static str {
        match self {
            Self::GithubSsh => "can connect to GitHub",
            Self::GhAuthLogin => "is logged in",
            Self::DockerDaemon => "process is running",
            Self::DockerCredHelpers => "Artifact Registry configured",
            Self::GcloudApplicationCredentials => "default credentials set",
            Self::ResourceManagerApi => "Resource Manager API enabled",
        }
    }

    pub(crate) fn evaluate(self, ctx: &CheckContext<'_>) -> Result<Outcome> {
        match self {
            Self::GithubSsh => github_ssh(ctx),
            Self::GhAuthLogin => gh_auth_login(ctx),
            Self::DockerDaemon => docker_daemon(ctx),
            Self::DockerCredHelpers => docker_cred_helpers(ctx),
            Self::GcloudApplicationCredentials => application_credentials(ctx),
            Self::ResourceManagerApi => resource_manager_api(ctx),
        }
    }
}

/// `ssh -T` exits 1 even for an accepted key, so only stderr decides.
fn github_ssh(ctx: &CheckContext<'_>) -> Result<Outcome> {
    let result = ctx.host.run(GITHUB_SSH_COMMAND)?;
    let message = result.stderr.trim().to_string();

    if message.contains(GITHUB_SSH_SUCCESS) {
        Ok(Outcome::pass(message))
    } else {
        Ok(Outcome::fail(message))
    }
}

fn gh_auth_login(ctx: &CheckContext<'_>) -> Result<Outcome> {
    let result = ctx.host.run(GH_AUTH_STATUS_COMMAND)?;

    if result.success {
        Ok(Outcome::pass(""))
    } else if result.stderr.contains(GH_NOT_LOGGED_IN) {
        Ok(Outcome::fail(GH_LOGIN_HINT))
    } else {
        Ok(Outcome::fail(result.first_error_line()))
    }
}

/// Command finding the daemon process on `platform`.
pub fn docker_daemon_command(platform: Option<Platform>) -> &'static str {
    match platform {
        Some(Platform::MacOS) => "pgrep com.docker.backend",
        _ => "pgrep -f dockerd",
    }
}

fn docker_daemon(ctx: &CheckContext<'_>) -> Result<Outcome> {
    let result = ctx.host.run(docker_daemon_command(ctx.platform))?;

    if result.success {
        Ok(Outcome::pass(""))
    } else {
        Ok(Outcome::fail(DOCKER_DAEMON_HINT))
    }
}

fn docker_cred_helpers(ctx: &CheckContext<'_>) -> Result<Outcome> {
    let path = &ctx.paths.docker_config_json;
    if !ctx.host.file_exists(path) {
        return Ok(Outcome::fail(CONFIGURE_DOCKER_HINT));
    }

    let content = ctx.host.read_file(path)?;
    let config: Value = parse_json(&content, path)?;

    match config.get("credHelpers") {
        Some(helpers) if !helpers.is_null() => Ok(Outcome::pass(path.display().to_string())),
        _ => Ok(Outcome::fail(CONFIGURE_DOCKER_HINT)),
    }
}

fn application_credentials(ctx: &CheckContext<'_>) -> Result<Outcome> {
    let path = &ctx.paths.gcloud_adc_json;
    if ctx.host.file_exists(path) {
        return Ok(Outcome::pass(path.display().to_string()));
    }

    Ok(Outcome::fail(format!(
        "Application default credentials are not set. Authenticate with:\n\
         gcloud config set account {}\n\
         gcloud config set project {}\n\
         gcloud auth application-default login",
        ctx.cloud.account, ctx.cloud.project_name
    )))
}

fn resource_manager_api(ctx: &CheckContext<'_>) -> Result<Outcome> {
    let result = ctx.host.run(RESOURCE_MANAGER_COMMAND)?;

    if result.success {
        return Ok(Outcome::pass(""));
    }

    Ok(Outcome::fail(format!(
        "Cloud Resource Manager API is not enabled. Enable it with:\n\
         gcloud services enable --project {} cloudresourcemanager.googleapis.com",
        ctx.cloud.project_name
    )))
}
