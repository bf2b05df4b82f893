//! Shell command execution.

use crate::error::{DoctorError, Result};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// First non-empty line of stderr, falling back to stdout.
    pub fn first_error_line(&self) -> &str {
        self.stderr
            .lines()
            .chain(self.stdout.lines())
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or("")
    }
}

/// Shell that runs check pipelines.
///
/// The pipelines are POSIX `sh`, so the user's login shell is never used.
pub const CHECK_SHELL: &str = "/bin/sh";

/// Run a shell pipeline and capture both output streams.
///
/// Pipelines and `&&`/`||` operators work. Stdin is closed. Blocks until
/// the shell exits.
pub fn run_captured(command: &str) -> Result<CommandResult> {
    let start = Instant::now();

    let (shell, flag) = shell_invocation();
    tracing::debug!("Executing `{}` via {}", command, shell);

    let output = Command::new(shell)
        .arg(flag)
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            tracing::debug!("Failed to spawn {}: {}", shell, e);
            DoctorError::CommandFailed {
                command: command.to_string(),
                code: None,
            }
        })?;

    let duration = start.elapsed();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    tracing::debug!(
        "`{}` exited with {:?} after {:?}",
        command,
        output.status.code(),
        duration
    );

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Shell binary and the flag that hands it a command string.
fn shell_invocation() -> (&'static str, &'static str) {
    if cfg!(target_os = "windows") {
        ("cmd.exe", "/C")
    } else {
        (CHECK_SHELL, "-c")
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn execute_successful_command() {
        let result = run_captured("echo hello").unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn execute_failing_command() {
        let result = run_captured("exit 3").unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[test]
    fn execute_supports_pipelines() {
        let result = run_captured("echo 'Docker version 24.0.7, build' | tr -d ','").unwrap();

        assert!(result.success);
        assert!(result.stdout.contains("24.0.7 build"));
    }

    #[test]
    fn execute_captures_stderr() {
        let result = run_captured("echo oops >&2").unwrap();

        assert!(result.stderr.contains("oops"));
        assert!(result.stdout.is_empty());
    }

    #[test]
    fn runs_under_posix_sh_regardless_of_login_shell() {
        // `$0` is the interpreter path.
        let result = run_captured("echo \"${0##*/}\"").unwrap();

        assert!(result.success);
        assert_eq!(result.stdout.trim(), "sh");
    }

    #[test]
    fn shell_is_fixed_to_bin_sh() {
        assert_eq!(shell_invocation(), ("/bin/sh", "-c"));
    }

    #[test]
    fn first_error_line_prefers_stderr() {
        let result = CommandResult::failure(
            Some(1),
            "stdout line\n".to_string(),
            "\n  first problem\nsecond problem\n".to_string(),
            Duration::ZERO,
        );
        assert_eq!(result.first_error_line(), "first problem");
    }

    #[test]
    fn first_error_line_falls_back_to_stdout() {
        let result = CommandResult::failure(
            Some(1),
            "only stdout\n".to_string(),
            String::new(),
            Duration::ZERO,
        );
        assert_eq!(result.first_error_line(), "only stdout");
    }
}
