//! The machine as seen by checks.
//!
//! Checks never touch the OS directly. They go through [`Host`], which
//! [`SystemHost`] implements with real processes and files and
//! [`MockHost`] implements with canned answers for tests.
//!
//! # Example
//!
//! ```
//! use devdoctor::checks::{Host, MockHost};
//!
//! let host = MockHost::new()
//!     .with_executable("jq", "/usr/bin/jq")
//!     .with_command("pgrep -f dockerd", 1, "", "");
//!
//! assert!(host.find_executable("jq").is_some());
//! assert!(!host.run("pgrep -f dockerd").unwrap().success);
//! assert_eq!(host.commands_run(), vec!["pgrep -f dockerd".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{DoctorError, Result};
use crate::shell::{parse_system_path, resolve_tool_path, run_captured, CommandResult};

/// Operations a check may perform against the workstation.
pub trait Host {
    /// Run a shell command line and capture its output.
    ///
    /// A non-zero exit is a normal `Ok` result; `Err` means the shell
    /// could not be started.
    fn run(&self, command: &str) -> Result<CommandResult>;

    /// Resolve an executable on the search path.
    fn find_executable(&self, tool: &str) -> Option<PathBuf>;

    /// Whether a regular file exists.
    fn file_exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String>;
}

/// The real machine.
#[derive(Debug, Clone)]
pub struct SystemHost {
    path_entries: Vec<PathBuf>,
}

impl SystemHost {
    /// Host using the process `PATH`.
    pub fn new() -> Self {
        Self::with_path(parse_system_path())
    }

    /// Host searching an explicit list of directories.
    pub fn with_path(path_entries: Vec<PathBuf>) -> Self {
        Self { path_entries }
    }

    pub fn path_entries(&self) -> &[PathBuf] {
        &self.path_entries
    }
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for SystemHost {
    fn run(&self, command: &str) -> Result<CommandResult> {
        run_captured(command)
    }

    fn find_executable(&self, tool: &str) -> Option<PathBuf> {
        let found = resolve_tool_path(tool, &self.path_entries);
        tracing::debug!("Resolved {} to {:?}", tool, found);
        found
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }
}

/// Canned behaviour for one command line.
#[derive(Debug, Clone)]
enum MockCommand {
    Output {
        exit_code: i32,
        stdout: String,
        stderr: String,
    },
    SpawnError,
}

/// Host double for tests.
///
/// Commands that were not configured behave like a missing binary: exit
/// code 127 with "command not found" on stderr.
#[derive(Debug, Default)]
pub struct MockHost {
    commands: HashMap<String, MockCommand>,
    executables: HashMap<String, PathBuf>,
    files: HashMap<PathBuf, String>,
    unreadable: Vec<PathBuf>,
    calls: RefCell<Vec<String>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command` with the given exit code and output.
    pub fn with_command(mut self, command: &str, exit_code: i32, stdout: &str, stderr: &str) -> Self {
        self.commands.insert(
            command.to_string(),
            MockCommand::Output {
                exit_code,
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    /// Make `command` fail to start.
    pub fn with_spawn_error(mut self, command: &str) -> Self {
        self.commands
            .insert(command.to_string(), MockCommand::SpawnError);
        self
    }

    /// Put `tool` on the simulated search path.
    pub fn with_executable(mut self, tool: &str, path: impl Into<PathBuf>) -> Self {
        self.executables.insert(tool.to_string(), path.into());
        self
    }

    /// Create a file with `content`.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    /// Create a file that exists but cannot be read.
    pub fn with_unreadable_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.push(path.into());
        self
    }

    /// Command lines passed to `run`, in order.
    pub fn commands_run(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Whether `command` was run at least once.
    pub fn ran(&self, command: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == command)
    }
}

impl Host for MockHost {
    fn run(&self, command: &str) -> Result<CommandResult> {
        self.calls.borrow_mut().push(command.to_string());

        match self.commands.get(command) {
            Some(MockCommand::Output {
                exit_code,
                stdout,
                stderr,
            }) => {
                let result = if *exit_code == 0 {
                    CommandResult::success(stdout.clone(), stderr.clone(), Duration::ZERO)
                } else {
                    CommandResult::failure(
                        Some(*exit_code),
                        stdout.clone(),
                        stderr.clone(),
                        Duration::ZERO,
                    )
                };
                Ok(result)
            }
            Some(MockCommand::SpawnError) => Err(DoctorError::CommandFailed {
                command: command.to_string(),
                code: None,
            }),
            None => Ok(CommandResult::failure(
                Some(127),
                String::new(),
                "sh: command not found\n".to_string(),
                Duration::ZERO,
            )),
        }
    }

    fn find_executable(&self, tool: &str) -> Option<PathBuf> {
        self.executables.get(tool).cloned()
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.unreadable.iter().any(|p| p == path)
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        if self.unreadable.iter().any(|p| p == path) {
            return Err(DoctorError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            )));
        }
        self.files.get(path).cloned().ok_or_else(|| {
            DoctorError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            ))
        })
    }
}
