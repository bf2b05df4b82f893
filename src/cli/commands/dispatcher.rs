//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, DoctorArgs};
use crate::error::Result;
use crate::ui::ReportSurface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing the report to `surface`.
    fn execute(&self, surface: &mut dyn ReportSurface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config_dir: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a dispatcher; `config_dir` overrides the devdoctor config directory.
    pub fn new(config_dir: Option<PathBuf>) -> Self {
        Self { config_dir }
    }

    pub fn config_dir(&self) -> Option<&Path> {
        self.config_dir.as_deref()
    }

    /// Dispatch and execute a command.
    ///
    /// No subcommand runs `doctor` with default arguments.
    pub fn dispatch(&self, cli: &Cli, surface: &mut dyn ReportSurface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Doctor(args)) => {
                let cmd = super::doctor::DoctorCommand::new(args.clone(), self.config_dir())?;
                cmd.execute(surface)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(surface)
            }
            None => {
                let cmd = super::doctor::DoctorCommand::new(DoctorArgs::default(), self.config_dir())?;
                cmd.execute(surface)
            }
        }
    }
}
