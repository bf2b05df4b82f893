//! Error types for devdoctor operations.
//!
//! This module defines [`DoctorError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Checks never return these errors to the runner as failures of the run;
//!   the runner converts them into failing report rows
//! - Use `DoctorError` for domain-specific errors that need distinct messages
//! - Use `anyhow::Error` (via `DoctorError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for devdoctor operations.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a JSON configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Shell command could not be started or was killed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A tool printed something that does not contain a version.
    #[error("Could not determine {tool} version from output {output:?}")]
    VersionParse { tool: String, output: String },

    /// No home directory could be determined for default paths.
    #[error("Could not determine the home directory")]
    NoHomeDir,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for devdoctor operations.
pub type Result<T> = std::result::Result<T, DoctorError>;
