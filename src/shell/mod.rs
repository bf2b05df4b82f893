//! Shell command execution and host environment lookups.

pub mod command;
pub mod path;
pub mod platform;

pub use command::{run_captured, CommandResult, CHECK_SHELL};
pub use path::{is_executable, parse_system_path, resolve_tool_path};
pub use platform::{is_ci, is_non_interactive_env, NON_INTERACTIVE_ENV};
