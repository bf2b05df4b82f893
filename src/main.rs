//! devdoctor CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use devdoctor::cli::{Cli, CommandDispatcher};
use devdoctor::shell::is_non_interactive_env;
use devdoctor::ui::{create_surface, should_use_colors, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so they never land inside the table.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("devdoctor=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("devdoctor=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("devdoctor starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);

    let colors = !cli.no_color && should_use_colors();
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let is_interactive = !cli.non_interactive && !is_non_interactive_env();

    let mut surface = create_surface(is_interactive, output_mode, colors);
    let dispatcher = CommandDispatcher::new(cli.config_dir.clone());

    match dispatcher.dispatch(&cli, surface.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            surface.error(&e.to_string());
            ExitCode::from(1)
        }
    }
}
