//! osflinter CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use osflinter::cli::{Cli, CommandDispatcher};
use osflinter::exit::report_error;
use osflinter::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout is reserved for `rules` and `completions`.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("osflinter=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("osflinter=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("osflinter starting with args: {:?}", cli);

    let mut ui = create_ui(cli.no_color);

    // Determine project root
    let project_root = match cli.project.clone() {
        Some(root) => root,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                ui.error(&format!("Cannot determine working directory: {}", e));
                return ExitCode::from(1);
            }
        },
    };

    let dispatcher = CommandDispatcher::new(project_root);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            report_error(ui.as_mut(), &e);
            ExitCode::from(1)
        }
    }
}
