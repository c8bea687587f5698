//! MYFC favorites CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use myfc_favorites::cli::{Cli, CommandDispatcher};
use myfc_favorites::ui::{FavoritesTheme, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so stdout stays machine readable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("myfc_favorites=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("myfc_favorites=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("myfc-favorites starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let dispatcher = match CommandDispatcher::from_cli(&cli) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{}", FavoritesTheme::detect().format_error(&format!("Error: {}", e)));
            return ExitCode::from(2);
        }
    };

    let mut ui = TerminalUI::new(dispatcher.config().output);

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
