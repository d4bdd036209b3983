//! install-eligibility CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use install_eligibility::cli::{Cli, CommandDispatcher};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code for usage, config, and I/O errors.
const EXIT_ERROR: u8 = 2;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `--quiet` flag sets level to WARN
/// 3. `RUST_LOG` environment variable (if set)
/// 4. Default is INFO
///
/// Logs go to stderr; stdout carries only the command's report.
fn init_tracing(debug: bool, quiet: bool) {
    let filter = if debug {
        EnvFilter::new("install_eligibility=debug")
    } else if quiet {
        EnvFilter::new("install_eligibility=warn")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("install_eligibility=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.quiet);

    tracing::debug!("install-eligibility starting with args: {:?}", cli);

    let dispatcher = match CommandDispatcher::from_cli(&cli) {
        Ok(dispatcher) => dispatcher,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let mut stdout = std::io::stdout().lock();
    match dispatcher.dispatch(&cli, &mut stdout) {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
