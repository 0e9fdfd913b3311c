//! nbcheck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use nbcheck::cli::{Cli, CommandDispatcher, Commands, EXIT_FATAL};
use nbcheck::ui::{OutputMode, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so they never mix with the report or `--json` output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("nbcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nbcheck=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("nbcheck starting with args: {:?}", cli);

    let json = matches!(&cli.command, Some(Commands::Check(args)) if args.json);
    let output_mode = if json {
        OutputMode::Silent
    } else if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = TerminalUI::new(output_mode);
    let dispatcher = CommandDispatcher::new(cli.config.clone(), cli.python.clone());

    let code = match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => result.exit_code,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            EXIT_FATAL
        }
    };
    ExitCode::from(u8::try_from(code).unwrap_or(u8::MAX))
}
