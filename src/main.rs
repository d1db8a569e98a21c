//! cobra_example CLI entry point.

use std::process::ExitCode;

use cobra_example::cli::{CommandDispatcher, Invocation};
use cobra_example::config::AppConfig;
use cobra_example::ui::TerminalUI;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries command output only.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("cobra_example=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cobra_example=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let dispatcher = CommandDispatcher::new(AppConfig::from_build_env());
    let mut ui = TerminalUI::for_args(std::env::args_os());

    let cli = match dispatcher.parse(std::env::args_os(), &mut ui) {
        Invocation::Dispatch(cli) => cli,
        Invocation::Exit(result) => return ExitCode::from(result.exit_code as u8),
    };

    init_tracing(cli.debug);
    tracing::debug!("cobra_example starting with args: {:?}", cli);

    let result = dispatcher.execute(&cli, &mut ui);
    ExitCode::from(result.exit_code as u8)
}
