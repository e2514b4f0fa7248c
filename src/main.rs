//! depswarm CLI entry point.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use depswarm::cli::{Cli, CommandResult, RunCommand};
use depswarm::deploy::ProcessExecutor;
use depswarm::ui::{TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout only carries command lines.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("depswarm=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("depswarm=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    init_tracing(cli.debug);

    tracing::debug!("depswarm starting with args: {:?}", cli);

    let mut ui = TerminalUI::new();

    match run(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.process_exit_code()),
        Err(e) => {
            ui.error(&format!("{:#}", e));
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli, ui: &mut TerminalUI) -> anyhow::Result<CommandResult> {
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let command = RunCommand::from_cli(cli, &cwd);
    let mut executor = ProcessExecutor::new();

    Ok(command.execute(&mut executor, ui)?)
}
