use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use retire_ui::{AppConfig, Cli, Command, logging, run_calc, run_form};

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    logging::init_logging(&config.logging)?;
    debug!(?config, "configuration loaded");

    match &cli.command {
        Some(Command::Calc(args)) => {
            let accepted = run_calc(args, &mut io::stdout().lock())?;
            Ok(if accepted {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        None => {
            run_form()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
