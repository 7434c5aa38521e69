use std::process::ExitCode;

use anyhow::Result;
use cadence_app::cli::Cli;
use cadence_app::{commands, logging};
use cadence_core::config::{Settings, load_config};
use clap::Parser;

/// Exit status for invalid rules, settings or I/O failures. `1` is reserved
/// for `matches` reporting an instant that is off the schedule.
const ERROR_EXIT: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(ERROR_EXIT)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => load_config()?,
    };

    logging::init(cli.verbose, &settings.logging.level);
    tracing::debug!(settings = ?settings, "Configuration loaded");

    commands::run(&cli.command, &settings)
}
