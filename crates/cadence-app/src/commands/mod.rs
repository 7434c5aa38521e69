mod matches;
mod next;

use std::process::ExitCode;

use anyhow::{Context, Result};
use cadence_core::config::Settings;
use cadence_rule::{Schedule, ScheduleInput};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::cli::{Command, RuleArgs};

pub use matches::is_on_schedule;
pub use next::{occurrences, render};

/// Accepted `--from`/`--at` layouts, tried in order. A bare date means
/// midnight.
const INSTANT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// ## Summary
/// Parses a local date-time such as `2024-01-05T09:30:00.250`,
/// `2024-01-05 09:30` or `2024-01-05`.
///
/// ## Errors
/// Returns the date parse error if no layout matches.
pub fn parse_instant(text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let text = text.trim();

    if let Some(instant) = INSTANT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
    {
        return Ok(instant);
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d").map(|date| date.and_time(NaiveTime::MIN))
}

/// ## Summary
/// Compiles the command-line rules into a schedule using the configured
/// calendar options.
///
/// ## Errors
/// Returns an error if the configured options are invalid or a rule does not
/// compile.
pub fn build_schedule(rules: &RuleArgs, settings: &Settings) -> Result<Schedule> {
    let options = settings
        .calendar
        .options()
        .context("Invalid calendar settings")?;

    Schedule::with_options(
        ScheduleInput::Rules {
            on: rules.on.clone(),
            not: rules.not.clone(),
        },
        options,
    )
    .context("Invalid rule")
}

/// ## Summary
/// Runs a subcommand and reports the process exit code.
///
/// ## Errors
/// Returns an error if the rules are invalid or writing the output fails.
pub fn run(command: &Command, settings: &Settings) -> Result<ExitCode> {
    match command {
        Command::Next(args) => next::run(args, settings),
        Command::Matches(args) => matches::run(args, settings),
    }
}
