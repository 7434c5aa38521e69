use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use cadence_core::config::Settings;
use cadence_rule::Schedule;
use chrono::NaiveDateTime;

use crate::cli::MatchesArgs;

#[must_use]
pub fn is_on_schedule(schedule: &Schedule, at: NaiveDateTime) -> bool {
    let on = schedule.matches(at);

    tracing::debug!(
        %at,
        included = schedule.is_on(at),
        excluded = schedule.is_excluded(at),
        on,
        "Checked instant"
    );

    on
}

pub(super) fn run(args: &MatchesArgs, settings: &Settings) -> Result<ExitCode> {
    let schedule = super::build_schedule(&args.rules, settings)?;
    let on = is_on_schedule(&schedule, args.at);

    writeln!(io::stdout().lock(), "{on}")?;

    Ok(if on {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
