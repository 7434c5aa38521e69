use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use cadence_core::config::Settings;
use cadence_rule::Schedule;
use chrono::{Local, NaiveDateTime};

use crate::cli::NextArgs;

const OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Up to `count` occurrences of `schedule` after `from`.
#[must_use]
pub fn occurrences(
    schedule: &Schedule,
    from: NaiveDateTime,
    count: usize,
    max_tries: usize,
) -> Vec<NaiveDateTime> {
    schedule.occurrences(from, max_tries).take(count).collect()
}

/// ## Summary
/// Formats instants one per line, or as a JSON array of strings.
///
/// ## Errors
/// Returns an error if JSON serialization fails.
pub fn render(instants: &[NaiveDateTime], json: bool) -> Result<String> {
    let formatted: Vec<String> = instants
        .iter()
        .map(|instant| instant.format(OUTPUT_FORMAT).to_string())
        .collect();

    if json {
        Ok(serde_json::to_string_pretty(&formatted)?)
    } else {
        Ok(formatted.join("\n"))
    }
}

pub(super) fn run(args: &NextArgs, settings: &Settings) -> Result<ExitCode> {
    let schedule = super::build_schedule(&args.rules, settings)?;
    let from = args.from.unwrap_or_else(|| Local::now().naive_local());
    let count = args.count.unwrap_or(settings.search.count);
    let max_tries = args.max_tries.unwrap_or(settings.search.max_tries);

    let found = occurrences(&schedule, from, count, max_tries);
    if found.len() < count {
        tracing::info!(
            requested = count,
            found = found.len(),
            "Search ended before all occurrences were found"
        );
    }

    let output = render(&found, args.json)?;
    if !output.is_empty() {
        writeln!(io::stdout().lock(), "{output}")?;
    }

    Ok(ExitCode::SUCCESS)
}
