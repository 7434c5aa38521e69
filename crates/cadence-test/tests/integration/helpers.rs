#![expect(clippy::unwrap_used, reason = "test helpers panic on bad fixtures")]
//! Shared fixtures for the integration tests.

use cadence_test::{PatternInput, Schedule, ScheduleInput};
use chrono::{NaiveDate, NaiveDateTime};

pub use cadence_test::constants::DEFAULT_MAX_TRIES;

/// Builds a date-time from its parts; panics on an invalid date.
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .unwrap()
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
    at(y, m, d, 0, 0)
}

/// Parses a `field=expression;...` rule.
pub fn rule(text: &str) -> PatternInput {
    text.parse().unwrap()
}

/// Schedule of `on` rules minus `not` rules, with the default options.
pub fn schedule(on: &[&str], not: &[&str]) -> Schedule {
    Schedule::new(ScheduleInput::Rules {
        on: on.iter().map(|text| rule(text)).collect(),
        not: not.iter().map(|text| rule(text)).collect(),
    })
    .unwrap()
}

/// The first `count` occurrences after `start`.
pub fn take(schedule: &Schedule, start: NaiveDateTime, count: usize) -> Vec<NaiveDateTime> {
    schedule
        .occurrences(start, DEFAULT_MAX_TRIES)
        .take(count)
        .collect()
}
