//! Week numbering configuration shared by every week-aware period.

use crate::error::{CoreError, CoreResult};

/// Calendar options threaded through period and pattern evaluation.
///
/// `week_starts_on` uses the same numbering as the `dayOfWeek` period
/// (`0` = Sunday). `first_week_contains_date` is the day of the year (or
/// month) that must fall inside week 1 under the majority-rule numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarOptions {
    week_starts_on: u8,
    first_week_contains_date: u8,
}

/// Sunday start, week 1 contains the 4th.
pub const DEFAULT_OPTIONS: CalendarOptions = CalendarOptions {
    week_starts_on: 0,
    first_week_contains_date: 4,
};

impl CalendarOptions {
    /// ## Summary
    /// Creates options after checking both values are in range.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidOptions` if `week_starts_on` is not in `0..=6`
    /// or `first_week_contains_date` is not in `1..=7`.
    pub fn new(week_starts_on: u8, first_week_contains_date: u8) -> CoreResult<Self> {
        if week_starts_on > 6 {
            return Err(CoreError::InvalidOptions(format!(
                "week_starts_on must be between 0 and 6, got {week_starts_on}"
            )));
        }
        if !(1..=7).contains(&first_week_contains_date) {
            return Err(CoreError::InvalidOptions(format!(
                "first_week_contains_date must be between 1 and 7, got {first_week_contains_date}"
            )));
        }

        Ok(Self {
            week_starts_on,
            first_week_contains_date,
        })
    }

    #[must_use]
    pub const fn week_starts_on(self) -> u8 {
        self.week_starts_on
    }

    #[must_use]
    pub const fn first_week_contains_date(self) -> u8 {
        self.first_week_contains_date
    }
}

impl Default for CalendarOptions {
    fn default() -> Self {
        DEFAULT_OPTIONS
    }
}
