//! Proleptic Gregorian calendar arithmetic used by the period registry.
//!
//! Week numbers are expressed through a *boundary offset* `b` for the start of
//! the enclosing period (year or month): the week of the 1-based day ordinal
//! `d` is `floor((d + b) / 7)`. Each [`WeekNumbering`] only differs in how it
//! derives `b`.

use cadence_core::constants::{DAYS_IN_WEEK, DAYS_IN_YEAR_MAX, DAYS_IN_YEAR_MIN};
use cadence_core::options::CalendarOptions;
use chrono::{Datelike, Months, NaiveDate};

/// Gregorian rule: divisible by 400, or divisible by 4 and not by 100.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Days in `month0` (January = 0) of `year`.
#[must_use]
pub const fn days_in_month(year: i32, month0: u32) -> u32 {
    match month0 {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

#[must_use]
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        DAYS_IN_YEAR_MAX
    } else {
        DAYS_IN_YEAR_MIN
    }
}

/// 1-based day of the year.
#[must_use]
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Day of the week with Sunday as `0`.
#[must_use]
pub fn weekday_number(date: NaiveDate) -> i32 {
    signed(date.weekday().num_days_from_sunday())
}

/// Days since the configured week start (`0` when `date` is the week start).
#[must_use]
pub fn weekday_offset(date: NaiveDate, week_starts_on: u8) -> i32 {
    (weekday_number(date) - i32::from(week_starts_on)).rem_euclid(DAYS_IN_WEEK)
}

/// Chrono components are far below `i32::MAX`.
pub(crate) fn signed(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Conventions for numbering the possibly partial first week of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekNumbering {
    /// The week containing day `first_week_contains_date` is week 1; any
    /// earlier days are week 0.
    Majority,
    /// Day 1 is week 0 unless the period starts on the week start, in which
    /// case numbering starts at week 1.
    Full,
    /// Seven-day blocks counted from day 1, starting at week 1. Ignores the
    /// configured week start.
    FromFirst,
}

impl WeekNumbering {
    /// Boundary offset for a period starting on `period_start`.
    #[must_use]
    pub fn boundary(self, period_start: NaiveDate, options: CalendarOptions) -> i32 {
        let offset = weekday_offset(period_start, options.week_starts_on());

        match self {
            Self::Majority => {
                let contains = i32::from(options.first_week_contains_date());
                let in_first_calendar_week = (contains - 1 + offset) / DAYS_IN_WEEK == 0;

                offset - 1 + if in_first_calendar_week { DAYS_IN_WEEK } else { 0 }
            }
            Self::Full => offset - 1 + if offset == 0 { DAYS_IN_WEEK } else { 0 },
            Self::FromFirst => DAYS_IN_WEEK - 1,
        }
    }
}

/// Week of the 1-based day `ordinal` for the given boundary offset.
#[must_use]
pub const fn week_number(ordinal: i32, boundary: i32) -> i32 {
    (ordinal + boundary).div_euclid(DAYS_IN_WEEK)
}

/// Ordinal of the first day of `week`, clamped to the first day of the period.
#[must_use]
pub fn week_start_ordinal(week: i32, boundary: i32) -> i32 {
    week.saturating_mul(DAYS_IN_WEEK)
        .saturating_sub(boundary)
        .max(1)
}

/// The period a week number is counted within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekScope {
    Year,
    Month,
}

impl WeekScope {
    /// First day of the year or month containing `date`.
    #[must_use]
    pub fn start_of(self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Year => date.with_ordinal(1),
            Self::Month => date.with_day(1),
        }
        .unwrap_or(date)
    }

    /// Number of days in the period starting on `start`.
    #[must_use]
    pub fn length(self, start: NaiveDate) -> i32 {
        signed(match self {
            Self::Year => days_in_year(start.year()),
            Self::Month => days_in_month(start.year(), start.month0()),
        })
    }

    /// Start of the period after the one starting on `start`.
    #[must_use]
    pub fn following(self, start: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Year => start.checked_add_months(Months::new(12)),
            Self::Month => start.checked_add_months(Months::new(1)),
        }
    }

    /// Week of `date` within its period.
    #[must_use]
    pub fn week_of(
        self,
        date: NaiveDate,
        numbering: WeekNumbering,
        options: CalendarOptions,
    ) -> i32 {
        let start = self.start_of(date);
        let ordinal = signed(date.ordinal0() - start.ordinal0()) + 1;

        week_number(ordinal, numbering.boundary(start, options))
    }

    /// First day of `week` in the period starting on `start`, if the period
    /// has such a week.
    #[must_use]
    pub fn week_start(
        self,
        start: NaiveDate,
        week: i32,
        numbering: WeekNumbering,
        options: CalendarOptions,
    ) -> Option<NaiveDate> {
        let boundary = numbering.boundary(start, options);
        let ordinal = week_start_ordinal(week, boundary);

        if ordinal > self.length(start) || week_number(ordinal, boundary) != week {
            return None;
        }

        start.checked_add_days(chrono::Days::new(u64::try_from(ordinal - 1).ok()?))
    }
}
