//! The period registry: one field accessor and forward move per calendar
//! granularity.
//!
//! Each [`Period`] maps to a static [`PeriodDefinition`]. `get` reads the
//! field from an instant and `next` returns a later instant where the field
//! has the requested value, with every finer field reset to its minimum.
//! Periods are declared coarsest first; their priorities are strictly
//! decreasing in that order.

mod ops;

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use cadence_core::constants::{
    MILLIS_IN_DAY, MILLIS_IN_HOUR, MILLIS_IN_MINUTE, MILLIS_IN_SECOND, MILLIS_IN_WEEK,
};
use cadence_core::options::CalendarOptions;
use chrono::NaiveDateTime;

use crate::error::{RuleError, RuleResult};

/// Calendar granularity a frequency can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Period {
    Century,
    Decade,
    Year,
    Quarter,
    Month,
    WeekOfYear,
    WeekOfYearFull,
    WeekOfYearFromFirst,
    WeekOfMonth,
    WeekOfMonthFull,
    WeekOfMonthFromFirst,
    DayOfYear,
    DayOfWeek,
    DayOfMonth,
    DayOfMonthFromEnd,
    Hour,
    Minute,
    Second,
    Millisecond,
}

/// Behavior bundle for one period.
#[derive(Debug)]
pub struct PeriodDefinition {
    /// Approximate duration in milliseconds. Larger periods are corrected
    /// first during a search.
    pub priority: i64,
    /// Reads the field value.
    pub get: fn(NaiveDateTime, CalendarOptions) -> i32,
    /// Moves strictly forward to the start of the given field value.
    pub next: fn(NaiveDateTime, i32, CalendarOptions) -> NaiveDateTime,
    /// Natural value range within the enclosing cycle, `None` for the
    /// absolute periods (century, decade, year).
    pub domain: Option<(i32, i32)>,
}

static DEFINITIONS: [PeriodDefinition; 19] = [
    PeriodDefinition {
        priority: 3_155_760_000_000,
        get: ops::century_get,
        next: ops::century_next,
        domain: None,
    },
    PeriodDefinition {
        priority: 315_576_000_000,
        get: ops::decade_get,
        next: ops::decade_next,
        domain: None,
    },
    PeriodDefinition {
        priority: 31_556_952_000,
        get: ops::year_get,
        next: ops::year_next,
        domain: None,
    },
    PeriodDefinition {
        priority: 7_889_238_000,
        get: ops::quarter_get,
        next: ops::quarter_next,
        domain: Some((0, 3)),
    },
    PeriodDefinition {
        priority: 2_629_746_000,
        get: ops::month_get,
        next: ops::month_next,
        domain: Some((0, 11)),
    },
    PeriodDefinition {
        priority: MILLIS_IN_WEEK + 5,
        get: ops::week_of_year_get,
        next: ops::week_of_year_next,
        domain: Some((0, 53)),
    },
    PeriodDefinition {
        priority: MILLIS_IN_WEEK + 4,
        get: ops::week_of_year_full_get,
        next: ops::week_of_year_full_next,
        domain: Some((0, 53)),
    },
    PeriodDefinition {
        priority: MILLIS_IN_WEEK + 3,
        get: ops::week_of_year_from_first_get,
        next: ops::week_of_year_from_first_next,
        domain: Some((1, 53)),
    },
    PeriodDefinition {
        priority: MILLIS_IN_WEEK + 2,
        get: ops::week_of_month_get,
        next: ops::week_of_month_next,
        domain: Some((0, 6)),
    },
    PeriodDefinition {
        priority: MILLIS_IN_WEEK + 1,
        get: ops::week_of_month_full_get,
        next: ops::week_of_month_full_next,
        domain: Some((0, 6)),
    },
    PeriodDefinition {
        priority: MILLIS_IN_WEEK,
        get: ops::week_of_month_from_first_get,
        next: ops::week_of_month_from_first_next,
        domain: Some((1, 5)),
    },
    PeriodDefinition {
        priority: MILLIS_IN_DAY + 3,
        get: ops::day_of_year_get,
        next: ops::day_of_year_next,
        domain: Some((1, 366)),
    },
    PeriodDefinition {
        priority: MILLIS_IN_DAY + 2,
        get: ops::day_of_week_get,
        next: ops::day_of_week_next,
        domain: Some((0, 6)),
    },
    PeriodDefinition {
        priority: MILLIS_IN_DAY + 1,
        get: ops::day_of_month_get,
        next: ops::day_of_month_next,
        domain: Some((1, 31)),
    },
    PeriodDefinition {
        priority: MILLIS_IN_DAY,
        get: ops::day_of_month_from_end_get,
        next: ops::day_of_month_from_end_next,
        domain: Some((1, 31)),
    },
    PeriodDefinition {
        priority: MILLIS_IN_HOUR,
        get: ops::hour_get,
        next: ops::hour_next,
        domain: Some((0, 23)),
    },
    PeriodDefinition {
        priority: MILLIS_IN_MINUTE,
        get: ops::minute_get,
        next: ops::minute_next,
        domain: Some((0, 59)),
    },
    PeriodDefinition {
        priority: MILLIS_IN_SECOND,
        get: ops::second_get,
        next: ops::second_next,
        domain: Some((0, 59)),
    },
    PeriodDefinition {
        priority: 1,
        get: ops::millisecond_get,
        next: ops::millisecond_next,
        domain: Some((0, 999)),
    },
];

impl Period {
    /// Every period, coarsest first.
    pub const ALL: [Self; 19] = [
        Self::Century,
        Self::Decade,
        Self::Year,
        Self::Quarter,
        Self::Month,
        Self::WeekOfYear,
        Self::WeekOfYearFull,
        Self::WeekOfYearFromFirst,
        Self::WeekOfMonth,
        Self::WeekOfMonthFull,
        Self::WeekOfMonthFromFirst,
        Self::DayOfYear,
        Self::DayOfWeek,
        Self::DayOfMonth,
        Self::DayOfMonthFromEnd,
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::Millisecond,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Century => "century",
            Self::Decade => "decade",
            Self::Year => "year",
            Self::Quarter => "quarter",
            Self::Month => "month",
            Self::WeekOfYear => "weekOfYear",
            Self::WeekOfYearFull => "weekOfYearFull",
            Self::WeekOfYearFromFirst => "weekOfYearFromFirst",
            Self::WeekOfMonth => "weekOfMonth",
            Self::WeekOfMonthFull => "weekOfMonthFull",
            Self::WeekOfMonthFromFirst => "weekOfMonthFromFirst",
            Self::DayOfYear => "dayOfYear",
            Self::DayOfWeek => "dayOfWeek",
            Self::DayOfMonth => "dayOfMonth",
            Self::DayOfMonthFromEnd => "dayOfMonthFromEnd",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Millisecond => "millisecond",
        }
    }

    #[must_use]
    pub fn definition(self) -> &'static PeriodDefinition {
        &DEFINITIONS[self as usize]
    }

    #[must_use]
    pub fn priority(self) -> i64 {
        self.definition().priority
    }

    /// Current value of this field in `instant`.
    #[must_use]
    pub fn get(self, instant: NaiveDateTime, options: CalendarOptions) -> i32 {
        (self.definition().get)(instant, options)
    }

    /// ## Summary
    /// Returns the next instant after `instant` at which this field equals
    /// `value`, with all finer fields at their minimum.
    ///
    /// Cyclic fields always move forward; a `value` equal to the current one
    /// moves a whole cycle. Absolute fields (century, decade, year) jump
    /// straight to the start of `value`, which can be earlier than `instant`.
    /// When the calendar cannot represent the result, `instant` is returned
    /// unchanged.
    #[must_use]
    pub fn next(self, instant: NaiveDateTime, value: i32, options: CalendarOptions) -> NaiveDateTime {
        (self.definition().next)(instant, value, options)
    }

    /// Natural values of this field, if it is cyclic.
    #[must_use]
    pub fn domain(self) -> Option<RangeInclusive<i32>> {
        self.definition().domain.map(|(min, max)| min..=max)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Period {
    type Err = RuleError;

    /// Accepts the camelCase names (`dayOfWeek`) as well as snake_case
    /// (`day_of_week`), ignoring case.
    fn from_str(s: &str) -> RuleResult<Self> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect();

        Self::ALL
            .into_iter()
            .find(|period| period.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| RuleError::UnknownPeriod(s.to_string()))
    }
}
