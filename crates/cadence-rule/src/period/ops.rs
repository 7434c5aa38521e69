//! Field accessors and forward moves behind the period table.

use cadence_core::constants::{
    DAYS_IN_WEEK, HOURS_IN_DAY, MILLIS_IN_HOUR, MILLIS_IN_MINUTE, MILLIS_IN_SECOND,
    MINUTES_IN_HOUR, MONTHS_IN_QUARTER, MONTHS_IN_YEAR, QUARTERS_IN_YEAR, SECONDS_IN_MINUTE,
    YEARS_IN_CENTURY, YEARS_IN_DECADE,
};
use cadence_core::options::CalendarOptions;
use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use crate::calendar::{
    WeekNumbering, WeekScope, day_of_year, days_in_month, signed, weekday_number,
};

/// Years searched for a day-of-year that only exists in leap years.
const DAY_OF_YEAR_HORIZON: usize = 8;
/// Months searched for a day that only exists in longer months.
const DAY_OF_MONTH_HORIZON: usize = 12;
/// Years searched for a week number (week 53 is rare).
const WEEK_OF_YEAR_HORIZON: usize = 28;
/// Months searched for a week number (week 5 and 6 depend on the layout).
const WEEK_OF_MONTH_HORIZON: usize = 24;

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Strictly positive forward distance from `current` to `target` on a cycle
/// of `cycle` units. Targets outside the cycle are taken modulo the cycle.
fn cyclic_distance(current: i32, target: i32, cycle: i64) -> i64 {
    match (i64::from(target) - i64::from(current)).rem_euclid(cycle) {
        0 => cycle,
        distance => distance,
    }
}

fn year_start(year: i64) -> Option<NaiveDateTime> {
    let year = i32::try_from(year).ok()?;
    NaiveDate::from_ymd_opt(year, 1, 1).map(start_of_day)
}

/// Months since year 0 for the first day of the month of `instant`.
fn month_index(instant: NaiveDateTime) -> i64 {
    i64::from(instant.year()) * i64::from(MONTHS_IN_YEAR) + i64::from(instant.month0())
}

fn month_start(index: i64) -> Option<NaiveDateTime> {
    let months = i64::from(MONTHS_IN_YEAR);
    let year = i32::try_from(index.div_euclid(months)).ok()?;
    let month = u32::try_from(index.rem_euclid(months)).ok()? + 1;
    NaiveDate::from_ymd_opt(year, month, 1).map(start_of_day)
}

pub(super) fn century_get(instant: NaiveDateTime, _options: CalendarOptions) -> i32 {
    (instant.year() + YEARS_IN_CENTURY - 1).div_euclid(YEARS_IN_CENTURY)
}

pub(super) fn century_next(
    instant: NaiveDateTime,
    value: i32,
    _options: CalendarOptions,
) -> NaiveDateTime {
    let first_year =
        i64::from(value) * i64::from(YEARS_IN_CENTURY) - i64::from(YEARS_IN_CENTURY - 1);
    year_start(first_year).unwrap_or(instant)
}

pub(super) fn decade_get(instant: NaiveDateTime, _options: CalendarOptions) -> i32 {
    instant.year().div_euclid(YEARS_IN_DECADE)
}

pub(super) fn decade_next(
    instant: NaiveDateTime,
    value: i32,
    _options: CalendarOptions,
) -> NaiveDateTime {
    year_start(i64::from(value) * i64::from(YEARS_IN_DECADE)).unwrap_or(instant)
}

pub(super) fn year_get(instant: NaiveDateTime, _options: CalendarOptions) -> i32 {
    instant.year()
}

pub(super) fn year_next(
    instant: NaiveDateTime,
    value: i32,
    _options: CalendarOptions,
) -> NaiveDateTime {
    year_start(i64::from(value)).unwrap_or(instant)
}

pub(super) fn quarter_get(instant: NaiveDateTime, _options: CalendarOptions) -> i32 {
    signed(instant.month0()) / MONTHS_IN_QUARTER
}

pub(super) fn quarter_next(
    instant: NaiveDateTime,
    value: i32,
    options: CalendarOptions,
) -> NaiveDateTime {
    let quarter = quarter_get(instant, options);
    let quarter_start = i64::from(instant.year()) * i64::from(MONTHS_IN_YEAR)
        + i64::from(quarter * MONTHS_IN_QUARTER);
    let distance = cyclic_distance(quarter, value, i64::from(QUARTERS_IN_YEAR));

    month_start(quarter_start + distance * i64::from(MONTHS_IN_QUARTER)).unwrap_or(instant)
}

pub(super) fn month_get(instant: NaiveDateTime, _options: CalendarOptions) -> i32 {
    signed(instant.month0())
}

pub(super) fn month_next(
    instant: NaiveDateTime,
    value: i32,
    _options: CalendarOptions,
) -> NaiveDateTime {
    let distance = cyclic_distance(signed(instant.month0()), value, i64::from(MONTHS_IN_YEAR));
    month_start(month_index(instant) + distance).unwrap_or(instant)
}

/// Moves to the first day of week `target`: in the current period when that
/// week is still ahead, otherwise in the first following period that has it.
fn advance_to_week(
    instant: NaiveDateTime,
    target: i32,
    scope: WeekScope,
    numbering: WeekNumbering,
    options: CalendarOptions,
) -> NaiveDateTime {
    let date = instant.date();
    let mut start = scope.start_of(date);

    if target > scope.week_of(date, numbering, options) {
        if let Some(day) = scope.week_start(start, target, numbering, options) {
            return start_of_day(day);
        }
    }

    let Some(first_following) = scope.following(start) else {
        return instant;
    };

    let horizon = match scope {
        WeekScope::Year => WEEK_OF_YEAR_HORIZON,
        WeekScope::Month => WEEK_OF_MONTH_HORIZON,
    };

    for _ in 0..horizon {
        let Some(following) = scope.following(start) else {
            break;
        };
        start = following;

        if let Some(day) = scope.week_start(start, target, numbering, options) {
            return start_of_day(day);
        }
    }

    start_of_day(first_following)
}

macro_rules! week_period {
    ($get:ident, $next:ident, $scope:expr, $numbering:expr) => {
        pub(super) fn $get(instant: NaiveDateTime, options: CalendarOptions) -> i32 {
            $scope.week_of(instant.date(), $numbering, options)
        }

        pub(super) fn $next(
            instant: NaiveDateTime,
            value: i32,
            options: CalendarOptions,
        ) -> NaiveDateTime {
            advance_to_week(instant, value, $scope, $numbering, options)
        }
    };
}

week_period!(
    week_of_year_get,
    week_of_year_next,
    WeekScope::Year,
    WeekNumbering::Majority
);
week_period!(
    week_of_year_full_get,
    week_of_year_full_next,
    WeekScope::Year,
    WeekNumbering::Full
);
week_period!(
    week_of_year_from_first_get,
    week_of_year_from_first_next,
    WeekScope::Year,
    WeekNumbering::FromFirst
);
week_period!(
    week_of_month_get,
    week_of_month_next,
    WeekScope::Month,
    WeekNumbering::Majority
);
week_period!(
    week_of_month_full_get,
    week_of_month_full_next,
    WeekScope::Month,
    WeekNumbering::Full
);
week_period!(
    week_of_month_from_first_get,
    week_of_month_from_first_next,
    WeekScope::Month,
    WeekNumbering::FromFirst
);

pub(super) fn day_of_year_get(instant: NaiveDateTime, _options: CalendarOptions) -> i32 {
    signed(day_of_year(instant.date()))
}

pub(super) fn day_of_year_next(
    instant: NaiveDateTime,
    value: i32,
    _options: CalendarOptions,
) -> NaiveDateTime {
    let date = instant.date();
    let target = u32::try_from(value).ok();

    if value > signed(day_of_year(date)) {
        if let Some(day) = target.and_then(|ordinal| date.with_ordinal(ordinal)) {
            return start_of_day(day);
        }
    }

    let mut year = date.year();
    for _ in 0..DAY_OF_YEAR_HORIZON {
        year += 1;
        let Some(first) = NaiveDate::from_yo_opt(year, 1) else {
            return instant;
        };

        if let Some(day) = target.and_then(|ordinal| first.with_ordinal(ordinal)) {
            return start_of_day(day);
        }
    }

    year_start(i64::from(date.year()) + 1).unwrap_or(instant)
}

pub(super) fn day_of_week_get(instant: NaiveDateTime, _options: CalendarOptions) -> i32 {
    weekday_number(instant.date())
}

pub(super) fn day_of_week_next(
    instant: NaiveDateTime,
    value: i32,
    _options: CalendarOptions,
) -> NaiveDateTime {
    let date = instant.date();
    let distance = cyclic_distance(weekday_number(date), value, i64::from(DAYS_IN_WEEK));

    u64::try_from(distance)
        .ok()
        .and_then(|days| date.checked_add_days(Days::new(days)))
        .map_or(instant, start_of_day)
}

/// Scans the current month (when `in_current` accepts the candidate day) and
/// then the following months for the first month where `day_in` yields a day.
fn advance_to_day_of_month(
    instant: NaiveDateTime,
    day_in: impl Fn(NaiveDate) -> Option<NaiveDate>,
) -> NaiveDateTime {
    let date = instant.date();
    let mut month = WeekScope::Month.start_of(date);

    if let Some(day) = day_in(month).filter(|day| *day > date) {
        return start_of_day(day);
    }

    let Some(first_following) = month.checked_add_months(Months::new(1)) else {
        return instant;
    };

    for _ in 0..DAY_OF_MONTH_HORIZON {
        let Some(following) = month.checked_add_months(Months::new(1)) else {
            break;
        };
        month = following;

        if let Some(day) = day_in(month) {
            return start_of_day(day);
        }
    }

    start_of_day(first_following)
}

pub(super) fn day_of_month_get(instant: NaiveDateTime, _options: CalendarOptions) -> i32 {
    signed(instant.day())
}

pub(super) fn day_of_month_next(
    instant: NaiveDateTime,
    value: i32,
    _options: CalendarOptions,
) -> NaiveDateTime {
    let target = u32::try_from(value).ok();

    advance_to_day_of_month(instant, |month| target.and_then(|day| month.with_day(day)))
}

pub(super) fn day_of_month_from_end_get(
    instant: NaiveDateTime,
    _options: CalendarOptions,
) -> i32 {
    let length = signed(days_in_month(instant.year(), instant.month0()));
    length - signed(instant.day()) + 1
}

pub(super) fn day_of_month_from_end_next(
    instant: NaiveDateTime,
    value: i32,
    _options: CalendarOptions,
) -> NaiveDateTime {
    advance_to_day_of_month(instant, |month| {
        let length = signed(days_in_month(month.year(), month.month0()));
        let day = length.checked_sub(value)?.checked_add(1)?;
        month.with_day(u32::try_from(day).ok()?)
    })
}

/// Moves `floor` (the instant truncated to the unit) forward by a cyclic
/// distance of whole units.
fn advance_time(
    instant: NaiveDateTime,
    floor: Option<NaiveDateTime>,
    unit_millis: i64,
    distance: i64,
) -> NaiveDateTime {
    floor
        .and_then(|floor| floor.checked_add_signed(TimeDelta::milliseconds(distance * unit_millis)))
        .unwrap_or(instant)
}

pub(super) fn hour_get(instant: NaiveDateTime, _options: CalendarOptions) -> i32 {
    signed(instant.hour())
}

pub(super) fn hour_next(
    instant: NaiveDateTime,
    value: i32,
    _options: CalendarOptions,
) -> NaiveDateTime {
    let floor = instant.date().and_hms_opt(instant.hour(), 0, 0);
    let distance = cyclic_distance(signed(instant.hour()), value, HOURS_IN_DAY);

    advance_time(instant, floor, MILLIS_IN_HOUR, distance)
}

pub(super) fn minute_get(instant: NaiveDateTime, _options: CalendarOptions) -> i32 {
    signed(instant.minute())
}

pub(super) fn minute_next(
    instant: NaiveDateTime,
    value: i32,
    _options: CalendarOptions,
) -> NaiveDateTime {
    let floor = instant
        .date()
        .and_hms_opt(instant.hour(), instant.minute(), 0);
    let distance = cyclic_distance(signed(instant.minute()), value, MINUTES_IN_HOUR);

    advance_time(instant, floor, MILLIS_IN_MINUTE, distance)
}

pub(super) fn second_get(instant: NaiveDateTime, _options: CalendarOptions) -> i32 {
    signed(instant.second())
}

pub(super) fn second_next(
    instant: NaiveDateTime,
    value: i32,
    _options: CalendarOptions,
) -> NaiveDateTime {
    let floor = instant
        .date()
        .and_hms_opt(instant.hour(), instant.minute(), instant.second());
    let distance = cyclic_distance(signed(instant.second()), value, SECONDS_IN_MINUTE);

    advance_time(instant, floor, MILLIS_IN_SECOND, distance)
}

pub(super) fn millisecond_get(instant: NaiveDateTime, _options: CalendarOptions) -> i32 {
    signed(instant.nanosecond() / 1_000_000)
}

pub(super) fn millisecond_next(
    instant: NaiveDateTime,
    value: i32,
    options: CalendarOptions,
) -> NaiveDateTime {
    let millisecond = millisecond_get(instant, options);
    let floor = u32::try_from(millisecond).ok().and_then(|milli| {
        instant
            .date()
            .and_hms_milli_opt(instant.hour(), instant.minute(), instant.second(), milli)
    });
    let distance = cyclic_distance(millisecond, value, MILLIS_IN_SECOND);

    advance_time(instant, floor, 1, distance)
}
