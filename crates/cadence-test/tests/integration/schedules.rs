//! End-to-end schedules built from rule text.

use chrono::{Datelike, Weekday};

use super::helpers::*;

/// ## Summary
/// Workday mornings across a whole year: every weekday at 09:00, nothing on
/// weekends, nothing skipped.
#[test_log::test]
fn workday_mornings_for_a_year() {
    let schedule = schedule(&["hour=9;minute=0"], &["day_of_week=SAT,SUN"]);
    let end = day(2025, 1, 1);

    let found: Vec<_> = schedule
        .occurrences(day(2024, 1, 1), DEFAULT_MAX_TRIES)
        .take_while(|instant| *instant < end)
        .collect();

    let mut expected = Vec::new();
    let mut date = day(2024, 1, 1).date();
    while date < end.date() {
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            expected.push(date.and_hms_opt(9, 0, 0).unwrap());
        }
        date = date.succ_opt().unwrap();
    }

    assert_eq!(found, expected);
}

#[test]
fn month_end_reports() {
    let schedule = schedule(&["day_of_month_from_end=1;hour=17"], &[]);

    assert_eq!(
        take(&schedule, day(2024, 1, 1), 4),
        vec![
            at(2024, 1, 31, 17, 0),
            at(2024, 2, 29, 17, 0),
            at(2024, 3, 31, 17, 0),
            at(2024, 4, 30, 17, 0),
        ]
    );
}

#[test]
fn quarter_starts() {
    let schedule = schedule(&["month=*/3;day_of_month=1"], &[]);

    assert_eq!(
        take(&schedule, day(2023, 11, 15), 5),
        vec![
            day(2024, 1, 1),
            day(2024, 4, 1),
            day(2024, 7, 1),
            day(2024, 10, 1),
            day(2025, 1, 1),
        ]
    );
}

#[test]
fn business_hours_with_a_lunch_break() {
    let schedule = schedule(
        &["day_of_week=MON-FRI;hour=9-16;minute=0,30"],
        &["hour=12"],
    );

    // 2024-01-05 is a Friday
    assert_eq!(
        take(&schedule, at(2024, 1, 5, 11, 0), 4),
        vec![
            at(2024, 1, 5, 11, 30),
            at(2024, 1, 5, 13, 0),
            at(2024, 1, 5, 13, 30),
            at(2024, 1, 5, 14, 0),
        ]
    );
    assert_eq!(
        take(&schedule, at(2024, 1, 5, 16, 30), 1),
        vec![at(2024, 1, 8, 9, 0)]
    );
}

#[test]
fn union_with_overlapping_exclusions() {
    let schedule = schedule(
        &["day_of_week=MON;hour=8", "day_of_week=THU;hour=14"],
        &["month=DEC;day_of_month=24-31", "month=JAN;day_of_month=1"],
    );

    // 2024-12-23 is a Monday
    assert_eq!(
        take(&schedule, at(2024, 12, 23, 9, 0), 3),
        vec![at(2025, 1, 2, 14, 0), at(2025, 1, 6, 8, 0), at(2025, 1, 9, 14, 0)]
    );
}

#[test]
fn leap_day_only() {
    let schedule = schedule(&["month=FEB;day_of_month=29"], &[]);

    assert_eq!(
        take(&schedule, day(2023, 1, 1), 3),
        vec![day(2024, 2, 29), day(2028, 2, 29), day(2032, 2, 29)]
    );
}

#[test]
fn impossible_schedule_is_empty() {
    let schedule = schedule(&["month=FEB;day_of_month=30"], &[]);

    assert_eq!(take(&schedule, day(2024, 1, 1), 1), Vec::new());
}
