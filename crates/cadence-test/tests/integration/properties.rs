//! Search properties checked against brute force, over whole minutes for
//! time-of-day rules and over whole days for calendar rules.

use cadence_test::{CalendarOptions, Pattern, PatternInput};
use chrono::{Days, NaiveDateTime, TimeDelta};

use super::helpers::*;

/// Rules bound down to the minute, so minute steps visit every candidate.
const RULES: &[&str] = &[
    "hour=9-17;minute=*/20",
    "day_of_week=TUE,THU;hour=6;minute=15",
    "hour=*/6;minute=0",
    "day_of_month=1,15;hour=0-1;minute=45",
    "day_of_week=SAT,SUN;minute=0,30",
];

const STARTS: &[(i32, u32, u32, u32, u32)] = &[
    (2024, 1, 1, 0, 0),
    (2024, 2, 28, 23, 59),
    (2024, 6, 15, 9, 40),
    (2024, 12, 31, 17, 45),
];

/// Brute-force search window.
const WINDOW_MINUTES: i64 = 20 * 24 * 60;

fn patterns() -> Vec<Pattern> {
    RULES
        .iter()
        .map(|text| Pattern::new(&rule(text)).unwrap())
        .collect()
}

fn starts() -> impl Iterator<Item = NaiveDateTime> {
    STARTS.iter().map(|&(y, m, d, h, min)| at(y, m, d, h, min))
}

fn minutes_after(start: NaiveDateTime) -> impl Iterator<Item = NaiveDateTime> {
    (1..=WINDOW_MINUTES).map(move |step| start + TimeDelta::minutes(step))
}

#[test]
fn matching_is_idempotent() {
    for pattern in patterns() {
        for start in starts() {
            assert_eq!(pattern.matches(start), pattern.matches(start));
        }
    }
}

#[test_log::test]
fn next_is_the_first_later_match() {
    for (text, pattern) in RULES.iter().zip(patterns()) {
        for start in starts() {
            let expected = minutes_after(start).find(|instant| pattern.matches(*instant));
            assert_eq!(
                pattern.next(start, DEFAULT_MAX_TRIES),
                expected,
                "{text} from {start}"
            );
        }
    }
}

#[test]
fn successive_searches_increase() {
    for pattern in patterns() {
        let mut current = day(2024, 3, 1);
        for _ in 0..50 {
            let found = pattern.next(current, DEFAULT_MAX_TRIES).unwrap();
            assert!(found > current);
            assert!(pattern.matches(found));
            current = found;
        }
    }
}

#[test_log::test]
fn after_is_the_first_later_non_match() {
    for (text, pattern) in RULES.iter().zip(patterns()) {
        for start in starts() {
            let Some(matching) = pattern.next(start, DEFAULT_MAX_TRIES) else {
                continue;
            };
            let expected = minutes_after(matching).find(|instant| !pattern.matches(*instant));

            let resumed = pattern.after(matching, DEFAULT_MAX_TRIES);
            assert_eq!(resumed, expected, "{text} leaving {matching}");
            assert!(resumed.is_some_and(|instant| instant > matching));
        }
    }
}

#[test]
fn after_keeps_non_matching_instants() {
    let pattern = Pattern::new(&PatternInput::new().with(cadence_test::Period::Hour, 3)).unwrap();
    let instant = at(2024, 5, 5, 4, 0);

    assert_eq!(pattern.after(instant, DEFAULT_MAX_TRIES), Some(instant));
}

#[test]
fn schedule_results_match_and_are_never_excluded() {
    let schedule = schedule(
        &["hour=8-18;minute=0", "day_of_week=SUN;hour=20;minute=30"],
        &["day_of_week=SAT", "hour=13"],
    );

    let found = take(&schedule, day(2024, 4, 1), 200);
    assert_eq!(found.len(), 200);

    for pair in found.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    for instant in &found {
        assert!(schedule.matches(*instant));
        assert!(!schedule.is_excluded(*instant));
    }
}

/// Rules on day and week fields whose values go missing from some months or
/// years, or run against time order.
const DAY_RULES: &[&str] = &[
    "day_of_month=15,31",
    "day_of_month=29-31",
    "day_of_year=60,366",
    "day_of_year=1-3,365",
    "day_of_month_from_end=1-3",
    "day_of_month_from_end=2,28",
    "week_of_year=1,53",
    "week_of_year=0,26",
    "week_of_year_full=0,52",
    "week_of_year_from_first=1,53",
    "week_of_month=0,5",
    "week_of_month_full=1,5",
    "week_of_month_from_first=5",
    "day_of_month_from_end=1-7;day_of_week=FRI",
    "week_of_month=2;day_of_week=MON-WED",
    "month=FEB;day_of_month=28,29",
];

/// Sunday start with the 4th in week 1, then Monday start with the 1st.
fn option_sets() -> [CalendarOptions; 2] {
    [
        CalendarOptions::default(),
        CalendarOptions::new(1, 1).unwrap(),
    ]
}

/// Brute-force search window, long enough to reach a leap day.
const WINDOW_DAYS: u64 = 5 * 366;

/// Mid-morning starts spread over several years, every 11 days.
fn day_starts() -> impl Iterator<Item = NaiveDateTime> {
    (0..130).map(|step| at(2020, 11, 3, 10, 30) + Days::new(step * 11))
}

fn days_after(start: NaiveDateTime) -> impl Iterator<Item = NaiveDateTime> {
    let midnight = start.date().and_time(chrono::NaiveTime::MIN);
    (1..=WINDOW_DAYS).map(move |step| midnight + Days::new(step))
}

#[test_log::test]
fn day_rules_find_the_first_later_day() {
    for options in option_sets() {
        for text in DAY_RULES {
            let pattern = Pattern::with_options(&rule(text), options).unwrap();

            for start in day_starts().filter(|start| !pattern.matches(*start)) {
                let expected = days_after(start).find(|instant| pattern.matches(*instant));
                assert_eq!(
                    pattern.next(start, DEFAULT_MAX_TRIES),
                    expected,
                    "{text} from {start} with {options:?}"
                );
            }
        }
    }
}

#[test_log::test]
fn day_rules_resume_on_the_first_later_day() {
    for options in option_sets() {
        for text in DAY_RULES {
            let pattern = Pattern::with_options(&rule(text), options).unwrap();

            for start in day_starts().filter(|start| !pattern.matches(*start)) {
                let Some(matching) = pattern.next(start, DEFAULT_MAX_TRIES) else {
                    continue;
                };
                let expected = days_after(matching).find(|instant| !pattern.matches(*instant));

                assert_eq!(
                    pattern.after(matching, DEFAULT_MAX_TRIES),
                    expected,
                    "{text} leaving {matching} with {options:?}"
                );
            }
        }
    }
}
