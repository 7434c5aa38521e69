//! Differential checks: equivalent rules expanded by the `rrule` crate must
//! produce the same occurrences as a cadence schedule.

use cadence_test::options::CalendarOptions;
use cadence_test::{Schedule, ScheduleInput};
use chrono::{NaiveDateTime, TimeZone};
use rrule::{RRule, Tz, Unvalidated};

use super::helpers::*;

struct Case {
    name: &'static str,
    rrule: &'static str,
    on: &'static str,
    not: &'static [&'static str],
    /// Must be an occurrence of both rules: `rrule` always yields its start.
    start: NaiveDateTime,
    options: CalendarOptions,
    count: u16,
}

fn cases() -> Vec<Case> {
    let sunday_start = CalendarOptions::default();
    let iso = CalendarOptions::new(1, 4).unwrap();

    vec![
        Case {
            name: "daily at nine",
            rrule: "FREQ=DAILY;BYHOUR=9;BYMINUTE=0;BYSECOND=0",
            on: "hour=9;minute=0",
            not: &[],
            start: at(2024, 1, 1, 9, 0),
            options: sunday_start,
            count: 40,
        },
        Case {
            name: "weekdays at nine",
            rrule: "FREQ=DAILY;BYDAY=MO,TU,WE,TH,FR;BYHOUR=9;BYMINUTE=0;BYSECOND=0",
            on: "hour=9;minute=0",
            not: &["day_of_week=SAT,SUN"],
            start: at(2024, 1, 1, 9, 0),
            options: sunday_start,
            count: 60,
        },
        Case {
            name: "monday wednesday friday",
            rrule: "FREQ=WEEKLY;BYDAY=MO,WE,FR;BYHOUR=8;BYMINUTE=30;BYSECOND=0",
            on: "day_of_week=MON,WED,FRI;hour=8;minute=30",
            not: &[],
            start: at(2024, 1, 1, 8, 30),
            options: sunday_start,
            count: 30,
        },
        Case {
            name: "last day of the month",
            rrule: "FREQ=MONTHLY;BYMONTHDAY=-1;BYHOUR=0;BYMINUTE=0;BYSECOND=0",
            on: "day_of_month_from_end=1",
            not: &[],
            start: day(2024, 1, 31),
            options: sunday_start,
            count: 24,
        },
        Case {
            name: "quarter starts",
            rrule: "FREQ=MONTHLY;BYMONTH=1,4,7,10;BYMONTHDAY=1;BYHOUR=0;BYMINUTE=0;BYSECOND=0",
            on: "month=*/3;day_of_month=1",
            not: &[],
            start: day(2024, 1, 1),
            options: sunday_start,
            count: 12,
        },
        Case {
            name: "leap days",
            rrule: "FREQ=YEARLY;BYMONTH=2;BYMONTHDAY=29;BYHOUR=12;BYMINUTE=0;BYSECOND=0",
            on: "month=FEB;day_of_month=29;hour=12;minute=0",
            not: &[],
            start: at(2024, 2, 29, 12, 0),
            options: sunday_start,
            count: 4,
        },
        Case {
            name: "quarter hours in the morning",
            rrule: "FREQ=MINUTELY;INTERVAL=15;BYHOUR=10,11;BYSECOND=0",
            on: "hour=10,11;minute=*/15",
            not: &[],
            start: at(2024, 3, 1, 10, 0),
            options: sunday_start,
            count: 24,
        },
        Case {
            name: "monday of iso week two",
            rrule: "FREQ=YEARLY;BYWEEKNO=2;BYDAY=MO;BYHOUR=0;BYMINUTE=0;BYSECOND=0",
            on: "week_of_year=2;day_of_week=MON",
            not: &[],
            start: day(2024, 1, 8),
            options: iso,
            count: 6,
        },
    ]
}

fn expand_rrule(case: &Case) -> Vec<NaiveDateTime> {
    let rule: RRule<Unvalidated> = case.rrule.parse().unwrap();
    let set = rule.build(Tz::UTC.from_utc_datetime(&case.start)).unwrap();

    set.all(case.count)
        .dates
        .into_iter()
        .map(|date| date.naive_utc())
        .collect()
}

fn expand_schedule(case: &Case) -> Vec<NaiveDateTime> {
    let schedule = Schedule::with_options(
        ScheduleInput::Rules {
            on: vec![rule(case.on)],
            not: case.not.iter().map(|text| rule(text)).collect(),
        },
        case.options,
    )
    .unwrap();

    assert!(schedule.matches(case.start), "{}: start is not on the schedule", case.name);

    std::iter::once(case.start)
        .chain(take(&schedule, case.start, usize::from(case.count) - 1))
        .collect()
}

/// ## Summary
/// Every case must agree occurrence by occurrence with `rrule`.
#[test_log::test]
fn agrees_with_rrule() {
    for case in cases() {
        let expected = expand_rrule(&case);
        assert_eq!(expected.len(), usize::from(case.count), "{}", case.name);
        assert_eq!(expand_schedule(&case), expected, "{}", case.name);
    }
}
