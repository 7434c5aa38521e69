//! The command layer of the `cadence` binary, driven with loaded settings.

use cadence_app::cli::RuleArgs;
use cadence_test::app::{build_schedule, is_on_schedule, occurrences, parse_instant, render};
use cadence_test::config::Settings;

use super::helpers::*;

fn rules(on: &[&str], not: &[&str]) -> RuleArgs {
    RuleArgs {
        on: on.iter().map(|text| rule(text)).collect(),
        not: not.iter().map(|text| rule(text)).collect(),
    }
}

fn settings_file(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("cadence-it-{}-{name}.toml", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test_log::test]
fn configured_week_start_changes_results() {
    let path = settings_file(
        "monday",
        "[calendar]\nweek_starts_on = 1\nfirst_week_contains_date = 4\n\n[search]\ncount = 3\n",
    );
    let settings = Settings::load_from(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(settings.search.count, 3);
    assert_eq!(settings.search.max_tries, DEFAULT_MAX_TRIES);

    let schedule = build_schedule(&rules(&["week_of_year_full=1;day_of_week=MON"], &[]), &settings)
        .unwrap();
    let found = occurrences(
        &schedule,
        parse_instant("2023-06-01").unwrap(),
        settings.search.count,
        settings.search.max_tries,
    );

    // Monday-start years that begin on a Monday have their first Monday in week 1
    assert_eq!(found[0], day(2024, 1, 1));
    assert!(found.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn renders_next_occurrences() {
    let path = settings_file("defaults", "");
    let settings = Settings::load_from(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let schedule = build_schedule(
        &rules(&["hour=9;minute=0"], &["day_of_week=SAT,SUN"]),
        &settings,
    )
    .unwrap();
    let found = occurrences(&schedule, parse_instant("2024-01-05 10:00").unwrap(), 2, 100);

    assert_eq!(
        render(&found, false).unwrap(),
        "2024-01-08T09:00:00.000\n2024-01-09T09:00:00.000"
    );
}

#[test]
fn checks_membership() {
    let path = settings_file("membership", "");
    let settings = Settings::load_from(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let schedule = build_schedule(&rules(&["hour=9-17"], &["day_of_week=SUN"]), &settings).unwrap();

    // 2024-01-07 is a Sunday
    assert!(is_on_schedule(&schedule, at(2024, 1, 8, 12, 0)));
    assert!(!is_on_schedule(&schedule, at(2024, 1, 7, 12, 0)));
}
