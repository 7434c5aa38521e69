//! Calendar unit constants and the weekday/month alias tables used by the
//! textual frequency grammar.

/// Name used for the binary, the config file and the environment prefix.
pub const APP_NAME: &str = "cadence";
pub const CONFIG_FILE: &str = const_str::concat!(APP_NAME, ".toml");
pub const ENV_PREFIX: &str = "CADENCE";

/// Search budget used when the caller does not give one.
pub const DEFAULT_MAX_TRIES: usize = 100;

pub const MILLIS_IN_SECOND: i64 = 1000;
pub const SECONDS_IN_MINUTE: i64 = 60;
pub const MINUTES_IN_HOUR: i64 = 60;
/// Not counting DST days; the engine works on naive local time.
pub const HOURS_IN_DAY: i64 = 24;
pub const DAYS_IN_WEEK: i32 = 7;
pub const MONTHS_IN_QUARTER: i32 = 3;
pub const QUARTERS_IN_YEAR: i32 = 4;
pub const MONTHS_IN_YEAR: i32 = 12;
pub const YEARS_IN_DECADE: i32 = 10;
pub const YEARS_IN_CENTURY: i32 = 100;
pub const DAYS_IN_YEAR_MIN: u32 = 365;
pub const DAYS_IN_YEAR_MAX: u32 = 366;

pub const MILLIS_IN_MINUTE: i64 = MILLIS_IN_SECOND * SECONDS_IN_MINUTE;
pub const MILLIS_IN_HOUR: i64 = MILLIS_IN_MINUTE * MINUTES_IN_HOUR;
pub const MILLIS_IN_DAY: i64 = MILLIS_IN_HOUR * HOURS_IN_DAY;
pub const MILLIS_IN_WEEK: i64 = MILLIS_IN_DAY * DAYS_IN_WEEK as i64;

/// Day-of-week values (`0` = Sunday), as returned by the `dayOfWeek` period.
pub mod weekday {
    pub const SUNDAY: i32 = 0;
    pub const MONDAY: i32 = 1;
    pub const TUESDAY: i32 = 2;
    pub const WEDNESDAY: i32 = 3;
    pub const THURSDAY: i32 = 4;
    pub const FRIDAY: i32 = 5;
    pub const SATURDAY: i32 = 6;

    pub const ALL: [i32; 7] = [
        SUNDAY, MONDAY, TUESDAY, WEDNESDAY, THURSDAY, FRIDAY, SATURDAY,
    ];

    /// Upper-case names accepted by expressions on the `dayOfWeek` period.
    pub const ALIASES: &[(&str, i32)] = &[
        ("SUN", SUNDAY),
        ("SUNDAY", SUNDAY),
        ("MON", MONDAY),
        ("MONDAY", MONDAY),
        ("TUE", TUESDAY),
        ("TUES", TUESDAY),
        ("TUESDAY", TUESDAY),
        ("WED", WEDNESDAY),
        ("WEDNESDAY", WEDNESDAY),
        ("THU", THURSDAY),
        ("THUR", THURSDAY),
        ("THURS", THURSDAY),
        ("THURSDAY", THURSDAY),
        ("FRI", FRIDAY),
        ("FRIDAY", FRIDAY),
        ("SAT", SATURDAY),
        ("SATURDAY", SATURDAY),
    ];
}

/// Month values (`0` = January), as returned by the `month` period.
pub mod month {
    pub const JANUARY: i32 = 0;
    pub const FEBRUARY: i32 = 1;
    pub const MARCH: i32 = 2;
    pub const APRIL: i32 = 3;
    pub const MAY: i32 = 4;
    pub const JUNE: i32 = 5;
    pub const JULY: i32 = 6;
    pub const AUGUST: i32 = 7;
    pub const SEPTEMBER: i32 = 8;
    pub const OCTOBER: i32 = 9;
    pub const NOVEMBER: i32 = 10;
    pub const DECEMBER: i32 = 11;

    /// Upper-case names accepted by expressions on the `month` period.
    pub const ALIASES: &[(&str, i32)] = &[
        ("JAN", JANUARY),
        ("JANUARY", JANUARY),
        ("FEB", FEBRUARY),
        ("FEBRUARY", FEBRUARY),
        ("MAR", MARCH),
        ("MARCH", MARCH),
        ("APR", APRIL),
        ("APRIL", APRIL),
        ("MAY", MAY),
        ("JUN", JUNE),
        ("JUNE", JUNE),
        ("JUL", JULY),
        ("JULY", JULY),
        ("AUG", AUGUST),
        ("AUGUST", AUGUST),
        ("SEP", SEPTEMBER),
        ("SEPT", SEPTEMBER),
        ("SEPTEMBER", SEPTEMBER),
        ("OCT", OCTOBER),
        ("OCTOBER", OCTOBER),
        ("NOV", NOVEMBER),
        ("NOVEMBER", NOVEMBER),
        ("DEC", DECEMBER),
        ("DECEMBER", DECEMBER),
    ];
}
