//! Recurrence rules over calendar fields.
//!
//! A [`Pattern`] binds a [`Frequency`] to each [`Period`] it cares about and can
//! test an instant or search forward for the next matching one. A [`Schedule`]
//! combines include and exclude patterns.

pub mod calendar;
pub mod error;
pub mod frequency;
pub mod pattern;
pub mod period;
pub mod schedule;

pub use cadence_core::constants::DEFAULT_MAX_TRIES;
pub use cadence_core::options::{CalendarOptions, DEFAULT_OPTIONS};
pub use error::{RuleError, RuleResult};
pub use frequency::{Frequency, FrequencyInput};
pub use pattern::{Pattern, PatternInput};
pub use period::Period;
pub use schedule::{Occurrences, Schedule, ScheduleInput};
