use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::str::FromStr;

use cadence_core::constants::{month, weekday};
use cadence_core::options::{CalendarOptions, DEFAULT_OPTIONS};
use chrono::{NaiveDateTime, TimeDelta};

use crate::error::{RuleError, RuleResult};
use crate::frequency::{Frequency, FrequencyInput};
use crate::period::Period;

/// How far an absolute field (century, decade, year) is scanned for a value
/// its frequency rejects.
const ABSOLUTE_EXIT_HORIZON: i32 = 1000;

/// Frequencies keyed by the period they constrain, before compilation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternInput {
    fields: BTreeMap<Period, FrequencyInput>,
}

impl PatternInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `input` to `period`, replacing any earlier binding.
    #[must_use]
    pub fn with(mut self, period: Period, input: impl Into<FrequencyInput>) -> Self {
        self.insert(period, input);
        self
    }

    pub fn insert(&mut self, period: Period, input: impl Into<FrequencyInput>) {
        self.fields.insert(period, input.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (Period, &FrequencyInput)> {
        self.fields.iter().map(|(period, input)| (*period, input))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<I: Into<FrequencyInput>> FromIterator<(Period, I)> for PatternInput {
    fn from_iter<T: IntoIterator<Item = (Period, I)>>(iter: T) -> Self {
        let mut input = Self::new();
        input.extend(iter);
        input
    }
}

impl<I: Into<FrequencyInput>> Extend<(Period, I)> for PatternInput {
    fn extend<T: IntoIterator<Item = (Period, I)>>(&mut self, iter: T) {
        for (period, value) in iter {
            self.insert(period, value);
        }
    }
}

impl FromStr for PatternInput {
    type Err = RuleError;

    /// Parses `field=expression` pairs separated by `;`, for example
    /// `day_of_week=MON-FRI;hour=9;minute=0`. Expressions stay textual and
    /// are compiled when the pattern is built.
    fn from_str(s: &str) -> RuleResult<Self> {
        s.split(';')
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (period, expression) = pair
                    .split_once('=')
                    .ok_or_else(|| RuleError::InvalidExpression(pair.to_string()))?;
                Ok((period.parse::<Period>()?, expression.trim().to_string()))
            })
            .collect()
    }
}

/// Alias table used for textual expressions of `period`: weekday names for
/// `dayOfWeek`, month names for `month`, none otherwise.
#[must_use]
pub fn default_aliases(period: Period) -> &'static [(&'static str, i32)] {
    match period {
        Period::DayOfWeek => weekday::ALIASES,
        Period::Month => month::ALIASES,
        _ => &[],
    }
}

/// A set of (period, frequency) bindings evaluated jointly.
///
/// Bindings are kept in descending priority, so the coarsest field is
/// corrected first during a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    bindings: Vec<(Period, Frequency)>,
    options: CalendarOptions,
}

impl Pattern {
    /// ## Summary
    /// Compiles `input` with the default calendar options.
    ///
    /// ## Errors
    /// Returns `RuleError::InvalidField` if any frequency fails to compile.
    pub fn new(input: &PatternInput) -> RuleResult<Self> {
        Self::with_options(input, DEFAULT_OPTIONS)
    }

    /// ## Summary
    /// Compiles `input` with explicit calendar options.
    ///
    /// ## Errors
    /// Returns `RuleError::InvalidField` if any frequency fails to compile.
    pub fn with_options(input: &PatternInput, options: CalendarOptions) -> RuleResult<Self> {
        Self::with_aliases(input, options, default_aliases)
    }

    /// ## Summary
    /// Compiles `input`, resolving the names in textual expressions with the
    /// table `aliases` returns for each period.
    ///
    /// ## Errors
    /// Returns `RuleError::InvalidField` naming the first period whose
    /// frequency fails to compile.
    pub fn with_aliases<'a>(
        input: &PatternInput,
        options: CalendarOptions,
        aliases: impl Fn(Period) -> &'a [(&'a str, i32)],
    ) -> RuleResult<Self> {
        let mut bindings = input
            .iter()
            .map(|(period, frequency)| {
                frequency
                    .compile(aliases(period))
                    .map(|compiled| (period, compiled))
                    .map_err(|source| RuleError::InvalidField {
                        period,
                        source: Box::new(source),
                    })
            })
            .collect::<RuleResult<Vec<_>>>()?;

        bindings.sort_by_key(|(period, _)| Reverse(period.priority()));

        tracing::debug!(
            periods = ?bindings.iter().map(|(period, _)| period.name()).collect::<Vec<_>>(),
            "Compiled pattern"
        );

        Ok(Self { bindings, options })
    }

    /// Bound periods, coarsest first.
    pub fn periods(&self) -> impl Iterator<Item = Period> + '_ {
        self.bindings.iter().map(|(period, _)| *period)
    }

    #[must_use]
    pub const fn options(&self) -> CalendarOptions {
        self.options
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Does every bound field of `instant` satisfy its frequency? An empty
    /// pattern matches everything.
    #[must_use]
    pub fn matches(&self, instant: NaiveDateTime) -> bool {
        self.bindings
            .iter()
            .all(|(period, frequency)| frequency.matches(period.get(instant, self.options)))
    }

    /// ## Summary
    /// Searches for the first matching instant strictly after `instant`.
    ///
    /// Each pass corrects every unsatisfied field, coarsest first, by moving it
    /// to the earliest later instant at which it holds a value its frequency
    /// accepts. Every instant skipped by such a move fails that field, so no
    /// match is passed over. At most `max_tries + 1` passes are made. Returns
    /// `None` when the budget runs out or when a field cannot move forward in
    /// time, which means no later instant matches.
    #[must_use]
    pub fn next(&self, instant: NaiveDateTime, max_tries: usize) -> Option<NaiveDateTime> {
        let mut current = instant;

        if self.matches(current) {
            current = self.step_past(current)?;
        }

        for _ in 0..=max_tries {
            if self.matches(current) {
                return Some(current);
            }

            for (period, frequency) in &self.bindings {
                if frequency.matches(period.get(current, self.options)) {
                    continue;
                }

                let Some(advanced) = self.earliest_entry(current, *period, frequency) else {
                    tracing::trace!(%period, %current, "Field cannot move forward");
                    return None;
                };
                current = advanced;
            }
        }

        if self.matches(current) {
            return Some(current);
        }

        tracing::trace!(%instant, max_tries, "Pattern search exhausted");
        None
    }

    /// ## Summary
    /// Returns the first instant at or after `instant` that does not match.
    ///
    /// A non-matching `instant` is returned unchanged. Otherwise the search
    /// jumps to the earliest instant at which some bound field takes a value
    /// its frequency rejects, at most `max_tries + 1` times. Returns `None`
    /// when no field can leave its frequency or the budget runs out.
    #[must_use]
    pub fn after(&self, instant: NaiveDateTime, max_tries: usize) -> Option<NaiveDateTime> {
        let mut current = instant;

        for _ in 0..=max_tries {
            if !self.matches(current) {
                return Some(current);
            }
            current = self.earliest_exit(current)?;
        }

        if self.matches(current) {
            tracing::trace!(%instant, max_tries, "Exclusion exit search exhausted");
            return None;
        }

        Some(current)
    }

    /// Smallest move that changes a matching instant: the finest bound field
    /// moves to the next start of an accepted value.
    fn step_past(&self, instant: NaiveDateTime) -> Option<NaiveDateTime> {
        match self.bindings.last() {
            Some((period, frequency)) => self.earliest_entry(instant, *period, frequency),
            None => instant.checked_add_signed(TimeDelta::milliseconds(1)),
        }
    }

    /// Earliest instant after `instant` at which `period` holds a value
    /// `frequency` accepts.
    fn earliest_entry(
        &self,
        instant: NaiveDateTime,
        period: Period,
        frequency: &Frequency,
    ) -> Option<NaiveDateTime> {
        let value = period.get(instant, self.options);
        self.earliest_move(instant, period, &accepted_values(period, frequency, value))
    }

    /// Earliest instant after `instant` at which some bound field holds a
    /// value its frequency rejects.
    fn earliest_exit(&self, instant: NaiveDateTime) -> Option<NaiveDateTime> {
        self.bindings
            .iter()
            .filter_map(|(period, frequency)| {
                let value = period.get(instant, self.options);
                self.earliest_move(instant, *period, &rejected_values(*period, frequency, value))
            })
            .min()
    }

    fn earliest_move(
        &self,
        instant: NaiveDateTime,
        period: Period,
        targets: &[i32],
    ) -> Option<NaiveDateTime> {
        targets
            .iter()
            .map(|target| period.next(instant, *target, self.options))
            .filter(|candidate| *candidate > instant)
            .min()
    }
}

// Cyclic fields do not reach their values in numeric order: days counted from
// the end of the month run backwards, and a day or week number may be missing
// from the coming month or year. Every value of the domain is therefore a
// candidate. Absolute fields only grow, so one value is enough.

/// Values `frequency` accepts that the field can move to from `current`.
fn accepted_values(period: Period, frequency: &Frequency, current: i32) -> Vec<i32> {
    match period.domain() {
        Some(domain) => domain.filter(|value| frequency.matches(*value)).collect(),
        None => vec![frequency.next(current)],
    }
}

/// Values `frequency` rejects that the field can move to from `current`.
fn rejected_values(period: Period, frequency: &Frequency, current: i32) -> Vec<i32> {
    if frequency.is_always() {
        return Vec::new();
    }

    match period.domain() {
        Some(domain) => domain.filter(|value| !frequency.matches(*value)).collect(),
        None => (1..=ABSOLUTE_EXIT_HORIZON)
            .map(|step| current.saturating_add(step))
            .find(|value| !frequency.matches(*value))
            .into_iter()
            .collect(),
    }
}
