use std::iter::FusedIterator;

use cadence_core::options::{CalendarOptions, DEFAULT_OPTIONS};
use chrono::NaiveDateTime;

use crate::error::RuleResult;
use crate::pattern::{Pattern, PatternInput};

/// The ways a schedule can be described.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleInput {
    /// A single include pattern.
    Pattern(PatternInput),
    /// Any of several include patterns.
    Any(Vec<PatternInput>),
    /// Include patterns minus exclude patterns.
    Rules {
        on: Vec<PatternInput>,
        not: Vec<PatternInput>,
    },
}

impl ScheduleInput {
    fn into_parts(self) -> (Vec<PatternInput>, Vec<PatternInput>) {
        match self {
            Self::Pattern(input) => (vec![input], Vec::new()),
            Self::Any(on) => (on, Vec::new()),
            Self::Rules { on, not } => (on, not),
        }
    }
}

impl From<PatternInput> for ScheduleInput {
    fn from(input: PatternInput) -> Self {
        Self::Pattern(input)
    }
}

impl From<Vec<PatternInput>> for ScheduleInput {
    fn from(inputs: Vec<PatternInput>) -> Self {
        Self::Any(inputs)
    }
}

/// Union of include patterns minus the union of exclude patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl Schedule {
    /// ## Summary
    /// Compiles every pattern of `input` with the default calendar options.
    ///
    /// ## Errors
    /// Returns the first pattern compilation error.
    pub fn new(input: impl Into<ScheduleInput>) -> RuleResult<Self> {
        Self::with_options(input, DEFAULT_OPTIONS)
    }

    /// ## Summary
    /// Compiles every pattern of `input` with explicit calendar options.
    ///
    /// ## Errors
    /// Returns the first pattern compilation error; no schedule is built.
    pub fn with_options(input: impl Into<ScheduleInput>, options: CalendarOptions) -> RuleResult<Self> {
        let (on, not) = input.into().into_parts();

        let compile = |inputs: &[PatternInput]| {
            inputs
                .iter()
                .map(|input| Pattern::with_options(input, options))
                .collect::<RuleResult<Vec<_>>>()
        };

        let schedule = Self {
            include: compile(&on)?,
            exclude: compile(&not)?,
        };

        tracing::debug!(
            include = schedule.include.len(),
            exclude = schedule.exclude.len(),
            "Compiled schedule"
        );

        Ok(schedule)
    }

    #[must_use]
    pub fn include(&self) -> &[Pattern] {
        &self.include
    }

    #[must_use]
    pub fn exclude(&self) -> &[Pattern] {
        &self.exclude
    }

    /// Does some include pattern match `instant`?
    #[must_use]
    pub fn is_on(&self, instant: NaiveDateTime) -> bool {
        self.include.iter().any(|pattern| pattern.matches(instant))
    }

    /// Does some exclude pattern match `instant`?
    #[must_use]
    pub fn is_excluded(&self, instant: NaiveDateTime) -> bool {
        self.exclude.iter().any(|pattern| pattern.matches(instant))
    }

    #[must_use]
    pub fn matches(&self, instant: NaiveDateTime) -> bool {
        self.is_on(instant) && !self.is_excluded(instant)
    }

    /// ## Summary
    /// Returns the first instant strictly after `instant` that the schedule
    /// matches.
    ///
    /// Each round moves to the earliest include occurrence and then past any
    /// exclusion covering it. `max_tries` bounds the rounds, and separately
    /// each pattern search. `None` means nothing was found within budget.
    #[must_use]
    pub fn next(&self, instant: NaiveDateTime, max_tries: usize) -> Option<NaiveDateTime> {
        let mut candidate = instant;

        for _ in 0..=max_tries {
            candidate = self.earliest_include(candidate, max_tries)?;
            candidate = self.skip_excluded(candidate, max_tries)?;

            if self.matches(candidate) {
                return Some(candidate);
            }
        }

        tracing::trace!(%instant, max_tries, "Schedule search exhausted");
        None
    }

    /// Successive occurrences strictly after `start`.
    #[must_use]
    pub fn occurrences(&self, start: NaiveDateTime, max_tries: usize) -> Occurrences<'_> {
        Occurrences {
            schedule: self,
            cursor: Some(start),
            max_tries,
        }
    }

    fn earliest_include(&self, instant: NaiveDateTime, max_tries: usize) -> Option<NaiveDateTime> {
        self.include
            .iter()
            .filter_map(|pattern| pattern.next(instant, max_tries))
            .min()
    }

    /// Moves `instant` to the first instant no exclude pattern covers.
    fn skip_excluded(&self, instant: NaiveDateTime, max_tries: usize) -> Option<NaiveDateTime> {
        let mut candidate = instant;

        for _ in 0..=max_tries {
            let Some(exclusion) = self.exclude.iter().find(|pattern| pattern.matches(candidate)) else {
                return Some(candidate);
            };

            let resumed = exclusion.after(candidate, max_tries)?;
            tracing::trace!(from = %candidate, to = %resumed, "Skipped exclusion");
            candidate = resumed;
        }

        Some(candidate)
    }
}

/// Iterator over the occurrences of a [`Schedule`], created by
/// [`Schedule::occurrences`]. Ends at the first failed search.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    schedule: &'a Schedule,
    cursor: Option<NaiveDateTime>,
    max_tries: usize,
}

impl Iterator for Occurrences<'_> {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        let found = self.schedule.next(self.cursor?, self.max_tries);
        self.cursor = found;
        found
    }
}

impl FusedIterator for Occurrences<'_> {}
