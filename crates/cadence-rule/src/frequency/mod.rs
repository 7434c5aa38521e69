//! Recurrence predicates over the integer values of a single field.
//!
//! A [`Frequency`] answers two questions about a field value `n`: does it
//! occur (`matches`) and which value comes after it (`next`). Frequencies are
//! built from a [`FrequencyInput`], which is either one of five structured
//! shapes or a textual expression compiled by [`parse_expression`].

mod parse;

use std::str::FromStr;

pub use parse::parse_expression;

use crate::error::{RuleError, RuleResult};

/// Recurrence predicate plus successor function over integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frequency(Shape);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Shape {
    Always,
    Single(i32),
    /// Sorted, deduplicated, never empty.
    Multiple(Vec<i32>),
    /// `offset` is in `[0, step)`.
    Every { step: i32, offset: i32 },
    /// Each pair has `min <= max`; sorted by `min`, never empty.
    Ranges(Vec<(i32, i32)>),
}

impl Frequency {
    /// Matches every value.
    #[must_use]
    pub const fn always() -> Self {
        Self(Shape::Always)
    }

    /// Matches only `value`. Its `next` is always `value`, whatever the
    /// input: a pattern reads that as "move to `value` in the next cycle".
    #[must_use]
    pub const fn single(value: i32) -> Self {
        Self(Shape::Single(value))
    }

    /// ## Summary
    /// Matches any of `values`.
    ///
    /// ## Errors
    /// Returns `RuleError::EmptyFrequency` if `values` is empty.
    pub fn multiple(values: impl IntoIterator<Item = i32>) -> RuleResult<Self> {
        let mut sorted: Vec<i32> = values.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();

        if sorted.is_empty() {
            return Err(RuleError::EmptyFrequency("multiple"));
        }

        Ok(Self(Shape::Multiple(sorted)))
    }

    /// ## Summary
    /// Matches every `step`-th value starting at `offset`. The offset may be
    /// negative or larger than the step; it is reduced into `[0, step)`.
    ///
    /// ## Errors
    /// Returns `RuleError::InvalidStep` if `step` is not positive.
    pub fn every(step: i32, offset: i32) -> RuleResult<Self> {
        if step <= 0 {
            return Err(RuleError::InvalidStep(step));
        }

        Ok(Self(Shape::Every {
            step,
            offset: offset.rem_euclid(step),
        }))
    }

    /// ## Summary
    /// Matches values inside any of the inclusive ranges. A missing maximum
    /// makes a single-value range; reversed bounds are swapped.
    ///
    /// ## Errors
    /// Returns `RuleError::EmptyFrequency` if no range is given.
    pub fn ranges(ranges: impl IntoIterator<Item = (i32, Option<i32>)>) -> RuleResult<Self> {
        let mut normalized: Vec<(i32, i32)> = ranges
            .into_iter()
            .map(|(min, max)| {
                let max = max.unwrap_or(min);
                (min.min(max), min.max(max))
            })
            .collect();

        if normalized.is_empty() {
            return Err(RuleError::EmptyFrequency("ranges"));
        }

        normalized.sort_by_key(|(min, _)| *min);

        Ok(Self(Shape::Ranges(normalized)))
    }

    /// Does `n` occur on this frequency?
    #[must_use]
    pub fn matches(&self, n: i32) -> bool {
        match &self.0 {
            Shape::Always => true,
            Shape::Single(value) => n == *value,
            Shape::Multiple(values) => values.binary_search(&n).is_ok(),
            Shape::Every { step, offset } => n.rem_euclid(*step) == *offset,
            Shape::Ranges(ranges) => ranges.iter().any(|(min, max)| (*min..=*max).contains(&n)),
        }
    }

    /// The value that follows `n` on this frequency, wrapping to the first
    /// value for bounded shapes.
    #[must_use]
    pub fn next(&self, n: i32) -> i32 {
        match &self.0 {
            Shape::Always => n.saturating_add(1),
            Shape::Single(value) => *value,
            Shape::Multiple(values) => values
                .iter()
                .copied()
                .find(|value| *value > n)
                .or_else(|| values.first().copied())
                .unwrap_or(n),
            Shape::Every { step, offset } => {
                let after = i64::from(n) + 1;
                let next = after + (i64::from(*offset) - after).rem_euclid(i64::from(*step));
                i32::try_from(next).unwrap_or(i32::MAX)
            }
            Shape::Ranges(ranges) => {
                for (min, max) in ranges {
                    if n < *min {
                        return *min;
                    }
                    if n < *max {
                        return n + 1;
                    }
                }
                ranges.first().map_or(n, |(min, _)| *min)
            }
        }
    }

    #[must_use]
    pub const fn is_always(&self) -> bool {
        matches!(self.0, Shape::Always)
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Self::always()
    }
}

/// The shapes a frequency can be described in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrequencyInput {
    Always,
    Single(i32),
    Multiple(Vec<i32>),
    Every { every: i32, offset: i32 },
    Ranges(Vec<(i32, Option<i32>)>),
    /// Expression in the textual grammar, see [`parse_expression`].
    Text(String),
}

impl FrequencyInput {
    #[must_use]
    pub const fn every(every: i32, offset: i32) -> Self {
        Self::Every { every, offset }
    }

    /// ## Summary
    /// Replaces a textual expression by the structured shape it denotes,
    /// resolving names through `aliases`. Structured inputs are returned as is.
    ///
    /// ## Errors
    /// Returns a parse error if the expression is not valid.
    pub fn resolve(&self, aliases: &[(&str, i32)]) -> RuleResult<Self> {
        match self {
            Self::Text(expression) => parse_expression(expression, aliases),
            other => Ok(other.clone()),
        }
    }

    /// ## Summary
    /// Builds the frequency this input describes.
    ///
    /// ## Errors
    /// Returns an error if a textual expression does not parse, a step is not
    /// positive, or a value list is empty.
    pub fn compile(&self, aliases: &[(&str, i32)]) -> RuleResult<Frequency> {
        match self.resolve(aliases)? {
            Self::Always => Ok(Frequency::always()),
            Self::Single(value) => Ok(Frequency::single(value)),
            Self::Multiple(values) => Frequency::multiple(values),
            Self::Every { every, offset } => Frequency::every(every, offset),
            Self::Ranges(ranges) => Frequency::ranges(ranges),
            Self::Text(expression) => Err(RuleError::InvalidExpression(expression)),
        }
    }
}

impl From<i32> for FrequencyInput {
    fn from(value: i32) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<i32>> for FrequencyInput {
    fn from(values: Vec<i32>) -> Self {
        Self::Multiple(values)
    }
}

impl From<&[i32]> for FrequencyInput {
    fn from(values: &[i32]) -> Self {
        Self::Multiple(values.to_vec())
    }
}

impl<const N: usize> From<[i32; N]> for FrequencyInput {
    fn from(values: [i32; N]) -> Self {
        Self::Multiple(values.to_vec())
    }
}

impl From<Vec<(i32, Option<i32>)>> for FrequencyInput {
    fn from(ranges: Vec<(i32, Option<i32>)>) -> Self {
        Self::Ranges(ranges)
    }
}

impl From<&str> for FrequencyInput {
    fn from(expression: &str) -> Self {
        Self::Text(expression.to_string())
    }
}

impl From<String> for FrequencyInput {
    fn from(expression: String) -> Self {
        Self::Text(expression)
    }
}

impl FromStr for FrequencyInput {
    type Err = RuleError;

    /// Parses an expression without aliases.
    fn from_str(s: &str) -> RuleResult<Self> {
        parse_expression(s, &[])
    }
}
