use thiserror::Error;

use crate::period::Period;

/// Errors raised while building frequencies, patterns and schedules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("`{token}` is not a valid value in `{expression}`")]
    InvalidValue { token: String, expression: String },

    #[error("Invalid frequency expression: `{0}`")]
    InvalidExpression(String),

    #[error("Step must be a positive integer, got {0}")]
    InvalidStep(i32),

    #[error("A {0} frequency needs at least one value")]
    EmptyFrequency(&'static str),

    #[error("Unknown period: {0}")]
    UnknownPeriod(String),

    #[error("Invalid frequency for {period}: {source}")]
    InvalidField {
        period: Period,
        #[source]
        source: Box<RuleError>,
    },

    #[error(transparent)]
    CoreError(#[from] cadence_core::error::CoreError),
}

pub type RuleResult<T> = std::result::Result<T, RuleError>;
