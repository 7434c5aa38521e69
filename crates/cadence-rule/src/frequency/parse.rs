use crate::error::{RuleError, RuleResult};
use crate::frequency::FrequencyInput;

/// ## Summary
/// Parses the textual frequency grammar.
///
/// | Form         | Meaning                                  |
/// |--------------|------------------------------------------|
/// | `*`          | every value                              |
/// | `N/M`, `*/M` | every `M`-th value starting at `N` (or 0) |
/// | `A-B,C,...`  | inclusive ranges and single values       |
/// | `A,B,...`    | a set of values                          |
/// | `A`          | one value                                |
///
/// Values are integers or names looked up case-insensitively in `aliases`.
/// A leading `-` is a sign, so `-4--1` is the range from -4 to -1.
///
/// ## Errors
/// Returns `RuleError::InvalidExpression` for an empty expression or empty
/// list item, and `RuleError::InvalidValue` for a token that is neither an
/// integer nor a known alias.
pub fn parse_expression(expression: &str, aliases: &[(&str, i32)]) -> RuleResult<FrequencyInput> {
    let trimmed = expression.trim();

    if trimmed.is_empty() {
        return Err(RuleError::InvalidExpression(expression.to_string()));
    }

    if trimmed == "*" {
        return Ok(FrequencyInput::Always);
    }

    if let Some((offset, step)) = trimmed.split_once('/') {
        let every = parse_value(step, expression, aliases)?;
        let offset = if offset.trim() == "*" {
            0
        } else {
            parse_value(offset, expression, aliases)?
        };
        return Ok(FrequencyInput::Every { every, offset });
    }

    let tokens: Vec<&str> = trimmed.split(',').map(str::trim).collect();
    if tokens.iter().any(|token| token.is_empty()) {
        return Err(RuleError::InvalidExpression(expression.to_string()));
    }

    if tokens.iter().any(|token| split_range(token).is_some()) {
        let ranges = tokens
            .iter()
            .map(|token| match split_range(token) {
                Some((min, max)) => Ok((
                    parse_value(min, expression, aliases)?,
                    Some(parse_value(max, expression, aliases)?),
                )),
                None => Ok((parse_value(token, expression, aliases)?, None)),
            })
            .collect::<RuleResult<Vec<_>>>()?;
        return Ok(FrequencyInput::Ranges(ranges));
    }

    let values = tokens
        .iter()
        .map(|token| parse_value(token, expression, aliases))
        .collect::<RuleResult<Vec<_>>>()?;

    match values.as_slice() {
        [single] => Ok(FrequencyInput::Single(*single)),
        _ => Ok(FrequencyInput::Multiple(values)),
    }
}

/// Splits `A-B` at the first `-` that is not the leading sign of `A`.
fn split_range(token: &str) -> Option<(&str, &str)> {
    let skip = token.chars().next()?.len_utf8();
    let at = token[skip..].find('-')? + skip;

    Some((&token[..at], &token[at + 1..]))
}

fn parse_value(token: &str, expression: &str, aliases: &[(&str, i32)]) -> RuleResult<i32> {
    let token = token.trim();

    if let Some((_, value)) = aliases
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(token))
    {
        return Ok(*value);
    }

    token.parse::<i32>().map_err(|_e| RuleError::InvalidValue {
        token: token.to_string(),
        expression: expression.to_string(),
    })
}
