//! Parsing of user-typed arrays and targets.

use sv_common::{TraceError, Value};

/// Parse a comma-separated list of numbers.
///
/// Blank tokens and anything that is not a finite number are skipped, so
/// `"5, x, 3,,8"` yields `[5, 3, 8]`.
///
/// # Errors
///
/// [`TraceError::EmptyInput`] when no valid number remains.
pub fn parse_values(input: &str) -> Result<Vec<Value>, TraceError> {
    let values: Vec<Value> = input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse::<Value>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => {
                tracing::debug!(token, "Skipping invalid token");
                None
            }
        })
        .collect();

    if values.is_empty() {
        return Err(TraceError::EmptyInput);
    }
    Ok(values)
}

/// Parse a single search target.
///
/// # Errors
///
/// [`TraceError::InvalidTarget`] unless `input` is one finite number.
pub fn parse_target(input: &str) -> Result<Value, TraceError> {
    let trimmed = input.trim();
    match trimmed.parse::<Value>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(TraceError::InvalidTarget(trimmed.to_string())),
    }
}
