//! Algorithm selection and the `generate_trace` entry point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use sv_common::{Step, TraceError, TraceResult, Value};

use crate::{bubble, insertion, linear_search};

/// The algorithms stepviz can trace.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    BubbleSort,
    InsertionSort,
    LinearSearch,
}

impl Algorithm {
    pub const ALL: [Self; 3] = [Self::BubbleSort, Self::InsertionSort, Self::LinearSearch];

    /// Whether the algorithm needs a target value.
    pub fn requires_target(self) -> bool {
        matches!(self, Self::LinearSearch)
    }

    /// Whether the trace carries a growing sorted region.
    pub fn is_sort(self) -> bool {
        !self.requires_target()
    }

    /// Short human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::BubbleSort => "Bubble Sort",
            Self::InsertionSort => "Insertion Sort",
            Self::LinearSearch => "Linear Search",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "bubble" | "bubble_sort" => Ok(Self::BubbleSort),
            "insertion" | "insertion_sort" => Ok(Self::InsertionSort),
            "linear" | "linear_search" | "search" => Ok(Self::LinearSearch),
            other => Err(format!("unknown algorithm: {other}")),
        }
    }
}

/// Generate the step trace for `algorithm` over `values`.
///
/// `target` is required for [`Algorithm::LinearSearch`] and ignored by the
/// sorts. Empty arrays are valid and produce the documented minimal traces.
///
/// # Errors
///
/// - [`TraceError::MissingTarget`] when a search is requested without a target.
/// - [`TraceError::NonFiniteValue`] when a value or the target is NaN or
///   infinite, since such values have no place in an ordering.
pub fn generate_trace(
    algorithm: Algorithm,
    values: &[Value],
    target: Option<Value>,
) -> TraceResult<Vec<Step>> {
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(TraceError::NonFiniteValue {
            index: Some(index),
            value,
        });
    }

    let steps = match algorithm {
        Algorithm::BubbleSort => bubble::generate(values),
        Algorithm::InsertionSort => insertion::generate(values),
        Algorithm::LinearSearch => {
            let target = target.ok_or(TraceError::MissingTarget)?;
            if !target.is_finite() {
                return Err(TraceError::NonFiniteValue {
                    index: None,
                    value: target,
                });
            }
            linear_search::generate(values, target)
        }
    };

    tracing::debug!(%algorithm, len = values.len(), steps = steps.len(), "Trace generated");
    Ok(steps)
}
