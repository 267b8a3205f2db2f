//! Structural checks for a generated trace.
//!
//! Renderers index straight into `step.array` with the positions a step
//! reports, so a trace that slips past these checks can crash a front-end.

use sv_common::{Step, StepEvent, TraceError, TraceResult};

fn invalid(position: usize, reason: impl std::fmt::Display) -> TraceError {
    TraceError::InvalidTrace {
        reason: format!("step {position}: {reason}"),
    }
}

/// Verify the invariants every generator guarantees.
///
/// - the trace is non-empty and every array has the same length
/// - every referenced index, including sorted positions, is in range
/// - sorting traces never shrink their sorted set and end fully sorted
/// - search traces keep one target and conclude only on their last step
///
/// # Errors
///
/// Returns [`TraceError::InvalidTrace`] naming the first offending step.
pub fn validate_trace(steps: &[Step]) -> TraceResult<()> {
    let Some(first) = steps.first() else {
        return Err(TraceError::InvalidTrace {
            reason: "trace is empty".to_string(),
        });
    };
    let len = first.array.len();
    let target = first.target;
    let last = steps.len() - 1;
    let mut sorted_len = 0;

    for (position, step) in steps.iter().enumerate() {
        if step.array.len() != len {
            return Err(invalid(
                position,
                format_args!("array length {} differs from {len}", step.array.len()),
            ));
        }
        if let Some(index) = step.referenced_indices().into_iter().find(|&i| i >= len) {
            return Err(invalid(position, format_args!("index {index} out of range")));
        }
        if let Some(index) = step.sorted.iter().find(|&&i| i >= len) {
            return Err(invalid(position, format_args!("sorted index {index} out of range")));
        }
        if step.target != target {
            return Err(invalid(position, "target changed mid-trace"));
        }

        if target.is_some() {
            let concludes = step.search_outcome().is_some();
            if concludes != (position == last) {
                return Err(invalid(position, "search must conclude exactly on its last step"));
            }
        } else {
            if step.sorted.len() < sorted_len {
                return Err(invalid(position, "sorted region shrank"));
            }
            sorted_len = step.sorted.len();
        }
    }

    let final_step = &steps[last];
    if target.is_none() && !(final_step.is_fully_sorted() && final_step.event == StepEvent::Finish)
    {
        return Err(invalid(last, "sorting trace must end fully sorted"));
    }

    Ok(())
}
