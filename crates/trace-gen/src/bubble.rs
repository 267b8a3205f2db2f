//! Bubble sort trace: adjacent compare, optional swap, one pass at a time.
//!
//! Every pass runs to completion even when no swap happened, so an already
//! sorted input still shows all `n(n-1)/2` comparisons.

use sv_common::step::suffix;
use sv_common::{IndexPair, Step, StepEvent, Value};

/// Generate the full bubble sort trace for `input`.
///
/// The trace is `Start`, then for every outer pass `i` and inner index `j`
/// a `Compare(j, j+1)` step, followed by a `Swap(j, j+1)` step when
/// `a[j] > a[j+1]`. The last `i` positions are reported as sorted during
/// pass `i`. A final `Finish` step marks every position sorted.
///
/// Equal neighbours are never exchanged, which keeps the sort stable.
pub fn generate(input: &[Value]) -> Vec<Step> {
    let mut array = input.to_vec();
    let n = array.len();
    let mut steps = Vec::with_capacity(1 + n * n + 1);

    steps.push(Step::sorting(&array, suffix(n, 0), StepEvent::Start));

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - i {
            let pair = IndexPair::adjacent(j);
            steps.push(Step::sorting(&array, suffix(n, i), StepEvent::Compare(pair)));

            if array[j] > array[j + 1] {
                array.swap(j, j + 1);
                steps.push(Step::sorting(&array, suffix(n, i), StepEvent::Swap(pair)));
            }
        }
    }

    steps.push(Step::sorting(&array, suffix(n, n), StepEvent::Finish));

    tracing::debug!(len = n, steps = steps.len(), "Bubble sort trace generated");
    steps
}
