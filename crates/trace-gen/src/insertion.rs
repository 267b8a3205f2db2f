//! Insertion sort trace: grow a sorted prefix one key at a time.

use sv_common::step::prefix;
use sv_common::{IndexPair, Step, StepEvent, Value};

/// Generate the full insertion sort trace for `input`.
///
/// For each key at position `i` (starting at 1):
/// 1. `SelectKey { key: i }` while the key is still in place.
/// 2. Scan left: `CompareKey { sorted: j, key: i }`, and when `a[j] > key`
///    copy `a[j]` into `a[j+1]` and emit `Shift`.
/// 3. Drop the key into the gap and emit `Insert { at }`.
///
/// During a scan the array snapshot holds the shifted duplicate, not the key;
/// the key's value reappears with the `Insert` step.
pub fn generate(input: &[Value]) -> Vec<Step> {
    let mut array = input.to_vec();
    let n = array.len();
    let mut steps = Vec::with_capacity(2 + n * (n + 1));

    // A single element is trivially sorted.
    steps.push(Step::sorting(&array, prefix(n.min(1)), StepEvent::Start));

    for i in 1..n {
        let key = array[i];
        steps.push(Step::sorting(&array, prefix(i), StepEvent::SelectKey { key: i }));

        // `gap` is the slot the key would occupy if the scan stopped now.
        let mut gap = i;
        while gap > 0 {
            let j = gap - 1;
            steps.push(Step::sorting(
                &array,
                prefix(i),
                StepEvent::CompareKey { sorted: j, key: i },
            ));

            if array[j] <= key {
                break;
            }

            array[gap] = array[j];
            steps.push(Step::sorting(
                &array,
                prefix(i),
                StepEvent::Shift {
                    pair: IndexPair::adjacent(j),
                    key: i,
                },
            ));
            gap = j;
        }

        array[gap] = key;
        steps.push(Step::sorting(&array, prefix(i + 1), StepEvent::Insert { at: gap }));
    }

    steps.push(Step::sorting(&array, prefix(n), StepEvent::Finish));

    tracing::debug!(len = n, steps = steps.len(), "Insertion sort trace generated");
    steps
}
