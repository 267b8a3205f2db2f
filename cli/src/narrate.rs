//! One-line descriptions of what each step shows.

use sv_common::{Step, StepEvent, Value};

/// Describe step `index` of `steps`.
///
/// Insertion-sort comparisons mention the key by value. Shifts overwrite the
/// key's original slot, so the value is read back from the step that
/// selected it.
pub fn describe(steps: &[Step], index: usize) -> String {
    let Some(step) = steps.get(index) else {
        return String::new();
    };
    let array = &step.array;

    match step.event {
        StepEvent::Start if step.target.is_some() => "Ready to search".to_string(),
        StepEvent::Start => "Ready to start sorting".to_string(),
        StepEvent::Finish => "Array is sorted!".to_string(),

        StepEvent::Compare(pair) => {
            let (a, b) = (array[pair.first], array[pair.second]);
            if a > b {
                format!("Comparing {a} vs {b}: {a} > {b}, swap needed")
            } else {
                format!("Comparing {a} vs {b}: {a} ≤ {b}, no swap needed")
            }
        }
        StepEvent::Swap(pair) => format!(
            "Swapped {} and {}: {} was greater, so they were swapped",
            array[pair.second], array[pair.first], array[pair.second]
        ),

        StepEvent::SelectKey { key } => format!(
            "Selecting element {} at position {key} as the key to insert",
            array[key]
        ),
        StepEvent::CompareKey { sorted, .. } => match selected_key(&steps[..=index]) {
            Some(key) => format!(
                "Comparing key {key} with element {} at position {sorted}",
                array[sorted]
            ),
            None => format!("Comparing key with element at position {sorted}"),
        },
        StepEvent::Shift { pair, .. } => format!(
            "Shifting element from position {} to position {}",
            pair.first, pair.second
        ),
        StepEvent::Insert { at } => format!("Inserting key {} at position {at}", array[at]),

        StepEvent::Probe { index } => match step.target {
            Some(target) => format!(
                "Checking index {index}: is {} equal to {target}?",
                array[index]
            ),
            None => format!("Checking index {index}"),
        },
        StepEvent::Found { index } => format!(
            "Element {} found at index {index}",
            step.target.unwrap_or(array[index])
        ),
        StepEvent::NotFound => match step.target {
            Some(target) => format!("Element {target} not found in the array"),
            None => "Element not found in the array".to_string(),
        },
    }
}

/// Value of the most recently selected insertion key.
fn selected_key(steps: &[Step]) -> Option<Value> {
    steps.iter().rev().find_map(|step| match step.event {
        StepEvent::SelectKey { key } => step.array.get(key).copied(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sv_trace_gen::{generate_trace, Algorithm};

    fn narrate(algorithm: Algorithm, values: &[Value], target: Option<Value>) -> Vec<String> {
        let steps = generate_trace(algorithm, values, target).unwrap();
        (0..steps.len()).map(|i| describe(&steps, i)).collect()
    }

    #[test]
    fn bubble_sort_narration() {
        let lines = narrate(Algorithm::BubbleSort, &[5.0, 3.0], None);
        assert_eq!(
            lines,
            vec![
                "Ready to start sorting",
                "Comparing 5 vs 3: 5 > 3, swap needed",
                "Swapped 5 and 3: 5 was greater, so they were swapped",
                "Array is sorted!",
            ]
        );

        let lines = narrate(Algorithm::BubbleSort, &[1.0, 2.0], None);
        assert_eq!(lines[1], "Comparing 1 vs 2: 1 ≤ 2, no swap needed");
    }

    #[test]
    fn insertion_compare_names_the_key_after_shifts() {
        let steps = generate_trace(Algorithm::InsertionSort, &[3.0, 4.0, 1.0], None).unwrap();
        let lines: Vec<_> = (0..steps.len()).map(|i| describe(&steps, i)).collect();

        let selecting = "Selecting element 1 at position 2 as the key to insert";
        assert!(lines.contains(&selecting.to_string()));
        assert!(lines.contains(&"Comparing key 1 with element 4 at position 1".to_string()));
        // Slot 2 holds 4 after the first shift; the key is still reported as 1.
        assert!(lines.contains(&"Comparing key 1 with element 3 at position 0".to_string()));
        assert!(lines.contains(&"Shifting element from position 0 to position 1".to_string()));
        assert!(lines.contains(&"Inserting key 1 at position 0".to_string()));
        assert_eq!(lines.last().unwrap(), "Array is sorted!");
    }

    #[test]
    fn linear_search_narration() {
        let lines = narrate(Algorithm::LinearSearch, &[5.0, 3.0, 8.0], Some(3.0));
        assert_eq!(
            lines,
            vec![
                "Checking index 0: is 5 equal to 3?",
                "Checking index 1: is 3 equal to 3?",
                "Element 3 found at index 1",
            ]
        );

        let lines = narrate(Algorithm::LinearSearch, &[5.0], Some(2.5));
        assert_eq!(lines.last().unwrap(), "Element 2.5 not found in the array");
    }

    #[test]
    fn out_of_range_index_is_blank() {
        assert_eq!(describe(&[], 0), "");
    }
}
