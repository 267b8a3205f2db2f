//! Linear search trace: scan left to right, stop at the first match.

use sv_common::{Step, StepEvent, Value};

/// Generate the linear search trace for `target` in `input`.
///
/// Emits one `Probe` per examined index. A match adds a `Found` step and ends
/// the trace immediately. An exhausted scan ends with a single `NotFound`
/// step, which is also the whole trace for an empty input.
pub fn generate(input: &[Value], target: Value) -> Vec<Step> {
    let mut steps = Vec::with_capacity(input.len() + 1);

    for (index, value) in input.iter().enumerate() {
        steps.push(Step::search(input, target, StepEvent::Probe { index }));

        if *value == target {
            steps.push(Step::search(input, target, StepEvent::Found { index }));
            tracing::debug!(index, steps = steps.len(), "Linear search matched");
            return steps;
        }
    }

    steps.push(Step::search(input, target, StepEvent::NotFound));
    tracing::debug!(len = input.len(), steps = steps.len(), "Linear search exhausted");
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use sv_common::SearchOutcome;

    #[test]
    fn finds_last_element() {
        let steps = generate(&[5.0, 3.0, 8.0], 8.0);
        let events: Vec<_> = steps.iter().map(|s| s.event.clone()).collect();
        assert_eq!(
            events,
            vec![
                StepEvent::Probe { index: 0 },
                StepEvent::Probe { index: 1 },
                StepEvent::Probe { index: 2 },
                StepEvent::Found { index: 2 },
            ]
        );
        assert_eq!(
            steps.last().unwrap().search_outcome(),
            Some(SearchOutcome::Found(2))
        );
    }

    #[test]
    fn missing_target_ends_with_sentinel() {
        let steps = generate(&[5.0, 3.0, 8.0], 9.0);
        assert_eq!(steps.len(), 4);
        assert!(steps[..3].iter().all(|s| s.search_outcome().is_none()));
        assert_eq!(steps[3].event, StepEvent::NotFound);
        assert_eq!(steps[3].probing(), None);
    }

    #[test]
    fn stops_at_first_duplicate() {
        let steps = generate(&[1.0, 7.0, 7.0], 7.0);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[2].event, StepEvent::Found { index: 1 });
    }

    #[test]
    fn empty_input_is_a_single_not_found() {
        let steps = generate(&[], 1.0);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].event, StepEvent::NotFound);
        assert!(steps[0].array.is_empty());
    }

    #[test]
    fn target_is_constant() {
        let steps = generate(&[1.0, 2.0, 3.0], 2.5);
        assert!(steps.iter().all(|s| s.target == Some(2.5)));
        assert!(steps.iter().all(|s| s.array == vec![1.0, 2.0, 3.0]));
    }
}
