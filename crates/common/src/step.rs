//! Immutable algorithm snapshots.
//!
//! A [`Step`] captures everything a renderer needs at one observable instant:
//! an owned copy of the array, the positions already in their final place,
//! and exactly one [`StepEvent`] describing what just happened. Steps never
//! share buffers, so mutating one snapshot can never alter another.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::types::{IndexPair, SearchOutcome, Value};

/// What happened at this step.
///
/// Each variant carries only the indices meaningful for that event, so
/// combinations such as "comparing and swapped at once" cannot be expressed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepEvent {
    /// Initial condition, nothing examined yet.
    Start,
    /// Terminal condition of a sort: every position is final.
    Finish,

    // -- bubble sort --
    /// Two adjacent elements are being compared.
    Compare(IndexPair),
    /// Two adjacent elements were just exchanged.
    Swap(IndexPair),

    // -- insertion sort --
    /// `key` is being extracted from the unsorted region.
    SelectKey { key: usize },
    /// A sorted-region element is compared against the key's original slot.
    CompareKey { sorted: usize, key: usize },
    /// `pair.first` was copied one slot right into `pair.second`.
    Shift { pair: IndexPair, key: usize },
    /// The key came to rest at `at`.
    Insert { at: usize },

    // -- linear search --
    /// `index` is being compared against the target.
    Probe { index: usize },
    /// The target sits at `index`. Always the last step of its trace.
    Found { index: usize },
    /// The scan ended without a match.
    NotFound,
}

/// One snapshot of algorithm state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Full array contents at this instant (owned copy).
    pub array: Vec<Value>,
    /// Positions known to be in their final sorted place. Empty for searches.
    pub sorted: BTreeSet<usize>,
    pub event: StepEvent,
    /// Value being searched for. Constant across a search trace, `None` for sorts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Value>,
}

impl Step {
    /// Snapshot a sorting algorithm's working array.
    pub fn sorting(array: &[Value], sorted: BTreeSet<usize>, event: StepEvent) -> Self {
        Self {
            array: array.to_vec(),
            sorted,
            event,
            target: None,
        }
    }

    /// Snapshot a search over `array` for `target`.
    pub fn search(array: &[Value], target: Value, event: StepEvent) -> Self {
        Self {
            array: array.to_vec(),
            sorted: BTreeSet::new(),
            event,
            target: Some(target),
        }
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Pair of positions under comparison (bubble `comparing`, insertion `comparing`).
    pub fn comparing(&self) -> Option<IndexPair> {
        match self.event {
            StepEvent::Compare(pair) => Some(pair),
            StepEvent::CompareKey { sorted, key } => Some(IndexPair::new(sorted, key)),
            _ => None,
        }
    }

    /// Pair of positions that just exchanged or shifted values.
    pub fn swapped(&self) -> Option<IndexPair> {
        match self.event {
            StepEvent::Swap(pair) | StepEvent::Shift { pair, .. } => Some(pair),
            _ => None,
        }
    }

    /// Original slot of the key currently being inserted.
    pub fn current_key(&self) -> Option<usize> {
        match self.event {
            StepEvent::SelectKey { key }
            | StepEvent::CompareKey { key, .. }
            | StepEvent::Shift { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Final resting slot of the key that was just placed.
    pub fn inserting_at(&self) -> Option<usize> {
        match self.event {
            StepEvent::Insert { at } => Some(at),
            _ => None,
        }
    }

    /// Single index examined by a search step.
    pub fn probing(&self) -> Option<usize> {
        match self.event {
            StepEvent::Probe { index } | StepEvent::Found { index } => Some(index),
            _ => None,
        }
    }

    /// Conclusion of a search, present only on its terminal step.
    pub fn search_outcome(&self) -> Option<SearchOutcome> {
        match self.event {
            StepEvent::Found { index } => Some(SearchOutcome::Found(index)),
            StepEvent::NotFound => Some(SearchOutcome::NotFound),
            _ => None,
        }
    }

    /// Whether every position of a non-search step is final.
    pub fn is_fully_sorted(&self) -> bool {
        self.target.is_none() && self.sorted.len() == self.array.len()
    }

    /// Every position this step refers to, in event order.
    pub fn referenced_indices(&self) -> Vec<usize> {
        match self.event {
            StepEvent::Start | StepEvent::Finish | StepEvent::NotFound => Vec::new(),
            StepEvent::Compare(pair) | StepEvent::Swap(pair) => vec![pair.first, pair.second],
            StepEvent::SelectKey { key } => vec![key],
            StepEvent::CompareKey { sorted, key } => vec![sorted, key],
            StepEvent::Shift { pair, key } => vec![pair.first, pair.second, key],
            StepEvent::Insert { at } => vec![at],
            StepEvent::Probe { index } | StepEvent::Found { index } => vec![index],
        }
    }
}

/// `{0, 1, .., end - 1}` as a sorted-position set.
pub fn prefix(end: usize) -> BTreeSet<usize> {
    (0..end).collect()
}

/// The `count` highest positions of an array of length `len`.
pub fn suffix(len: usize, count: usize) -> BTreeSet<usize> {
    (len.saturating_sub(count)..len).collect()
}
