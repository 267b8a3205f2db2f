//! Core index types with newtype pattern for type safety.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single array element. Inputs are arbitrary finite numbers.
pub type Value = f64;

/// An ordered pair of array positions referenced by one step.
///
/// For bubble sort the pair is always adjacent (`first + 1 == second`). For
/// insertion sort comparisons the second index is the key's original slot,
/// which stays fixed while the key value floats leftwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexPair {
    pub first: usize,
    pub second: usize,
}

impl IndexPair {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// Pair of `index` and its right-hand neighbour.
    pub fn adjacent(index: usize) -> Self {
        Self::new(index, index + 1)
    }

    pub fn contains(self, index: usize) -> bool {
        self.first == index || self.second == index
    }
}

impl fmt::Display for IndexPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// Result of a linear search as seen by a single step.
///
/// `NotFound` is the typed sentinel for "scan exhausted without a match";
/// it can never be confused with a real index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchOutcome {
    Found(usize),
    NotFound,
}

impl SearchOutcome {
    /// The matching index, if any.
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            Self::NotFound => None,
        }
    }
}
