//! Plain-text rendering of a step's bars.

use std::fmt;

use sv_common::Step;

/// Highlight applied to one array position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarRole {
    Unsorted,
    Comparing,
    Swapped,
    Key,
    Inserted,
    Sorted,
    Found,
}

impl BarRole {
    /// Single-character marker printed after the value.
    pub fn marker(self) -> char {
        match self {
            BarRole::Unsorted => ' ',
            BarRole::Comparing => '?',
            BarRole::Swapped => '~',
            BarRole::Key => '^',
            BarRole::Inserted => '+',
            BarRole::Sorted => '=',
            BarRole::Found => '!',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BarRole::Unsorted => "unsorted",
            BarRole::Comparing => "comparing",
            BarRole::Swapped => "swapped",
            BarRole::Key => "key",
            BarRole::Inserted => "inserted",
            BarRole::Sorted => "sorted",
            BarRole::Found => "found",
        }
    }
}

impl fmt::Display for BarRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Role of position `index` in `step`.
///
/// Priority, highest first: inserted, found, key, sorted, swapped, comparing.
/// A probed search position counts as comparing.
pub fn role_at(step: &Step, index: usize) -> BarRole {
    if step.inserting_at() == Some(index) {
        BarRole::Inserted
    } else if step.search_outcome().and_then(|o| o.index()) == Some(index) {
        BarRole::Found
    } else if step.current_key() == Some(index) {
        BarRole::Key
    } else if step.sorted.contains(&index) {
        BarRole::Sorted
    } else if step.swapped().is_some_and(|pair| pair.contains(index)) {
        BarRole::Swapped
    } else if step.comparing().is_some_and(|pair| pair.contains(index))
        || step.probing() == Some(index)
    {
        BarRole::Comparing
    } else {
        BarRole::Unsorted
    }
}

pub fn roles(step: &Step) -> Vec<BarRole> {
    (0..step.len()).map(|index| role_at(step, index)).collect()
}

/// Render the array as `[ 5? 3? 8  ]`, one marker per value.
pub fn render_bars(step: &Step) -> String {
    let cells: Vec<String> = step
        .array
        .iter()
        .zip(roles(step))
        .map(|(value, role)| format!("{value}{}", role.marker()))
        .collect();
    format!("[ {} ]", cells.join(" "))
}

/// Legend line for the markers used by [`render_bars`].
pub fn legend() -> String {
    [
        BarRole::Comparing,
        BarRole::Swapped,
        BarRole::Key,
        BarRole::Inserted,
        BarRole::Sorted,
        BarRole::Found,
    ]
    .iter()
    .map(|role| format!("{} {role}", role.marker()))
    .collect::<Vec<_>>()
    .join("  ")
}
