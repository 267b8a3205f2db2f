//! `sv-trace-gen` — Step-trace generation for classic array algorithms.
//!
//! Each generator is a pure function from an input array (and, for search,
//! a target) to a finite, ordered `Vec<Step>`. Same input, same trace:
//!
//! - **Bubble sort**: adjacent compare/swap, full passes, no early exit
//! - **Insertion sort**: key selection, backward compare/shift, insertion
//! - **Linear search**: left-to-right probes, stops at the first match
//!
//! # Usage
//!
//! ```rust
//! use sv_trace_gen::{generate_trace, Algorithm};
//!
//! let steps = generate_trace(Algorithm::BubbleSort, &[2.0, 1.0], None).unwrap();
//! assert_eq!(steps.len(), 4);
//! assert_eq!(steps.last().unwrap().array, vec![1.0, 2.0]);
//! ```

pub mod algorithm;
pub mod bubble;
pub mod insertion;
pub mod linear_search;
pub mod validate;

// Re-export primary API
pub use algorithm::{generate_trace, Algorithm};
pub use validate::validate_trace;
