//! `sv-common` — Shared types, errors, and configuration for stepviz.
//!
//! This crate is the foundation the generator and playback crates build on:
//!
//! - **Step model**: `Step`, `StepEvent` (one immutable snapshot per observable instant)
//! - **Types**: `IndexPair`, `SearchOutcome`, `Value`
//! - **Errors**: `TraceError`, `PlaybackError` (thiserror-based)
//! - **Config**: `PlaybackConfig`, `TickSource`

pub mod config;
pub mod error;
pub mod step;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    PlaybackConfig, TickSource, DEFAULT_INTERVAL_MS, MIN_INTERVAL_MS, RELAXED_INTERVAL_MS,
};
pub use error::{PlaybackError, TraceError, TraceResult};
pub use step::{Step, StepEvent};
pub use types::{IndexPair, SearchOutcome, Value};
