//! `sv-playback` — Navigation and timed auto-advance over a step trace.
//!
//! This crate provides:
//!
//! - **`PlaybackController`**: owns a trace and a cursor; seek, step, reset,
//!   play/pause, and tick handling with an `Idle → Ready ⇄ Playing` state machine.
//! - **`Ticker`**: cancellable repeating timer on its own thread, delivering
//!   ticks over a crossbeam channel.
//!
//! The controller only depends on `Step`, not on which algorithm produced it.
//!
//! # Usage
//!
//! ```rust
//! use sv_common::PlaybackConfig;
//! use sv_playback::PlaybackController;
//! use sv_trace_gen::{generate_trace, Algorithm};
//!
//! let steps = generate_trace(Algorithm::LinearSearch, &[5.0, 3.0, 8.0], Some(8.0)).unwrap();
//! let mut playback = PlaybackController::new(PlaybackConfig::external());
//! playback.load(steps).unwrap();
//!
//! playback.play().unwrap();
//! while playback.tick() {}
//! assert_eq!(playback.current_index(), playback.total_steps() - 1);
//! assert!(!playback.is_playing());
//! ```

pub mod playback;
pub mod ticker;

// Re-export primary types at crate root for convenience.
pub use playback::{PlaybackController, PlaybackMode};
pub use ticker::Ticker;
