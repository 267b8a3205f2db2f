//! Playback configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Auto-advance period used when nothing else is configured.
pub const DEFAULT_INTERVAL_MS: u64 = 800;

/// Slower period, comfortable for following bubble-sort swaps by eye.
pub const RELAXED_INTERVAL_MS: u64 = 1300;

/// Lower bound on the tick period. Anything faster is unreadable.
pub const MIN_INTERVAL_MS: u64 = 10;

/// Where auto-advance ticks come from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickSource {
    /// A dedicated timer thread delivers ticks; the owner drains them with `update()`.
    #[default]
    Thread,
    /// The host drives `tick()` from its own frame or timer loop.
    External,
}

/// Playback controller configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Auto-advance period in milliseconds.
    pub interval_ms: u64,
    pub tick_source: TickSource,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            tick_source: TickSource::Thread,
        }
    }
}

impl PlaybackConfig {
    /// Config for a host that calls `tick()` itself.
    pub fn external() -> Self {
        Self {
            tick_source: TickSource::External,
            ..Self::default()
        }
    }

    /// Builder-style interval override. Clamped to [`MIN_INTERVAL_MS`].
    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms.max(MIN_INTERVAL_MS);
        self
    }

    /// Effective tick period.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(MIN_INTERVAL_MS))
    }
}
