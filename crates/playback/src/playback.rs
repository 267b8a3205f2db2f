//! Playback state management: cursor navigation and timed auto-advance.

use std::time::Duration;

use sv_common::{PlaybackConfig, PlaybackError, Step, TickSource};

use crate::ticker::Ticker;

/// Current playback mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackMode {
    /// No trace loaded yet.
    #[default]
    Idle,
    /// Trace loaded, cursor parked.
    Ready,
    /// Trace loaded, cursor advancing once per tick.
    Playing,
}

impl PlaybackMode {
    /// Returns a short label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Ready => "Paused",
            Self::Playing => "Playing",
        }
    }
}

/// Owns a trace, a cursor into it, and the auto-advance timer.
///
/// Every mutation goes through the methods below. Manual navigation
/// (`seek`, `step_forward`, `step_backward`, `reset`) always pauses, and
/// auto-advance stops on its own at the last step; it never wraps.
///
/// With [`TickSource::Thread`] a [`Ticker`] thread produces ticks that the
/// owner applies by calling [`update`](Self::update). With
/// [`TickSource::External`] the host calls [`tick`](Self::tick) directly.
#[derive(Debug, Default)]
pub struct PlaybackController {
    steps: Vec<Step>,
    cursor: usize,
    mode: PlaybackMode,
    config: PlaybackConfig,
    ticker: Option<Ticker>,
}

impl PlaybackController {
    /// Create an idle controller.
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    // -----------------------------------------------------------------------
    // Trace lifecycle
    // -----------------------------------------------------------------------

    /// Replace the held trace, park the cursor on step 0, and stop auto-advance.
    ///
    /// # Errors
    ///
    /// [`PlaybackError::InvalidTrace`] if `steps` is empty. The previously
    /// loaded trace, cursor, and mode are left untouched in that case.
    pub fn load(&mut self, steps: Vec<Step>) -> Result<(), PlaybackError> {
        if steps.is_empty() {
            tracing::warn!("Rejected empty trace");
            return Err(PlaybackError::InvalidTrace);
        }

        self.stop_ticker();
        self.steps = steps;
        self.cursor = 0;
        self.mode = PlaybackMode::Ready;
        tracing::debug!(steps = self.steps.len(), "Trace loaded");
        Ok(())
    }

    /// Drop the trace and return to `Idle`.
    pub fn clear(&mut self) {
        self.stop_ticker();
        self.steps.clear();
        self.cursor = 0;
        self.mode = PlaybackMode::Idle;
        tracing::debug!("Trace cleared");
    }

    // -----------------------------------------------------------------------
    // Manual navigation
    // -----------------------------------------------------------------------

    /// Move the cursor to `index`, clamped to the trace. No-op when idle.
    pub fn seek(&mut self, index: usize) {
        let Some(last) = self.last_index() else {
            return;
        };
        self.halt();
        self.cursor = index.min(last);
        tracing::debug!(cursor = self.cursor, "Seeked");
    }

    /// Advance one step, stopping at the last one.
    pub fn step_forward(&mut self) {
        self.seek(self.cursor.saturating_add(1));
    }

    /// Go back one step, stopping at the first one.
    pub fn step_backward(&mut self) {
        self.seek(self.cursor.saturating_sub(1));
    }

    /// Return to step 0 and stop auto-advance.
    pub fn reset(&mut self) {
        self.seek(0);
    }

    // -----------------------------------------------------------------------
    // Auto-advance
    // -----------------------------------------------------------------------

    /// Start auto-advance. Idempotent while playing; no-op when idle.
    ///
    /// # Errors
    ///
    /// [`PlaybackError::TimerSpawn`] if the ticker thread cannot be started.
    /// The controller stays in `Ready` in that case.
    pub fn play(&mut self) -> Result<(), PlaybackError> {
        match self.mode {
            PlaybackMode::Idle => {
                tracing::debug!("Play ignored: no trace loaded");
                Ok(())
            }
            PlaybackMode::Playing => Ok(()),
            PlaybackMode::Ready => {
                if self.config.tick_source == TickSource::Thread {
                    self.ticker = Some(Ticker::spawn(self.config.interval())?);
                }
                self.mode = PlaybackMode::Playing;
                tracing::debug!(cursor = self.cursor, "Playback started");
                Ok(())
            }
        }
    }

    /// Stop auto-advance. Once this returns no further tick can move the cursor.
    pub fn pause(&mut self) {
        if self.mode == PlaybackMode::Playing {
            self.halt();
            tracing::debug!(cursor = self.cursor, "Playback paused");
        }
    }

    /// Toggle between playing and paused.
    ///
    /// # Errors
    ///
    /// Propagates [`play`](Self::play) failures.
    pub fn toggle_play_pause(&mut self) -> Result<(), PlaybackError> {
        if self.is_playing() {
            self.pause();
            Ok(())
        } else {
            self.play()
        }
    }

    /// Apply one auto-advance tick.
    ///
    /// While playing, moves the cursor forward and returns `true`. A tick that
    /// arrives with the cursor already on the last step pauses instead and
    /// returns `false`. Outside `Playing` this does nothing.
    pub fn tick(&mut self) -> bool {
        if self.mode != PlaybackMode::Playing {
            return false;
        }

        if self.is_at_end() {
            self.halt();
            tracing::debug!(cursor = self.cursor, "Reached end, playback paused");
            return false;
        }

        self.cursor += 1;
        true
    }

    /// Apply every tick the ticker thread has delivered. Never blocks.
    ///
    /// Returns how many steps the cursor advanced.
    pub fn update(&mut self) -> usize {
        let ticks = self.ticker.as_ref().map_or(0, Ticker::drain);
        self.apply_ticks(ticks)
    }

    /// Like [`update`](Self::update), but blocks up to `timeout` for the next
    /// tick first. For hosts that have no event loop of their own.
    pub fn wait_update(&mut self, timeout: Duration) -> usize {
        let Some(ticker) = &self.ticker else {
            return 0;
        };
        let ticks = if ticker.wait(timeout) {
            1 + ticker.drain()
        } else {
            0
        };
        self.apply_ticks(ticks)
    }

    /// Change the auto-advance period. A running ticker is restarted with it.
    ///
    /// # Errors
    ///
    /// [`PlaybackError::TimerSpawn`] if the replacement ticker cannot start;
    /// playback is paused in that case.
    pub fn set_interval(&mut self, interval: Duration) -> Result<(), PlaybackError> {
        let millis = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self.config = self.config.clone().with_interval_ms(millis);
        tracing::debug!(interval_ms = self.config.interval_ms, "Interval changed");

        if self.ticker.is_some() {
            self.stop_ticker();
            match Ticker::spawn(self.config.interval()) {
                Ok(ticker) => self.ticker = Some(ticker),
                Err(err) => {
                    self.mode = PlaybackMode::Ready;
                    return Err(err.into());
                }
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The step under the cursor, `None` when idle.
    pub fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.cursor)
    }

    pub fn current_index(&self) -> usize {
        self.cursor
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn is_playing(&self) -> bool {
        self.mode == PlaybackMode::Playing
    }

    /// Whether "previous" has nowhere to go.
    pub fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    /// Whether "next" has nowhere to go. True when idle.
    pub fn is_at_end(&self) -> bool {
        self.last_index().is_none_or(|last| self.cursor >= last)
    }

    pub fn interval(&self) -> Duration {
        self.config.interval()
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    fn last_index(&self) -> Option<usize> {
        self.steps.len().checked_sub(1)
    }

    fn apply_ticks(&mut self, ticks: usize) -> usize {
        let mut advanced = 0;
        for _ in 0..ticks {
            if !self.is_playing() {
                break;
            }
            if self.tick() {
                advanced += 1;
            }
        }
        advanced
    }

    /// Stop auto-advance and settle in `Ready` (or stay `Idle`).
    fn halt(&mut self) {
        self.stop_ticker();
        if self.mode == PlaybackMode::Playing {
            self.mode = PlaybackMode::Ready;
        }
    }

    fn stop_ticker(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}
