//! Cancellable repeating timer for auto-advance.
//!
//! ```text
//! Owner Thread                     Ticker Thread
//! ┌──────────────────┐            ┌──────────────────┐
//! │ controller       │◄── tick ───│ loop             │
//! │  .update()       │   channel  │  - wait interval │
//! │  - drain ticks   │            │  - send tick     │
//! │  - advance       │── stop ───►│  - exit on stop  │
//! └──────────────────┘            └──────────────────┘
//! ```
//!
//! The ticker thread never touches playback state. It only enqueues ticks;
//! the owner applies them. Cancelling drops the tick receiver and joins the
//! thread, so once [`Ticker::cancel`] returns no tick from this ticker can be
//! observed.

use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

/// Commands sent from the owner to the ticker thread.
enum TickerCommand {
    Stop,
}

/// Handle to a running ticker thread.
pub struct Ticker {
    interval: Duration,
    tick_rx: Option<Receiver<()>>,
    cmd_tx: Option<Sender<TickerCommand>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Ticker {
    /// Start a ticker that delivers one tick every `interval`.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the worker thread cannot be spawned.
    pub fn spawn(interval: Duration) -> std::io::Result<Self> {
        // Ticks are tiny; a small bound keeps a stalled owner from queueing
        // an unbounded burst that would replay all at once.
        let (tick_tx, tick_rx) = channel::bounded::<()>(4);
        let (cmd_tx, cmd_rx) = channel::unbounded::<TickerCommand>();

        let handle = thread::Builder::new()
            .name("playback-ticker".to_string())
            .spawn(move || ticker_thread_main(interval, tick_tx, cmd_rx))?;

        let interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        tracing::info!(interval_ms, "Ticker started");

        Ok(Self {
            interval,
            tick_rx: Some(tick_rx),
            cmd_tx: Some(cmd_tx),
            thread: Some(handle),
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Take every tick delivered so far without blocking.
    pub fn drain(&self) -> usize {
        let Some(rx) = &self.tick_rx else {
            return 0;
        };

        let mut ticks = 0;
        loop {
            match rx.try_recv() {
                Ok(()) => ticks += 1,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("Ticker: tick channel disconnected");
                    break;
                }
            }
        }
        ticks
    }

    /// Block until the next tick arrives or `timeout` elapses.
    ///
    /// Returns `true` if a tick was received. Useful for hosts without their
    /// own event loop.
    pub fn wait(&self, timeout: Duration) -> bool {
        self.tick_rx
            .as_ref()
            .is_some_and(|rx| rx.recv_timeout(timeout).is_ok())
    }

    /// Stop the thread and discard pending ticks. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cmd_tx.take() {
            let _ = tx.send(TickerCommand::Stop);
        }

        // Drop the receiver so a send blocked on a full channel fails.
        self.tick_rx = None;

        if let Some(handle) = self.thread.take() {
            if handle.join().is_err() {
                tracing::warn!("Ticker thread panicked");
            }
            tracing::info!("Ticker stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.thread.is_some()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ticker")
            .field("interval", &self.interval)
            .field("running", &self.is_running())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Ticker thread
// ---------------------------------------------------------------------------

fn ticker_thread_main(interval: Duration, tick_tx: Sender<()>, cmd_rx: Receiver<TickerCommand>) {
    loop {
        // Waiting on the command channel doubles as the sleep, so a stop
        // request wakes the thread immediately.
        match cmd_rx.recv_timeout(interval) {
            Ok(TickerCommand::Stop) => {
                tracing::debug!("Ticker thread: stop command received");
                return;
            }
            Err(RecvTimeoutError::Disconnected) => {
                tracing::debug!("Ticker thread: command channel disconnected, exiting");
                return;
            }
            Err(RecvTimeoutError::Timeout) => {}
        }

        if tick_tx.send(()).is_err() {
            tracing::debug!("Ticker thread: tick channel closed, exiting");
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn delivers_ticks() {
        let ticker = Ticker::spawn(Duration::from_millis(5)).unwrap();
        assert!(ticker.wait(Duration::from_secs(2)), "Should tick within 2 seconds");
        assert!(ticker.is_running());
        assert_eq!(ticker.interval(), Duration::from_millis(5));
    }

    #[test]
    fn drain_counts_queued_ticks() {
        let ticker = Ticker::spawn(Duration::from_millis(5)).unwrap();
        let deadline = Instant::now() + Duration::from_secs(2);
        let mut total = 0;
        while total < 2 && Instant::now() < deadline {
            total += ticker.drain();
            thread::sleep(Duration::from_millis(5));
        }
        assert!(total >= 2);
    }

    #[test]
    fn cancel_is_prompt_and_idempotent() {
        let mut ticker = Ticker::spawn(Duration::from_secs(60)).unwrap();
        let started = Instant::now();
        ticker.cancel();
        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(!ticker.is_running());

        ticker.cancel();
        assert_eq!(ticker.drain(), 0);
        assert!(!ticker.wait(Duration::from_millis(1)));
    }

    #[test]
    fn cancel_discards_pending_ticks() {
        let mut ticker = Ticker::spawn(Duration::from_millis(5)).unwrap();
        thread::sleep(Duration::from_millis(40));
        ticker.cancel();
        assert_eq!(ticker.drain(), 0);
    }
}
