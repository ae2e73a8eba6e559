//! Delayed, cancelable scheduling of the AI's turn.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Posted to the event loop when a scheduled AI turn comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiTurnDue {
    /// Generation of the schedule that produced this event.
    pub generation: u64,
}

/// Schedules the AI's move after a fixed "thinking" delay.
///
/// The timer task never touches the session; it only sends [`AiTurnDue`].
/// Cancelling aborts the timer and bumps the generation, so an event that
/// was already in flight is recognized as stale by [`AiTurnScheduler::claim`].
#[derive(Debug)]
pub struct AiTurnScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<AiTurnDue>,
    pending: Option<JoinHandle<()>>,
    generation: u64,
}

impl AiTurnScheduler {
    /// Creates a scheduler that reports on `tx`.
    pub fn new(delay: Duration, tx: mpsc::UnboundedSender<AiTurnDue>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
            generation: 0,
        }
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Starts a timer, replacing any pending one. Returns its generation.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&mut self) -> u64 {
        self.cancel();
        let generation = self.generation;
        let delay = self.delay;
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the UI has exited.
            let _ = tx.send(AiTurnDue { generation });
        }));
        debug!(generation, "AI turn scheduled");
        generation
    }

    /// Drops the pending timer, if any, and invalidates its generation.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            debug!(generation = self.generation, "AI turn cancelled");
        }
        self.generation += 1;
    }

    /// True while a timer is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Accepts `due` if it belongs to the outstanding timer.
    ///
    /// Returns false for stale events; the caller must then ignore them.
    pub fn claim(&mut self, due: AiTurnDue) -> bool {
        if self.pending.is_some() && due.generation == self.generation {
            self.pending = None;
            true
        } else {
            debug!(
                stale = due.generation,
                current = self.generation,
                "Ignoring stale AI turn"
            );
            false
        }
    }
}

impl Drop for AiTurnScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
