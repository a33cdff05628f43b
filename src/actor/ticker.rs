//! Ticker Actor: Dedicated thread for generating timing events.
//!
//! The ticker is the host scheduler for every animation in the crate:
//! reel state machines never read the wall clock themselves, they are
//! advanced with the elapsed time carried by each [`Tick`].

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// A tick event sent at regular intervals.
#[derive(Debug, Clone, Copy)]
pub struct Tick {
    /// Frame number (monotonically increasing).
    pub frame: u64,
    /// Time elapsed since the ticker was started.
    pub elapsed: Duration,
}

/// Ticker actor that generates regular timing events.
pub struct TickerActor {
    /// Handle to the ticker thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Receiver for tick events.
    tick_rx: Receiver<Tick>,
}

impl TickerActor {
    /// Spawn a new ticker actor with the given interval.
    ///
    /// `interval` is the time between ticks; 16ms gives roughly 60
    /// frames per second.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the ticker thread.
    pub fn spawn(interval: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        // Bounded channel with a small buffer so ticks never queue up;
        // a slow consumer simply observes a larger elapsed jump.
        let (tick_tx, tick_rx) = bounded(2);

        let handle = thread::Builder::new()
            .name("drumroll-ticker".to_string())
            .spawn(move || {
                Self::run_loop(&tick_tx, &shutdown_clone, interval);
            })
            .expect("Failed to spawn ticker thread");

        Self {
            handle: Some(handle),
            shutdown,
            tick_rx,
        }
    }

    /// Get a reference to the tick receiver.
    ///
    /// Use this with `select!` alongside the input receiver for
    /// event-driven loops.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Tick> {
        &self.tick_rx
    }

    /// Signal the ticker to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the ticker thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main ticker loop.
    fn run_loop(tick_tx: &Sender<Tick>, shutdown: &Arc<AtomicBool>, interval: Duration) {
        let start = Instant::now();
        let mut frame = 0u64;
        let mut next_tick = start + interval;

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            let now = Instant::now();
            if now >= next_tick {
                let tick = Tick {
                    frame,
                    elapsed: now - start,
                };

                // Non-blocking send: if the buffer is full the consumer
                // is behind, and this tick is dropped rather than queued.
                match tick_tx.try_send(tick) {
                    Ok(()) | Err(TrySendError::Full(_)) => {}
                    Err(TrySendError::Disconnected(_)) => break,
                }

                frame += 1;
                next_tick += interval;

                // If we fell badly behind, resynchronize instead of
                // firing a burst of catch-up ticks.
                if next_tick < now {
                    next_tick = now + interval;
                }
            }

            let sleep_for = next_tick.saturating_duration_since(Instant::now());
            if !sleep_for.is_zero() {
                thread::sleep(sleep_for.min(interval));
            }
        }
    }
}

impl Drop for TickerActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_emits_monotonic_frames() {
        let ticker = TickerActor::spawn(Duration::from_millis(5));
        let first = ticker
            .receiver()
            .recv_timeout(Duration::from_secs(1))
            .expect("first tick");
        let second = ticker
            .receiver()
            .recv_timeout(Duration::from_secs(1))
            .expect("second tick");
        assert!(second.frame > first.frame);
        assert!(second.elapsed >= first.elapsed);
        ticker.join();
    }

    #[test]
    fn test_ticker_shutdown_stops_thread() {
        let ticker = TickerActor::spawn(Duration::from_millis(5));
        ticker.shutdown();
        ticker.join();
    }
}
