//! Per-reel timing profiles and the deceleration ramp.
//!
//! The constants stagger reels by index so they decelerate and stop in
//! a visible cascade, earliest index first. They are tuned for look,
//! not load-bearing: the landing logic only requires that the ramped
//! delay eventually reaches the landing threshold.

use rand::Rng;
use std::time::Duration;

const BASE_DELAY_MS: u64 = 90;
const BASE_DELAY_STEP_MS: u64 = 16;
const MAX_DELAY_MS: u64 = 260;
const MAX_DELAY_STEP_MS: u64 = 32;
const RUN_DURATION_MS: u64 = 1300;
const RUN_DURATION_STEP_MS: u64 = 420;
const JITTER_MS: u64 = 240;

/// Fraction of `max_delay` at which a reel is slow enough to land.
const LANDING_FRACTION: u32 = 85;

/// Timing constants for one reel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingProfile {
    /// Inter-step delay at full speed.
    pub base_delay: Duration,
    /// Inter-step delay ceiling while decelerating.
    pub max_delay: Duration,
    /// How long the reel spins at full speed before slowing.
    pub run_duration: Duration,
}

impl TimingProfile {
    /// Profile for the reel at `index`, with randomized run jitter.
    pub fn for_reel<R: Rng + ?Sized>(index: usize, rng: &mut R) -> Self {
        Self::with_jitter(index, rng.gen_range(0..JITTER_MS))
    }

    /// Profile for the reel at `index` with an explicit jitter, for
    /// deterministic callers.
    pub fn with_jitter(index: usize, jitter_ms: u64) -> Self {
        let index = index as u64;
        Self {
            base_delay: Duration::from_millis(BASE_DELAY_MS + index * BASE_DELAY_STEP_MS),
            max_delay: Duration::from_millis(MAX_DELAY_MS + index * MAX_DELAY_STEP_MS),
            run_duration: Duration::from_millis(
                RUN_DURATION_MS + index * RUN_DURATION_STEP_MS + jitter_ms,
            ),
        }
    }

    /// The inter-step delay given how long the reel has been slowing.
    ///
    /// While spinning (`slowing_for` is `None`) the delay is flat at
    /// `base_delay`. While slowing it ramps at half the slowing time,
    /// capped at `max_delay`.
    pub fn delay_after(&self, slowing_for: Option<Duration>) -> Duration {
        match slowing_for {
            None => self.base_delay,
            Some(slow_time) => {
                let headroom = self.max_delay - self.base_delay;
                self.base_delay + (slow_time / 2).min(headroom)
            }
        }
    }

    /// The delay at which a reel is slow enough to land.
    pub fn landing_delay(&self) -> Duration {
        self.max_delay * LANDING_FRACTION / 100
    }
}
