//! One reel: a tick-driven state machine over a mounted sequence.

use super::sequence::build_sequence;
use super::timing::TimingProfile;
use rand::Rng;
use std::time::Duration;

/// Hard ceiling on steps per reel.
///
/// The landing zone makes the landing condition reachable by
/// construction, but nothing in the timing model enforces an iteration
/// bound, so a reel that somehow never observes its landing condition
/// force-lands here instead of spinning forever.
pub const STEP_CEILING: u32 = 512;

/// How many copies of the final value are mounted at settlement.
const SETTLE_WINDOW: usize = 3;

/// Animation phase of a reel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReelPhase {
    /// Advancing at the flat base delay.
    Spinning,
    /// Decelerating toward the landing threshold.
    Slowing,
    /// Landed; the displayed value is fixed.
    Settled,
}

/// Outcome of one step transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Schedule the next step after this delay.
    Wait(Duration),
    /// The reel has landed on its final value.
    Settled,
}

/// One spinning column.
///
/// Reels are created fresh per spin session and never reused. All
/// timing is supplied by the caller through [`Reel::step`]; the reel
/// itself never reads a clock.
#[derive(Debug, Clone)]
pub struct Reel {
    sequence: Vec<String>,
    position: usize,
    final_value: String,
    profile: TimingProfile,
    phase: ReelPhase,
    started_at: Option<Duration>,
    slowing_since: Option<Duration>,
    steps_taken: u32,
}

impl Reel {
    /// Create a reel that will land on `final_value`.
    ///
    /// `candidates` feed the spinning sequence; an empty list mounts a
    /// placeholder instead of failing.
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        candidates: &[String],
        final_value: impl Into<String>,
        profile: TimingProfile,
    ) -> Self {
        let final_value = final_value.into();
        Self {
            sequence: build_sequence(rng, candidates, &final_value),
            position: 0,
            final_value,
            profile,
            phase: ReelPhase::Spinning,
            started_at: None,
            slowing_since: None,
            steps_taken: 0,
        }
    }

    /// Current animation phase.
    pub const fn phase(&self) -> ReelPhase {
        self.phase
    }

    /// Whether the reel has landed.
    pub const fn is_settled(&self) -> bool {
        matches!(self.phase, ReelPhase::Settled)
    }

    /// The value the reel will (or did) land on.
    pub fn final_value(&self) -> &str {
        &self.final_value
    }

    /// The value currently at the display position.
    pub fn displayed(&self) -> &str {
        &self.sequence[self.position]
    }

    /// Timing profile this reel runs with.
    pub const fn profile(&self) -> &TimingProfile {
        &self.profile
    }

    /// Steps taken so far.
    pub const fn steps_taken(&self) -> u32 {
        self.steps_taken
    }

    /// The three values around the display position (previous, current,
    /// next), wrapping. After settlement all three are the final value.
    pub fn window(&self) -> [&str; SETTLE_WINDOW] {
        let len = self.sequence.len();
        [
            &self.sequence[(self.position + len - 1) % len],
            &self.sequence[self.position],
            &self.sequence[(self.position + 1) % len],
        ]
    }

    /// Advance the reel by one step.
    ///
    /// `now` is the host's elapsed time (any monotonic origin, as long
    /// as it is shared across calls); `force_stop` is the session's
    /// shared early-stop signal. The first call marks the spin start.
    ///
    /// Stepping a settled reel is a no-op that reports [`Step::Settled`]
    /// again; the displayed value never changes after settlement.
    pub fn step(&mut self, now: Duration, force_stop: bool) -> Step {
        if self.is_settled() {
            return Step::Settled;
        }

        let started = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_sub(started);

        self.position = (self.position + 1) % self.sequence.len();
        self.steps_taken += 1;

        // Force-stop enters the deceleration ramp immediately; the ramp
        // is measured from the moment slowing began, so stopping early
        // never lengthens a run.
        let slowing = force_stop || elapsed >= self.profile.run_duration;
        if slowing && self.slowing_since.is_none() {
            self.slowing_since = Some(now);
            self.phase = ReelPhase::Slowing;
        }

        let slowing_for = self.slowing_since.map(|since| now.saturating_sub(since));
        let delay = self.profile.delay_after(slowing_for);

        let slow_enough = slowing && delay >= self.profile.landing_delay();
        let on_final = self.sequence[self.position] == self.final_value;
        if (slow_enough && on_final) || self.steps_taken >= STEP_CEILING {
            self.land();
            return Step::Settled;
        }

        Step::Wait(delay)
    }

    /// Mount the settled window and fix the displayed value.
    fn land(&mut self) {
        self.sequence = vec![self.final_value.clone(); SETTLE_WINDOW];
        self.position = SETTLE_WINDOW / 2;
        self.phase = ReelPhase::Settled;
        tracing::debug!(
            value = %self.final_value,
            steps = self.steps_taken,
            "reel settled"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn candidates() -> Vec<String> {
        ["A", "B", "C", "D"].iter().map(ToString::to_string).collect()
    }

    fn new_reel(seed: u64, index: usize, final_value: &str) -> Reel {
        let mut rng = StdRng::seed_from_u64(seed);
        let profile = TimingProfile::with_jitter(index, 0);
        Reel::new(&mut rng, &candidates(), final_value, profile)
    }

    /// Drive a reel with a simulated clock until it settles.
    ///
    /// Returns the elapsed time at settlement.
    fn run_to_settle(reel: &mut Reel, force_stop_at: Option<Duration>) -> Duration {
        let mut now = Duration::ZERO;
        for _ in 0..10_000 {
            let force = force_stop_at.is_some_and(|at| now >= at);
            match reel.step(now, force) {
                Step::Wait(delay) => now += delay,
                Step::Settled => return now,
            }
        }
        panic!("reel never settled");
    }

    #[test]
    fn test_settles_on_final_value() {
        let mut reel = new_reel(11, 0, "C");
        run_to_settle(&mut reel, None);
        assert!(reel.is_settled());
        assert_eq!(reel.displayed(), "C");
    }

    #[test]
    fn test_settled_window_is_three_copies_centered() {
        let mut reel = new_reel(12, 1, "B");
        run_to_settle(&mut reel, None);
        assert_eq!(reel.window(), ["B", "B", "B"]);
    }

    #[test]
    fn test_final_value_outside_candidates() {
        let mut reel = new_reel(13, 0, "not-a-candidate");
        run_to_settle(&mut reel, None);
        assert_eq!(reel.displayed(), "not-a-candidate");
    }

    #[test]
    fn test_empty_candidates_still_settle() {
        let mut rng = StdRng::seed_from_u64(14);
        let profile = TimingProfile::with_jitter(0, 0);
        let mut reel = Reel::new(&mut rng, &[], "W", profile);
        run_to_settle(&mut reel, None);
        assert_eq!(reel.displayed(), "W");
    }

    #[test]
    fn test_force_stop_never_slower() {
        for seed in 0..8 {
            let mut plain = new_reel(seed, 0, "D");
            let mut stopped = new_reel(seed, 0, "D");
            let plain_time = run_to_settle(&mut plain, None);
            let stopped_time = run_to_settle(&mut stopped, Some(Duration::ZERO));
            assert!(
                stopped_time <= plain_time,
                "seed {seed}: force-stop took {stopped_time:?} vs {plain_time:?}"
            );
        }
    }

    #[test]
    fn test_immediate_force_stop_strictly_faster() {
        let mut plain = new_reel(21, 2, "A");
        let mut stopped = new_reel(21, 2, "A");
        let plain_time = run_to_settle(&mut plain, None);
        let stopped_time = run_to_settle(&mut stopped, Some(Duration::ZERO));
        assert!(stopped_time < plain_time);
        assert_eq!(stopped.displayed(), "A");
    }

    #[test]
    fn test_step_after_settle_is_inert() {
        let mut reel = new_reel(15, 0, "A");
        let settled_at = run_to_settle(&mut reel, None);
        assert_eq!(reel.step(settled_at + Duration::from_secs(5), false), Step::Settled);
        assert_eq!(reel.displayed(), "A");
        assert_eq!(reel.window(), ["A", "A", "A"]);
    }

    #[test]
    fn test_phase_progression() {
        let mut reel = new_reel(16, 0, "B");
        assert_eq!(reel.phase(), ReelPhase::Spinning);
        let mut now = Duration::ZERO;
        let mut saw_slowing = false;
        for _ in 0..10_000 {
            match reel.step(now, false) {
                Step::Wait(delay) => {
                    if reel.phase() == ReelPhase::Slowing {
                        saw_slowing = true;
                    }
                    now += delay;
                }
                Step::Settled => break,
            }
        }
        assert!(saw_slowing);
        assert_eq!(reel.phase(), ReelPhase::Settled);
    }

    #[test]
    fn test_step_ceiling_forces_landing() {
        let mut reel = new_reel(17, 0, "E");
        // A clock that never advances can never reach the ramp, so only
        // the ceiling can end the run.
        let mut steps = 0u32;
        loop {
            steps += 1;
            match reel.step(Duration::ZERO, false) {
                Step::Wait(_) => assert!(steps < STEP_CEILING + 1, "ceiling not enforced"),
                Step::Settled => break,
            }
        }
        assert_eq!(steps, STEP_CEILING);
        assert_eq!(reel.displayed(), "E");
    }

    #[test]
    fn test_delays_ramp_while_slowing() {
        let mut reel = new_reel(18, 0, "C");
        let mut now = Duration::ZERO;
        let mut last_delay = Duration::ZERO;
        let mut ramped = false;
        for _ in 0..10_000 {
            match reel.step(now, false) {
                Step::Wait(delay) => {
                    if reel.phase() == ReelPhase::Slowing && delay > last_delay {
                        ramped = true;
                    }
                    last_delay = delay;
                    now += delay;
                }
                Step::Settled => break,
            }
        }
        assert!(ramped, "delay never grew during deceleration");
    }
}
