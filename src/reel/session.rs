//! Spin session: the reels of one user-triggered draw.

use super::reel::{Reel, Step};
use super::timing::TimingProfile;
use rand::Rng;
use std::time::Duration;

/// One reel plus its scheduling deadline.
#[derive(Debug, Clone)]
struct Lane {
    reel: Reel,
    next_due: Duration,
}

/// The coordinated set of reels animated together for one draw.
///
/// The session is owned by the caller and discarded when the spin
/// completes or is abandoned; there is no process-wide spin state.
/// Reels are created fresh for each session. Completion is the join of
/// all per-reel settlements, observed via [`SpinSession::is_settled`].
#[derive(Debug, Clone)]
pub struct SpinSession {
    lanes: Vec<Lane>,
    winners: Vec<String>,
    force_stop: bool,
}

impl SpinSession {
    /// Create a session with one reel per pre-selected winner.
    ///
    /// Winners are chosen before the session exists (see
    /// [`crate::query::sample`]); the animation only presents them.
    /// Reel `i` gets the timing profile for index `i`, so reels stop in
    /// a cascade.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, candidates: &[String], winners: Vec<String>) -> Self {
        let mut lanes = Vec::with_capacity(winners.len());
        for (index, winner) in winners.iter().enumerate() {
            let profile = TimingProfile::for_reel(index, rng);
            lanes.push(Lane {
                reel: Reel::new(rng, candidates, winner.clone(), profile),
                next_due: Duration::ZERO,
            });
        }
        tracing::debug!(reels = winners.len(), "spin session started");
        Self {
            lanes,
            winners,
            force_stop: false,
        }
    }

    /// Number of reels in the session.
    pub fn reel_count(&self) -> usize {
        self.lanes.len()
    }

    /// The reel at `index`.
    pub fn reel(&self, index: usize) -> Option<&Reel> {
        self.lanes.get(index).map(|lane| &lane.reel)
    }

    /// Iterate the session's reels in order.
    pub fn reels(&self) -> impl Iterator<Item = &Reel> {
        self.lanes.iter().map(|lane| &lane.reel)
    }

    /// The predetermined winners, in reel order.
    pub fn winners(&self) -> &[String] {
        &self.winners
    }

    /// Currently displayed value of every reel, in order.
    pub fn displays(&self) -> Vec<&str> {
        self.lanes.iter().map(|lane| lane.reel.displayed()).collect()
    }

    /// Set the shared early-stop signal.
    ///
    /// Cooperative: each reel picks the flag up on its next step and
    /// enters its deceleration ramp; an already-scheduled step still
    /// fires.
    pub fn force_stop(&mut self) {
        if !self.force_stop {
            self.force_stop = true;
            tracing::debug!("force stop requested");
        }
    }

    /// Whether the early-stop signal is set.
    pub const fn force_stopped(&self) -> bool {
        self.force_stop
    }

    /// True once every reel has settled.
    pub fn is_settled(&self) -> bool {
        self.lanes.iter().all(|lane| lane.reel.is_settled())
    }

    /// Step every reel whose deadline has passed.
    ///
    /// `now` is the host's elapsed time, shared with every other call
    /// into this session. Returns `true` if any reel stepped (i.e. the
    /// display changed and a redraw is worthwhile).
    pub fn advance(&mut self, now: Duration) -> bool {
        let mut changed = false;
        for lane in &mut self.lanes {
            if lane.reel.is_settled() || now < lane.next_due {
                continue;
            }
            match lane.reel.step(now, self.force_stop) {
                Step::Wait(delay) => lane.next_due = now + delay,
                Step::Settled => {}
            }
            changed = true;
        }
        changed
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

    fn winners(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    /// Drive a session on a fixed simulated tick until settled.
    fn run_to_settle(session: &mut SpinSession) -> Duration {
        let tick = Duration::from_millis(16);
        let mut now = Duration::ZERO;
        for _ in 0..100_000 {
            if session.is_settled() {
                return now;
            }
            session.advance(now);
            now += tick;
        }
        panic!("session never settled");
    }

    #[test]
    fn test_all_reels_settle_on_their_own_winners() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = SpinSession::new(&mut rng, &candidates(), winners(&["B", "D"]));
        run_to_settle(&mut session);
        assert_eq!(session.displays(), vec!["B", "D"]);
        assert_eq!(session.winners(), winners(&["B", "D"]).as_slice());
    }

    #[test]
    fn test_first_reel_settles_before_last() {
        // a single candidate equal to every winner makes landing
        // independent of wrap distance, so the index stagger alone
        // decides the cascade
        let candidates = vec!["W".to_string()];
        let mut rng = StdRng::seed_from_u64(6);
        let mut session = SpinSession::new(&mut rng, &candidates, winners(&["W", "W", "W"]));
        let tick = Duration::from_millis(16);
        let mut now = Duration::ZERO;
        let mut settle_times: Vec<Option<Duration>> = vec![None; 3];
        while !session.is_settled() {
            session.advance(now);
            for (i, reel) in session.reels().enumerate() {
                if reel.is_settled() && settle_times[i].is_none() {
                    settle_times[i] = Some(now);
                }
            }
            now += tick;
            assert!(now < Duration::from_secs(120), "session never settled");
        }
        assert!(settle_times[0].unwrap() < settle_times[2].unwrap());
    }

    #[test]
    fn test_force_stop_shortens_session() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut plain = SpinSession::new(&mut rng, &candidates(), winners(&["A", "C"]));
        let mut stopped = plain.clone();

        let plain_time = run_to_settle(&mut plain);

        stopped.force_stop();
        let stopped_time = run_to_settle(&mut stopped);

        assert!(stopped_time < plain_time);
        assert_eq!(stopped.displays(), vec!["A", "C"]);
    }

    #[test]
    fn test_advance_respects_deadlines() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut session = SpinSession::new(&mut rng, &candidates(), winners(&["A"]));
        assert!(session.advance(Duration::ZERO));
        // next deadline is the base delay away; a 1ms-later advance
        // steps nothing
        assert!(!session.advance(Duration::from_millis(1)));
        assert!(session.advance(Duration::from_millis(90)));
    }

    #[test]
    fn test_settled_session_advances_quietly() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = SpinSession::new(&mut rng, &candidates(), winners(&["D"]));
        let end = run_to_settle(&mut session);
        assert!(!session.advance(end + Duration::from_secs(1)));
        assert_eq!(session.displays(), vec!["D"]);
    }

    #[test]
    fn test_empty_winner_list_is_immediately_settled() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut session = SpinSession::new(&mut rng, &candidates(), Vec::new());
        assert!(session.is_settled());
        assert!(!session.advance(Duration::ZERO));
    }
}
