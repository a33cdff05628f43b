//! Blocking drivers that run a session off the ticker actor.

use super::session::SpinSession;
use crate::actor::TickerActor;
use crate::query::{sample, validate_draw, DrawError};
use std::time::Duration;

/// Run a session to completion against real time.
///
/// Spawns a ticker, feeds its elapsed time into the session until every
/// reel settles, and returns the winners in reel order. This is the
/// headless counterpart of a UI loop that would interleave rendering
/// with the same `advance` calls.
pub fn run_session(session: &mut SpinSession, tick_interval: Duration) -> Vec<String> {
    let ticker = TickerActor::spawn(tick_interval);
    while !session.is_settled() {
        match ticker.receiver().recv() {
            Ok(tick) => {
                session.advance(tick.elapsed);
            }
            Err(_) => break,
        }
    }
    ticker.join();
    tracing::info!(winners = ?session.winners(), "spin complete");
    session.winners().to_vec()
}

/// Validate, draw winners, and run one whole spin.
///
/// `unique` draws without replacement, so each option wins at most one
/// reel.
///
/// # Errors
///
/// Returns a [`DrawError`] when the option list cannot satisfy the
/// request; the animation never starts in that case.
pub fn spin(
    candidates: &[String],
    reel_count: usize,
    unique: bool,
    tick_interval: Duration,
) -> Result<Vec<String>, DrawError> {
    validate_draw(candidates.len(), reel_count, unique)?;
    let mut rng = rand::thread_rng();
    let winners = sample(&mut rng, candidates, reel_count, !unique);
    tracing::info!(reels = reel_count, unique, "spin started");
    let mut session = SpinSession::new(&mut rng, candidates, winners);
    Ok(run_session(&mut session, tick_interval))
}
