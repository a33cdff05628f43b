//! Reel Animation Engine.
//!
//! The slot page's spinning columns. Winners are chosen before any
//! animation starts; each reel then spins a long shuffled sequence and
//! decelerates until it lands on its assigned final value, so the
//! animation is pure presentation over a predetermined outcome.
//!
//! The engine is host-agnostic: a reel is a state machine with phases
//! {Spinning, Slowing, Settled} advanced by [`Reel::step`], which takes
//! the host's elapsed time and returns when the next step is due. The
//! crate's ticker actor (or a test's simulated clock) supplies time;
//! nothing in here reads the wall clock or sleeps.

mod driver;
mod reel;
mod sequence;
mod session;
mod timing;

pub use driver::{run_session, spin};
pub use reel::{Reel, ReelPhase, Step, STEP_CEILING};
pub use sequence::{build_sequence, MIN_SEQUENCE_LEN, PLACEHOLDER};
pub use session::SpinSession;
pub use timing::TimingProfile;
