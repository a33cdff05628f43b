//! Actor layer: message-passing threads for input and timing.
//!
//! Two small actors feed the single cooperative main loop over crossbeam
//! channels:
//! - **Input Actor**: polls terminal events, forwards them as [`InputEvent`]
//! - **Ticker Actor**: emits regular [`Tick`]s that drive animation
//!
//! All widget state lives on the consuming thread; the actors only ever
//! send messages, so no locking discipline is needed beyond the channels.

mod input;
mod messages;
mod ticker;

pub use input::InputActor;
pub use messages::{InputEvent, KeyCode, KeyModifiers};
pub use ticker::{Tick, TickerActor};
