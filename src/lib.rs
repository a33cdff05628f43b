//! # Drumroll
//!
//! A terminal widget suite for a personal site's interactive pages:
//! an image-gallery browser, a kanban board viewer, a knowledge-base
//! browser, a statistics leaderboard, and two randomized prize
//! drawings: a multi-reel slot machine and a simpler random picker.
//!
//! ## Core Concepts
//!
//! - **Cell buffer rendering**: widgets draw into a [`Buffer`]; the
//!   terminal layer flushes whole frames in one write
//! - **Actor model**: dedicated threads for input polling and timing
//!   feed one cooperative main loop over channels
//! - **Tick-driven animation**: the reel engine is a plain state
//!   machine advanced with host-supplied elapsed time, so it is unit
//!   testable without a real timer
//! - **Predetermined outcomes**: winners are sampled before a spin
//!   starts; the animation is pure presentation
//!
//! ## Example
//!
//! ```rust,ignore
//! use drumroll::reel::spin;
//! use std::time::Duration;
//!
//! let options: Vec<String> = ["Ada", "Brin", "Cleo"]
//!     .iter().map(ToString::to_string).collect();
//! let winners = spin(&options, 2, true, Duration::from_millis(16))?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod buffer;
pub mod data;
pub mod layout;
pub mod query;
pub mod reel;
pub mod terminal;
pub mod widget;

// Re-exports for convenience
pub use actor::{InputActor, InputEvent, KeyCode, KeyModifiers, Tick, TickerActor};
pub use buffer::{Buffer, Cell, Modifiers, Rgb};
pub use layout::Rect;
pub use reel::{Reel, ReelPhase, SpinSession};
pub use terminal::Screen;
pub use widget::Widget;
