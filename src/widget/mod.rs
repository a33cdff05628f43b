//! Page widgets and the building blocks they share.
//!
//! Every page of the site has a widget counterpart: gallery, kanban,
//! knowledge base, stats, and the two prize drawings (slot machine and
//! random picker). They all implement [`Widget`] and are composed by
//! the shell in `demos/site.rs`.

mod gallery;
mod kanban;
mod kb;
mod picker;
mod slot;
mod stats;
mod status_bar;
mod text_input;
mod traits;

pub use gallery::{GalleryConfig, GalleryWidget};
pub use kanban::{KanbanConfig, KanbanWidget};
pub use kb::{KbConfig, KbWidget};
pub use picker::{PickerConfig, PickerWidget};
pub use slot::{SlotConfig, SlotWidget};
pub use stats::{StatsConfig, StatsWidget};
pub use status_bar::{StatusBar, StatusBarConfig, Tone};
pub use text_input::{TextInput, TextInputConfig};
pub use traits::Widget;
