//! Status Bar Widget: one-line status message with tone coloring.
//!
//! Pages use this for user-facing feedback ("Spinning…", validation
//! errors, completion notices). The right section carries key hints.

use super::traits::Widget;
use crate::actor::InputEvent;
use crate::buffer::{Buffer, Cell, Rgb};
use crate::layout::Rect;

/// Message tone; picks the foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    /// Neutral progress or guidance.
    #[default]
    Info,
    /// A completed action.
    Success,
    /// A validation or load failure.
    Error,
}

/// Configuration for the status bar widget.
#[derive(Debug, Clone)]
pub struct StatusBarConfig {
    /// Background color.
    pub bg: Rgb,
    /// Message color for [`Tone::Info`].
    pub info_fg: Rgb,
    /// Message color for [`Tone::Success`].
    pub success_fg: Rgb,
    /// Message color for [`Tone::Error`].
    pub error_fg: Rgb,
    /// Key-hint color.
    pub hint_fg: Rgb,
}

impl Default for StatusBarConfig {
    fn default() -> Self {
        Self {
            bg: Rgb::new(40, 40, 40),
            info_fg: Rgb::new(200, 200, 200),
            success_fg: Rgb::new(110, 220, 120),
            error_fg: Rgb::new(235, 100, 100),
            hint_fg: Rgb::new(130, 130, 130),
        }
    }
}

/// A one-line status bar: toned message on the left, hints on the right.
#[derive(Debug)]
pub struct StatusBar {
    message: String,
    tone: Tone,
    hints: String,
    bounds: Rect,
    config: StatusBarConfig,
    dirty: bool,
}

impl StatusBar {
    /// Create a new status bar with the given bounds.
    pub fn new(bounds: Rect) -> Self {
        Self {
            message: String::new(),
            tone: Tone::Info,
            hints: String::new(),
            bounds,
            config: StatusBarConfig::default(),
            dirty: true,
        }
    }

    /// Set the message and its tone.
    pub fn set_message(&mut self, tone: Tone, message: impl Into<String>) {
        self.message = message.into();
        self.tone = tone;
        self.dirty = true;
    }

    /// Set the right-aligned key hints.
    pub fn set_hints(&mut self, hints: impl Into<String>) {
        self.hints = hints.into();
        self.dirty = true;
    }

    /// Current message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Current message tone.
    pub const fn tone(&self) -> Tone {
        self.tone
    }

    const fn message_fg(&self) -> Rgb {
        match self.tone {
            Tone::Info => self.config.info_fg,
            Tone::Success => self.config.success_fg,
            Tone::Error => self.config.error_fg,
        }
    }
}

impl Widget for StatusBar {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.dirty = true;
    }

    fn render(&self, buffer: &mut Buffer) {
        let Rect { x, y, width, .. } = self.bounds;
        buffer.fill_rect(
            Rect::new(x, y, width, 1),
            Cell::new(' ').with_bg(self.config.bg),
        );

        buffer.draw_str(x + 1, y, &self.message, self.message_fg(), self.config.bg);

        let hint_width = self.hints.chars().count().min(width as usize / 2);
        #[allow(clippy::cast_possible_truncation)]
        let hint_x = x + width.saturating_sub(hint_width as u16 + 1);
        buffer.draw_str(hint_x, y, &self.hints, self.config.hint_fg, self.config.bg);
    }

    fn handle_input(&mut self, _event: &InputEvent) -> bool {
        // Status bar doesn't handle input
        false
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_message_and_tone() {
        let mut bar = StatusBar::new(Rect::new(0, 0, 40, 1));
        bar.set_message(Tone::Error, "Add at least one option");
        assert_eq!(bar.message(), "Add at least one option");
        assert_eq!(bar.tone(), Tone::Error);
    }

    #[test]
    fn test_status_bar_renders_message_left() {
        let mut buffer = Buffer::new(40, 1);
        let mut bar = StatusBar::new(Rect::new(0, 0, 40, 1));
        bar.set_message(Tone::Success, "Done");
        bar.render(&mut buffer);
        assert!(buffer.row_text(0).contains("Done"));
    }

    #[test]
    fn test_status_bar_renders_hints_right() {
        let mut buffer = Buffer::new(20, 1);
        let mut bar = StatusBar::new(Rect::new(0, 0, 20, 1));
        bar.set_hints("q quit");
        bar.render(&mut buffer);
        let row = buffer.row_text(0);
        assert!(row.trim_end().ends_with("q quit"));
    }
}
