//! Text Input Widget: Single-line text input with cursor.
//!
//! Used for the search boxes and for option entry on the prize pages.
//! Cursor movement and deletion operate on grapheme clusters, so
//! combining marks and emoji behave as single characters.

use super::traits::Widget;
use crate::actor::{InputEvent, KeyCode};
use crate::buffer::{Buffer, Cell, Rgb};
use crate::layout::Rect;
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;

/// Configuration for the text input widget.
#[derive(Debug, Clone)]
pub struct TextInputConfig {
    /// Foreground color for text.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Cursor color.
    pub cursor_fg: Rgb,
    /// Placeholder text shown when empty.
    pub placeholder: String,
    /// Placeholder text color.
    pub placeholder_fg: Rgb,
    /// Prompt prefix (e.g., "> ").
    pub prompt: String,
    /// Prompt color.
    pub prompt_fg: Rgb,
}

impl Default for TextInputConfig {
    fn default() -> Self {
        Self {
            fg: Rgb::WHITE,
            bg: Rgb::new(30, 30, 30),
            cursor_fg: Rgb::new(0, 255, 255),
            placeholder: String::new(),
            placeholder_fg: Rgb::new(100, 100, 100),
            prompt: String::from("> "),
            prompt_fg: Rgb::new(0, 255, 255),
        }
    }
}

/// A single-line text input widget with cursor and editing support.
#[derive(Debug)]
pub struct TextInput {
    /// Current text content.
    content: String,
    /// Cursor position as a grapheme index (0..=grapheme count).
    cursor: usize,
    /// Widget bounds.
    bounds: Rect,
    /// Whether this widget has focus.
    focused: bool,
    /// Configuration.
    config: TextInputConfig,
    /// Tick counter for cursor blinking.
    blink: u64,
    /// Needs redraw flag.
    dirty: bool,
}

impl TextInput {
    /// Create a new text input widget with the given bounds.
    pub fn new(bounds: Rect) -> Self {
        Self::with_config(bounds, TextInputConfig::default())
    }

    /// Create a new text input widget with custom configuration.
    pub const fn with_config(bounds: Rect, config: TextInputConfig) -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            bounds,
            focused: true,
            config,
            blink: 0,
            dirty: true,
        }
    }

    /// Get the current text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Set the content, moving cursor to end.
    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.cursor = self.grapheme_count();
        self.dirty = true;
    }

    /// Clear the content.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
        self.dirty = true;
    }

    /// Check if the input is empty.
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Set focus state.
    pub const fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.dirty = true;
    }

    /// Check if focused.
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Cursor position in graphemes.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    fn grapheme_count(&self) -> usize {
        self.content.graphemes(true).count()
    }

    /// Byte offset of the grapheme boundary at `index`.
    fn byte_offset(&self, index: usize) -> usize {
        self.content
            .grapheme_indices(true)
            .nth(index)
            .map_or(self.content.len(), |(offset, _)| offset)
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
        self.dirty = true;
    }

    /// Delete the grapheme before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.content.replace_range(start..end, "");
        self.cursor -= 1;
        self.dirty = true;
    }

    /// Delete the grapheme at the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.grapheme_count() {
            return;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.content.replace_range(start..end, "");
        self.dirty = true;
    }

    /// Move the cursor one grapheme left.
    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.dirty = true;
        }
    }

    /// Move the cursor one grapheme right.
    pub fn cursor_right(&mut self) {
        if self.cursor < self.grapheme_count() {
            self.cursor += 1;
            self.dirty = true;
        }
    }

    /// Move the cursor to the start.
    pub fn cursor_home(&mut self) {
        self.cursor = 0;
        self.dirty = true;
    }

    /// Move the cursor to the end.
    pub fn cursor_end(&mut self) {
        self.cursor = self.grapheme_count();
        self.dirty = true;
    }

    /// Take the content, clearing the input (Enter-to-commit flows).
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        self.dirty = true;
        std::mem::take(&mut self.content)
    }
}

impl Widget for TextInput {
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

        let mut offset = x;
        offset += buffer.draw_str(offset, y, &self.config.prompt, self.config.prompt_fg, self.config.bg);

        if self.content.is_empty() && !self.config.placeholder.is_empty() {
            buffer.draw_str(
                offset,
                y,
                &self.config.placeholder,
                self.config.placeholder_fg,
                self.config.bg,
            );
        } else {
            // Keep the cursor in view by scrolling whole graphemes off
            // the left edge.
            let text_width = (self.bounds.right().saturating_sub(offset)) as usize;
            if text_width == 0 {
                return;
            }
            let scroll = self.cursor.saturating_sub(text_width.saturating_sub(1));
            let visible: String = self
                .content
                .graphemes(true)
                .skip(scroll)
                .take(text_width)
                .collect();
            buffer.draw_str(offset, y, &visible, self.config.fg, self.config.bg);

            #[allow(clippy::cast_possible_truncation)]
            let cursor_x = offset + (self.cursor - scroll) as u16;
            if self.focused && self.blink % 30 < 15 && cursor_x < self.bounds.right() {
                buffer.set(
                    cursor_x,
                    y,
                    Cell::new('█').with_fg(self.config.cursor_fg).with_bg(self.config.bg),
                );
            }
        }
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.focused {
            return false;
        }

        if let InputEvent::Key { code, modifiers } = event {
            match code {
                KeyCode::Char(c) => {
                    if !modifiers.control && !modifiers.alt {
                        self.insert_char(*c);
                        return true;
                    }
                }
                KeyCode::Backspace => {
                    self.backspace();
                    return true;
                }
                KeyCode::Delete => {
                    self.delete();
                    return true;
                }
                KeyCode::Left => {
                    self.cursor_left();
                    return true;
                }
                KeyCode::Right => {
                    self.cursor_right();
                    return true;
                }
                KeyCode::Home => {
                    self.cursor_home();
                    return true;
                }
                KeyCode::End => {
                    self.cursor_end();
                    return true;
                }
                _ => {}
            }
        }

        false
    }

    fn tick(&mut self, _now: Duration) {
        self.blink += 1;
        if self.focused {
            self.dirty = true;
        }
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}
