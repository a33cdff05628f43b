//! Gallery Widget: searchable, tag-filtered card browser.
//!
//! List on the left, detail of the selected card on the right. Typing
//! edits the search box; Left/Right walk the tag rail and Tab toggles
//! the tag under the cursor.

use super::text_input::{TextInput, TextInputConfig};
use super::traits::Widget;
use crate::actor::{InputEvent, KeyCode};
use crate::buffer::{Buffer, Cell, Modifiers, Rgb};
use crate::data::GalleryItem;
use crate::layout::Rect;
use crate::query::{collect_tags, Filter};
use std::time::Duration;

/// Configuration for the gallery widget.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Page background.
    pub bg: Rgb,
    /// Primary text color.
    pub fg: Rgb,
    /// Muted text (descriptions, counts).
    pub muted_fg: Rgb,
    /// Accent color (selection, active tags).
    pub accent: Rgb,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            bg: Rgb::new(20, 20, 30),
            fg: Rgb::new(220, 220, 220),
            muted_fg: Rgb::new(140, 140, 150),
            accent: Rgb::new(120, 180, 255),
        }
    }
}

/// A searchable gallery of tagged cards.
#[derive(Debug)]
pub struct GalleryWidget {
    items: Vec<GalleryItem>,
    tags: Vec<String>,
    filter: Filter,
    tag_cursor: usize,
    selected: usize,
    search: TextInput,
    bounds: Rect,
    config: GalleryConfig,
    dirty: bool,
}

impl GalleryWidget {
    /// Create the widget over a loaded gallery document.
    pub fn new(bounds: Rect, items: Vec<GalleryItem>) -> Self {
        let tags = collect_tags(items.iter().map(|item| item.tags.as_slice()));
        let search = TextInput::with_config(
            Rect::new(bounds.x, bounds.y, bounds.width, 1),
            TextInputConfig {
                placeholder: String::from("Search by title"),
                ..TextInputConfig::default()
            },
        );
        Self {
            items,
            tags,
            filter: Filter::default(),
            tag_cursor: 0,
            selected: 0,
            search,
            bounds,
            config: GalleryConfig::default(),
            dirty: true,
        }
    }

    /// Items passing the current filter, in document order.
    pub fn visible_items(&self) -> Vec<&GalleryItem> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(&item.title, &item.tags))
            .collect()
    }

    /// The currently selected item, if any survive the filter.
    pub fn selected_item(&self) -> Option<&GalleryItem> {
        self.visible_items().get(self.selected).copied()
    }

    /// The active filter state.
    pub const fn filter(&self) -> &Filter {
        &self.filter
    }

    fn sync_filter(&mut self) {
        self.filter.query = self.search.content().trim().to_string();
        self.clamp_selection();
        self.dirty = true;
    }

    fn clamp_selection(&mut self) {
        let visible = self.visible_items().len();
        if visible == 0 {
            self.selected = 0;
        } else if self.selected >= visible {
            self.selected = visible - 1;
        }
    }

    fn toggle_tag_under_cursor(&mut self) {
        if let Some(tag) = self.tags.get(self.tag_cursor).cloned() {
            self.filter.toggle_tag(&tag);
            self.clamp_selection();
            self.dirty = true;
        }
    }

    fn render_tag_rail(&self, buffer: &mut Buffer, y: u16) {
        let mut x = self.bounds.x + 1;
        for (i, tag) in self.tags.iter().enumerate() {
            let active = self.filter.selected_tags.contains(tag);
            let mut modifiers = Modifiers::empty();
            if active {
                modifiers |= Modifiers::REVERSED;
            }
            if i == self.tag_cursor {
                modifiers |= Modifiers::UNDERLINE;
            }
            let fg = if active { self.config.accent } else { self.config.muted_fg };
            let label = format!("[{tag}]");
            x += buffer.draw_str_with(x, y, &label, fg, self.config.bg, modifiers) + 1;
            if x >= self.bounds.right() {
                break;
            }
        }
    }

    fn render_detail(&self, buffer: &mut Buffer, area: Rect) {
        let Some(item) = self.selected_item() else {
            return;
        };
        buffer.draw_box(area, self.config.muted_fg, self.config.bg);
        let inner = area.shrink(1);
        if inner.is_empty() {
            return;
        }
        let mut y = inner.y;
        buffer.draw_str_with(inner.x, y, &item.title, self.config.fg, self.config.bg, Modifiers::BOLD);
        y += 2;
        for line in wrap_text(&item.description, inner.width as usize) {
            if y >= inner.bottom() {
                return;
            }
            buffer.draw_str(inner.x, y, &line, self.config.muted_fg, self.config.bg);
            y += 1;
        }
        y += 1;
        if y < inner.bottom() {
            buffer.draw_str(inner.x, y, &item.image_url, self.config.accent, self.config.bg);
            y += 1;
        }
        if y < inner.bottom() {
            let tags = item.tags.join(", ");
            buffer.draw_str(inner.x, y, &tags, self.config.muted_fg, self.config.bg);
        }
    }
}

/// Greedy word wrap to a column budget.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

impl Widget for GalleryWidget {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.search
            .set_bounds(Rect::new(bounds.x, bounds.y, bounds.width, 1));
        self.dirty = true;
    }

    fn render(&self, buffer: &mut Buffer) {
        buffer.fill_rect(self.bounds, Cell::new(' ').with_bg(self.config.bg));
        self.search.render(buffer);
        self.render_tag_rail(buffer, self.bounds.y + 1);

        let visible = self.visible_items();
        let count_y = self.bounds.y + 2;
        let count_line = format!("{} items", visible.len());
        buffer.draw_str(self.bounds.x + 1, count_y, &count_line, self.config.muted_fg, self.config.bg);

        let body = Rect::new(
            self.bounds.x,
            count_y + 1,
            self.bounds.width,
            self.bounds.bottom().saturating_sub(count_y + 1),
        );
        if visible.is_empty() {
            buffer.draw_str(
                body.x + 1,
                body.y + 1,
                "Nothing matches the filter",
                self.config.muted_fg,
                self.config.bg,
            );
            return;
        }

        let (list, detail) = body.split_horizontal(body.width / 2);
        for (row, item) in visible.iter().enumerate().take(list.height as usize) {
            #[allow(clippy::cast_possible_truncation)]
            let y = list.y + row as u16;
            let is_selected = row == self.selected;
            let (fg, modifiers) = if is_selected {
                (self.config.accent, Modifiers::BOLD)
            } else {
                (self.config.fg, Modifiers::empty())
            };
            let marker = if is_selected { "▸ " } else { "  " };
            let line = format!("{marker}{}", item.title);
            buffer.draw_str_with(list.x + 1, y, &line, fg, self.config.bg, modifiers);
        }
        self.render_detail(buffer, detail);
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        if let InputEvent::Key { code, modifiers } = event {
            match code {
                KeyCode::Up => {
                    self.selected = self.selected.saturating_sub(1);
                    self.dirty = true;
                    return true;
                }
                KeyCode::Down => {
                    self.selected += 1;
                    self.clamp_selection();
                    self.dirty = true;
                    return true;
                }
                KeyCode::Left => {
                    self.tag_cursor = self.tag_cursor.saturating_sub(1);
                    self.dirty = true;
                    return true;
                }
                KeyCode::Right => {
                    if self.tag_cursor + 1 < self.tags.len() {
                        self.tag_cursor += 1;
                    }
                    self.dirty = true;
                    return true;
                }
                KeyCode::Tab => {
                    self.toggle_tag_under_cursor();
                    return true;
                }
                KeyCode::Char(_) | KeyCode::Backspace | KeyCode::Delete
                    if !modifiers.control && !modifiers.alt =>
                {
                    if self.search.handle_input(event) {
                        self.sync_filter();
                        return true;
                    }
                }
                _ => {}
            }
        }
        false
    }

    fn tick(&mut self, now: Duration) {
        self.search.tick(now);
        if self.search.needs_redraw() {
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
