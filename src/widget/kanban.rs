//! Kanban Widget: board viewer with per-column card lists.
//!
//! Left/Right move between columns, Up/Down between cards in the
//! focused column, `[` and `]` switch boards, Enter toggles the detail
//! pane for the focused card.

use super::traits::Widget;
use crate::actor::{InputEvent, KeyCode};
use crate::buffer::{Buffer, Cell, Modifiers, Rgb};
use crate::data::{cards_for_column, Card, KanbanDoc};
use crate::layout::Rect;

/// Configuration for the kanban widget.
#[derive(Debug, Clone)]
pub struct KanbanConfig {
    /// Page background.
    pub bg: Rgb,
    /// Primary text color.
    pub fg: Rgb,
    /// Muted text (counts, metadata).
    pub muted_fg: Rgb,
    /// Accent color (focused card, column headers).
    pub accent: Rgb,
}

impl Default for KanbanConfig {
    fn default() -> Self {
        Self {
            bg: Rgb::new(24, 20, 28),
            fg: Rgb::new(220, 220, 220),
            muted_fg: Rgb::new(140, 135, 150),
            accent: Rgb::new(170, 140, 255),
        }
    }
}

/// A kanban board viewer.
#[derive(Debug)]
pub struct KanbanWidget {
    doc: KanbanDoc,
    board_index: usize,
    column_cursor: usize,
    card_cursor: usize,
    show_detail: bool,
    bounds: Rect,
    config: KanbanConfig,
    dirty: bool,
}

impl KanbanWidget {
    /// Create the widget over a loaded kanban document.
    pub fn new(bounds: Rect, doc: KanbanDoc) -> Self {
        Self {
            doc,
            board_index: 0,
            column_cursor: 0,
            card_cursor: 0,
            show_detail: false,
            bounds,
            config: KanbanConfig::default(),
            dirty: true,
        }
    }

    /// The active board, if the document has any.
    pub fn board(&self) -> Option<&crate::data::Board> {
        self.doc.boards.get(self.board_index)
    }

    /// Cards of the focused column, in document order.
    pub fn focused_column_cards(&self) -> Vec<&Card> {
        self.board().map_or_else(Vec::new, |board| {
            board
                .columns
                .get(self.column_cursor)
                .map_or_else(Vec::new, |column| {
                    cards_for_column(&self.doc.cards, &board.id, &column.id)
                })
        })
    }

    /// The focused card, if the focused column has any.
    pub fn focused_card(&self) -> Option<&Card> {
        self.focused_column_cards().get(self.card_cursor).copied()
    }

    fn switch_board(&mut self, delta: isize) {
        if self.doc.boards.is_empty() {
            return;
        }
        let len = self.doc.boards.len() as isize;
        let next = (self.board_index as isize + delta).rem_euclid(len);
        #[allow(clippy::cast_sign_loss)]
        {
            self.board_index = next as usize;
        }
        self.column_cursor = 0;
        self.card_cursor = 0;
        self.show_detail = false;
        self.dirty = true;
    }

    fn clamp_card_cursor(&mut self) {
        let cards = self.focused_column_cards().len();
        if cards == 0 {
            self.card_cursor = 0;
        } else if self.card_cursor >= cards {
            self.card_cursor = cards - 1;
        }
    }

    fn preview_line(card: &Card, field: &str) -> Option<String> {
        match field {
            "title" => None, // always drawn separately
            "tags" if !card.tags.is_empty() => Some(card.tags.join(", ")),
            "points" => card.points.map(|p| format!("{p} pt")),
            "owner" => card.owner.as_ref().map(|o| format!("Owner: {o}")),
            "due" => card.due.as_ref().map(|d| format!("Due: {d}")),
            _ => None,
        }
    }

    fn render_board(&self, buffer: &mut Buffer, area: Rect) {
        let Some(board) = self.board() else {
            buffer.draw_str(area.x + 1, area.y, "No boards to show", self.config.muted_fg, self.config.bg);
            return;
        };

        let header = format!(
            "{}  ({}/{})  preview: {}",
            board.name,
            self.board_index + 1,
            self.doc.boards.len(),
            board.preview_fields().join(" · "),
        );
        buffer.draw_str_with(area.x + 1, area.y, &header, self.config.fg, self.config.bg, Modifiers::BOLD);

        let body = Rect::new(area.x, area.y + 2, area.width, area.height.saturating_sub(2));
        #[allow(clippy::cast_possible_truncation)]
        let columns = body.columns(board.columns.len().max(1) as u16, 2);
        for (col_index, (column, rect)) in board.columns.iter().zip(columns).enumerate() {
            let cards = cards_for_column(&self.doc.cards, &board.id, &column.id);
            let focused_column = col_index == self.column_cursor;
            let title_fg = if focused_column { self.config.accent } else { self.config.muted_fg };
            let title = format!("{} ({})", column.name, cards.len());
            buffer.draw_str_with(rect.x, rect.y, &title, title_fg, self.config.bg, Modifiers::UNDERLINE);

            if cards.is_empty() {
                buffer.draw_str(rect.x, rect.y + 1, "Empty", self.config.muted_fg, self.config.bg);
                continue;
            }

            let mut y = rect.y + 1;
            for (card_index, card) in cards.iter().enumerate() {
                if y >= rect.bottom() {
                    break;
                }
                let focused = focused_column && card_index == self.card_cursor;
                let (fg, modifiers) = if focused {
                    (self.config.accent, Modifiers::BOLD)
                } else {
                    (self.config.fg, Modifiers::empty())
                };
                let marker = if focused { "▸ " } else { "  " };
                buffer.draw_str_with(
                    rect.x,
                    y,
                    &format!("{marker}{}", card.display_title()),
                    fg,
                    self.config.bg,
                    modifiers,
                );
                y += 1;
                for field in board.preview_fields() {
                    if y >= rect.bottom() {
                        break;
                    }
                    if let Some(line) = Self::preview_line(card, field) {
                        buffer.draw_str(rect.x + 2, y, &line, self.config.muted_fg, self.config.bg);
                        y += 1;
                    }
                }
            }
        }
    }

    fn render_detail(&self, buffer: &mut Buffer, area: Rect) {
        let Some(card) = self.focused_card() else {
            return;
        };
        let Some(board) = self.board() else {
            return;
        };
        buffer.fill_rect(area, Cell::new(' ').with_bg(self.config.bg));
        buffer.draw_box(area, self.config.accent, self.config.bg);
        let inner = area.shrink(1);
        if inner.is_empty() {
            return;
        }
        let mut y = inner.y;
        buffer.draw_str_with(inner.x, y, card.display_title(), self.config.fg, self.config.bg, Modifiers::BOLD);
        y += 1;
        let column_name = board
            .columns
            .get(self.column_cursor)
            .map_or("", |c| c.name.as_str());
        let mut meta = vec![format!("Column: {column_name}")];
        if !card.tags.is_empty() {
            meta.push(format!("Tags: {}", card.tags.join(", ")));
        }
        if let Some(points) = card.points {
            meta.push(format!("Points: {points} pt"));
        }
        if let Some(owner) = &card.owner {
            meta.push(format!("Owner: {owner}"));
        }
        if let Some(due) = &card.due {
            meta.push(format!("Due: {due}"));
        }
        for line in meta {
            if y >= inner.bottom() {
                return;
            }
            buffer.draw_str(inner.x, y, &line, self.config.muted_fg, self.config.bg);
            y += 1;
        }
        if let Some(details) = &card.details {
            if y < inner.bottom() {
                buffer.draw_str(inner.x, y + 1, details, self.config.fg, self.config.bg);
            }
        }
    }
}

impl Widget for KanbanWidget {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.dirty = true;
    }

    fn render(&self, buffer: &mut Buffer) {
        buffer.fill_rect(self.bounds, Cell::new(' ').with_bg(self.config.bg));
        self.render_board(buffer, self.bounds);
        if self.show_detail {
            let detail = self.bounds.shrink(4);
            self.render_detail(buffer, detail);
        }
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        if let InputEvent::Key { code, .. } = event {
            match code {
                KeyCode::Char('[') => {
                    self.switch_board(-1);
                    return true;
                }
                KeyCode::Char(']') => {
                    self.switch_board(1);
                    return true;
                }
                KeyCode::Left => {
                    self.column_cursor = self.column_cursor.saturating_sub(1);
                    self.clamp_card_cursor();
                    self.dirty = true;
                    return true;
                }
                KeyCode::Right => {
                    let columns = self.board().map_or(0, |b| b.columns.len());
                    if self.column_cursor + 1 < columns {
                        self.column_cursor += 1;
                    }
                    self.clamp_card_cursor();
                    self.dirty = true;
                    return true;
                }
                KeyCode::Up => {
                    self.card_cursor = self.card_cursor.saturating_sub(1);
                    self.dirty = true;
                    return true;
                }
                KeyCode::Down => {
                    self.card_cursor += 1;
                    self.clamp_card_cursor();
                    self.dirty = true;
                    return true;
                }
                KeyCode::Enter => {
                    self.show_detail = !self.show_detail && self.focused_card().is_some();
                    self.dirty = true;
                    return true;
                }
                KeyCode::Esc if self.show_detail => {
                    self.show_detail = false;
                    self.dirty = true;
                    return true;
                }
                _ => {}
            }
        }
        false
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}
