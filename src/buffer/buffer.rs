//! Buffer: A width x height grid of cells.
//!
//! Widgets draw into a `Buffer`; the terminal layer turns a finished
//! buffer into one flushed frame. Drawing helpers are width-aware so
//! wide characters take two columns and never tear at clip edges.

use super::cell::{Cell, Modifiers, Rgb};
use crate::layout::Rect;
use unicode_width::UnicodeWidthChar;

/// A rectangular grid of cells.
#[derive(Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a new buffer filled with blank cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width as usize * height as usize],
        }
    }

    /// Buffer width in columns.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in rows.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Flat index for a coordinate, if in bounds.
    pub fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get a cell by coordinate.
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Write a cell; out-of-bounds writes are ignored.
    ///
    /// Returns `true` if the cell was written.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if let Some(i) = self.index_of(x, y) {
            self.cells[i] = cell;
            true
        } else {
            false
        }
    }

    /// Fill a rectangle with copies of a cell, clipped to the buffer.
    pub fn fill_rect(&mut self, rect: Rect, cell: Cell) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                self.set(x, y, cell);
            }
        }
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Draw a string starting at (x, y), clipped to the buffer edge.
    ///
    /// Wide characters occupy two columns; the continuation column is
    /// blanked with the same colors. A wide character that would cross
    /// the right edge is dropped. Returns the number of columns used.
    pub fn draw_str(&mut self, x: u16, y: u16, text: &str, fg: Rgb, bg: Rgb) -> u16 {
        self.draw_str_with(x, y, text, fg, bg, Modifiers::empty())
    }

    /// [`draw_str`](Self::draw_str) with explicit style modifiers.
    pub fn draw_str_with(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgb,
        bg: Rgb,
        modifiers: Modifiers,
    ) -> u16 {
        let mut cursor = x;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as u16;
            if w == 0 {
                continue;
            }
            if cursor.saturating_add(w) > self.width {
                break;
            }
            self.set(cursor, y, Cell::new(ch).with_fg(fg).with_bg(bg).with_modifiers(modifiers));
            if w == 2 {
                self.set(cursor + 1, y, Cell::new(' ').with_fg(fg).with_bg(bg));
            }
            cursor += w;
        }
        cursor - x
    }

    /// Draw a single-line box border around a rectangle.
    pub fn draw_box(&mut self, rect: Rect, fg: Rgb, bg: Rgb) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let (x0, y0) = (rect.x, rect.y);
        let (x1, y1) = (rect.right() - 1, rect.bottom() - 1);
        for x in x0 + 1..x1 {
            self.set(x, y0, Cell::new('─').with_fg(fg).with_bg(bg));
            self.set(x, y1, Cell::new('─').with_fg(fg).with_bg(bg));
        }
        for y in y0 + 1..y1 {
            self.set(x0, y, Cell::new('│').with_fg(fg).with_bg(bg));
            self.set(x1, y, Cell::new('│').with_fg(fg).with_bg(bg));
        }
        self.set(x0, y0, Cell::new('┌').with_fg(fg).with_bg(bg));
        self.set(x1, y0, Cell::new('┐').with_fg(fg).with_bg(bg));
        self.set(x0, y1, Cell::new('└').with_fg(fg).with_bg(bg));
        self.set(x1, y1, Cell::new('┘').with_fg(fg).with_bg(bg));
    }

    /// Resize the buffer, preserving the overlapping region.
    pub fn resize(&mut self, new_width: u16, new_height: u16) {
        let mut next = vec![Cell::EMPTY; new_width as usize * new_height as usize];
        for y in 0..self.height.min(new_height) {
            for x in 0..self.width.min(new_width) {
                let old = self.cells[y as usize * self.width as usize + x as usize];
                next[y as usize * new_width as usize + x as usize] = old;
            }
        }
        self.width = new_width;
        self.height = new_height;
        self.cells = next;
    }

    /// Iterate rows as cell slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    /// Collect one row as a plain string (testing/debug aid).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Buffer({}x{})", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_roundtrip() {
        let mut buf = Buffer::new(4, 2);
        assert!(buf.set(3, 1, Cell::new('z')));
        assert_eq!(buf.get(3, 1).unwrap().ch, 'z');
        assert!(!buf.set(4, 0, Cell::new('q')));
        assert!(buf.get(0, 2).is_none());
    }

    #[test]
    fn test_draw_str_clips_at_edge() {
        let mut buf = Buffer::new(5, 1);
        let used = buf.draw_str(2, 0, "hello", Rgb::WHITE, Rgb::BLACK);
        assert_eq!(used, 3);
        assert_eq!(buf.row_text(0), "  hel");
    }

    #[test]
    fn test_draw_str_wide_chars() {
        let mut buf = Buffer::new(6, 1);
        let used = buf.draw_str(0, 0, "日本", Rgb::WHITE, Rgb::BLACK);
        assert_eq!(used, 4);
        assert_eq!(buf.get(0, 0).unwrap().ch, '日');
        // continuation column is blanked
        assert_eq!(buf.get(1, 0).unwrap().ch, ' ');
        assert_eq!(buf.get(2, 0).unwrap().ch, '本');
    }

    #[test]
    fn test_draw_str_wide_char_dropped_at_edge() {
        let mut buf = Buffer::new(3, 1);
        let used = buf.draw_str(0, 0, "a日", Rgb::WHITE, Rgb::BLACK);
        // wide char needs columns 1..3 exclusive of edge: fits? width 3, cursor 1 + 2 = 3 ok
        assert_eq!(used, 3);
        let mut buf = Buffer::new(2, 1);
        let used = buf.draw_str(0, 0, "a日", Rgb::WHITE, Rgb::BLACK);
        assert_eq!(used, 1);
        assert_eq!(buf.row_text(0), "a ");
    }

    #[test]
    fn test_fill_rect_clipped() {
        let mut buf = Buffer::new(4, 4);
        buf.fill_rect(Rect::new(2, 2, 10, 10), Cell::new('#'));
        assert_eq!(buf.row_text(2), "  ##");
        assert_eq!(buf.row_text(0), "    ");
    }

    #[test]
    fn test_resize_preserves_overlap() {
        let mut buf = Buffer::new(3, 2);
        buf.draw_str(0, 0, "abc", Rgb::WHITE, Rgb::BLACK);
        buf.resize(2, 3);
        assert_eq!(buf.row_text(0), "ab");
        assert_eq!(buf.row_text(2), "  ");
    }

    #[test]
    fn test_draw_box_corners() {
        let mut buf = Buffer::new(5, 3);
        buf.draw_box(Rect::new(0, 0, 5, 3), Rgb::WHITE, Rgb::BLACK);
        assert_eq!(buf.row_text(0), "┌───┐");
        assert_eq!(buf.row_text(1), "│   │");
        assert_eq!(buf.row_text(2), "└───┘");
    }
}
