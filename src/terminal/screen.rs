//! Screen: raw-mode terminal guard that presents whole frames.
//!
//! Owns terminal setup (raw mode, alternate screen, hidden cursor) and
//! restores everything on drop, including on panic unwinds. Each call to
//! [`Screen::present`] writes one complete buffer as a single flush;
//! attribute changes are only emitted when they differ from the previous
//! cell, which keeps full-frame redraws small enough in practice.

use super::output::OutputBuffer;
use crate::buffer::{Buffer, Cell};
use crossterm::{
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout, Write};
use unicode_width::UnicodeWidthChar;

/// Raw-mode terminal wrapper that renders [`Buffer`] frames.
pub struct Screen {
    stdout: Stdout,
    out: OutputBuffer,
    width: u16,
    height: u16,
}

impl Screen {
    /// Enter raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen)?;
        let (width, height) = terminal::size()?;

        let mut out = OutputBuffer::new();
        out.cursor_hide();
        out.clear_screen();
        out.flush_to(&mut stdout)?;

        Ok(Self {
            stdout,
            out,
            width,
            height,
        })
    }

    /// Current terminal width in columns.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Current terminal height in rows.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Record a terminal resize reported by the input layer.
    pub const fn handle_resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Render a full buffer as one flushed frame.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn present(&mut self, buffer: &Buffer) -> io::Result<()> {
        self.out.clear();

        let mut last: Option<Cell> = None;
        for (y, row) in buffer.rows().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            self.out.cursor_move(0, y as u16);
            let mut skip_continuation = false;
            for cell in row {
                if skip_continuation {
                    skip_continuation = false;
                    continue;
                }
                let attrs_changed = last.map_or(true, |prev| {
                    prev.fg != cell.fg || prev.bg != cell.bg || prev.modifiers != cell.modifiers
                });
                if attrs_changed {
                    self.out.reset_attrs();
                    self.out.set_fg(cell.fg);
                    self.out.set_bg(cell.bg);
                    self.out.set_modifiers(cell.modifiers);
                }
                self.out.write_char(cell.ch);
                if cell.ch.width().unwrap_or(1) == 2 {
                    // the wide glyph already covered the next column
                    skip_continuation = true;
                }
                last = Some(*cell);
            }
        }
        self.out.reset_attrs();
        self.out.flush_to(&mut self.stdout)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        self.out.clear();
        self.out.cursor_show();
        self.out.reset_attrs();
        let _ = self.out.flush_to(&mut self.stdout);
        let _ = execute!(self.stdout, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        let _ = self.stdout.flush();
    }
}
