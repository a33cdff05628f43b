//! Slot Widget: the multi-reel prize drawing.
//!
//! Options are entered one per line through the input row (Enter
//! commits a line) or injected wholesale via [`SlotWidget::set_options`].
//! Up/Down adjust the reel count, Ctrl+U toggles unique winners,
//! Ctrl+S spins, Ctrl+X stops early, Ctrl+R resets. While a spin is
//! running every control except stop-early is disabled.
//!
//! Winners are drawn before the reels start; the animation is driven
//! by [`Widget::tick`] feeding the session's `advance`.

use super::status_bar::{StatusBar, Tone};
use super::text_input::{TextInput, TextInputConfig};
use super::traits::Widget;
use crate::actor::{InputEvent, KeyCode};
use crate::buffer::{Buffer, Cell, Modifiers, Rgb};
use crate::layout::Rect;
use crate::query::{dedupe_lines, sample, validate_draw};
use crate::reel::{SpinSession, PLACEHOLDER};
use std::time::Duration;

const MIN_REELS: usize = 1;
const MAX_REELS: usize = 8;
const DEFAULT_REELS: usize = 3;
const REEL_BOX_HEIGHT: u16 = 5;

/// Configuration for the slot widget.
#[derive(Debug, Clone)]
pub struct SlotConfig {
    /// Page background.
    pub bg: Rgb,
    /// Primary text color.
    pub fg: Rgb,
    /// Muted text.
    pub muted_fg: Rgb,
    /// Accent color (center row, winners).
    pub accent: Rgb,
    /// Border color of a still-spinning reel.
    pub spinning_border: Rgb,
    /// Border color of a settled reel.
    pub settled_border: Rgb,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            bg: Rgb::new(26, 18, 24),
            fg: Rgb::new(225, 225, 225),
            muted_fg: Rgb::new(150, 135, 145),
            accent: Rgb::new(255, 190, 80),
            spinning_border: Rgb::new(120, 110, 125),
            settled_border: Rgb::new(255, 190, 80),
        }
    }
}

/// The slot-machine page.
#[derive(Debug)]
pub struct SlotWidget {
    options: Vec<String>,
    reel_count: usize,
    unique: bool,
    session: Option<SpinSession>,
    results: Vec<String>,
    input: TextInput,
    status: StatusBar,
    bounds: Rect,
    config: SlotConfig,
    dirty: bool,
}

impl SlotWidget {
    /// Create an empty slot page.
    pub fn new(bounds: Rect) -> Self {
        let input = TextInput::with_config(
            Rect::new(bounds.x, bounds.y, bounds.width, 1),
            TextInputConfig {
                prompt: String::from("add option> "),
                placeholder: String::from("type a name and press Enter"),
                ..TextInputConfig::default()
            },
        );
        let mut status = StatusBar::new(Rect::new(
            bounds.x,
            bounds.bottom().saturating_sub(1),
            bounds.width,
            1,
        ));
        status.set_message(Tone::Info, "Add options, then spin");
        status.set_hints("^S spin  ^X stop  ^U unique  ^R reset");
        Self {
            options: Vec::new(),
            reel_count: DEFAULT_REELS,
            unique: true,
            session: None,
            results: Vec::new(),
            input,
            status,
            bounds,
            config: SlotConfig::default(),
            dirty: true,
        }
    }

    /// Replace the option list (e.g. loaded from a file), deduplicated.
    pub fn set_options<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options = dedupe_lines(lines);
        self.status
            .set_message(Tone::Success, format!("Loaded {} options", self.options.len()));
        self.dirty = true;
    }

    /// The current option list.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Winners of the last completed spin, in reel order.
    pub fn results(&self) -> &[String] {
        &self.results
    }

    /// Whether a spin is currently animating.
    pub const fn is_spinning(&self) -> bool {
        self.session.is_some()
    }

    /// Configured number of reels.
    pub const fn reel_count(&self) -> usize {
        self.reel_count
    }

    /// Whether winners must be distinct.
    pub const fn unique(&self) -> bool {
        self.unique
    }

    /// Last status message (for the shell's title bar or tests).
    pub fn status_message(&self) -> &str {
        self.status.message()
    }

    fn commit_input_line(&mut self) {
        let line = self.input.take();
        let before = self.options.len();
        self.options = dedupe_lines(self.options.iter().map(String::as_str).chain([line.as_str()]));
        if self.options.len() > before {
            self.status
                .set_message(Tone::Info, format!("{} options", self.options.len()));
        }
        self.dirty = true;
    }

    fn start_spin(&mut self) {
        if let Err(err) = validate_draw(self.options.len(), self.reel_count, self.unique) {
            self.status.set_message(Tone::Error, err.to_string());
            self.dirty = true;
            return;
        }
        let mut rng = rand::thread_rng();
        let winners = sample(&mut rng, &self.options, self.reel_count, !self.unique);
        tracing::info!(reels = self.reel_count, unique = self.unique, "slot spin started");
        self.session = Some(SpinSession::new(&mut rng, &self.options, winners));
        self.results.clear();
        self.status.set_message(Tone::Info, "Spinning the reels…");
        self.dirty = true;
    }

    fn stop_early(&mut self) {
        if let Some(session) = &mut self.session {
            session.force_stop();
            self.status.set_message(Tone::Info, "Stopping early…");
            self.dirty = true;
        }
    }

    fn reset(&mut self) {
        // mirrors the spin lock: no resets mid-animation
        if self.is_spinning() {
            return;
        }
        self.options.clear();
        self.results.clear();
        self.reel_count = DEFAULT_REELS;
        self.unique = true;
        self.input.clear();
        self.status.set_message(Tone::Info, "Cleared. Add options and spin again");
        self.dirty = true;
    }

    fn adjust_reel_count(&mut self, delta: isize) {
        let next = self.reel_count.saturating_add_signed(delta);
        self.reel_count = next.clamp(MIN_REELS, MAX_REELS);
        self.dirty = true;
    }

    fn render_reels(&self, buffer: &mut Buffer, area: Rect) {
        #[allow(clippy::cast_possible_truncation)]
        let boxes = area.columns(self.reel_count as u16, 2);
        for (index, rect) in boxes.iter().enumerate() {
            let rect = Rect::new(rect.x, rect.y, rect.width, REEL_BOX_HEIGHT.min(rect.height));
            let reel = self.session.as_ref().and_then(|s| s.reel(index));
            let settled = reel.map_or(true, |r| r.is_settled());
            let border = if settled {
                self.config.settled_border
            } else {
                self.config.spinning_border
            };
            buffer.draw_box(rect, border, self.config.bg);

            let inner_width = rect.width.saturating_sub(2) as usize;
            let window: [String; 3] = match reel {
                Some(reel) => {
                    let [a, b, c] = reel.window();
                    [a.to_string(), b.to_string(), c.to_string()]
                }
                None => {
                    let value = self
                        .results
                        .get(index)
                        .cloned()
                        .unwrap_or_else(|| PLACEHOLDER.to_string());
                    [String::new(), value, String::new()]
                }
            };
            for (row, value) in window.iter().enumerate() {
                #[allow(clippy::cast_possible_truncation)]
                let y = rect.y + 1 + row as u16;
                if y >= rect.bottom().saturating_sub(1) || inner_width == 0 {
                    break;
                }
                let truncated: String = value.chars().take(inner_width).collect();
                let center = row == 1;
                let (fg, modifiers) = if center {
                    (self.config.accent, Modifiers::REVERSED)
                } else {
                    (self.config.muted_fg, Modifiers::DIM)
                };
                buffer.draw_str_with(rect.x + 1, y, &truncated, fg, self.config.bg, modifiers);
            }

            let label = format!("Reel {}", index + 1);
            if rect.bottom() < self.bounds.bottom() {
                buffer.draw_str(rect.x + 1, rect.bottom(), &label, self.config.muted_fg, self.config.bg);
            }
        }
    }

    fn render_results(&self, buffer: &mut Buffer, y: u16) {
        if self.results.is_empty() {
            buffer.draw_str(
                self.bounds.x + 1,
                y,
                "No results yet",
                self.config.muted_fg,
                self.config.bg,
            );
            return;
        }
        buffer.draw_str_with(
            self.bounds.x + 1,
            y,
            "Winners:",
            self.config.fg,
            self.config.bg,
            Modifiers::BOLD,
        );
        let mut x = self.bounds.x + 10;
        for (i, winner) in self.results.iter().enumerate() {
            let item = format!("{}. {}  ", i + 1, winner);
            x += buffer.draw_str(x, y, &item, self.config.accent, self.config.bg);
            if x >= self.bounds.right() {
                break;
            }
        }
    }
}

impl Widget for SlotWidget {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.input
            .set_bounds(Rect::new(bounds.x, bounds.y, bounds.width, 1));
        self.status.set_bounds(Rect::new(
            bounds.x,
            bounds.bottom().saturating_sub(1),
            bounds.width,
            1,
        ));
        self.dirty = true;
    }

    fn render(&self, buffer: &mut Buffer) {
        buffer.fill_rect(self.bounds, Cell::new(' ').with_bg(self.config.bg));
        self.input.render(buffer);

        let summary = format!(
            "{} options · {} reels · {}",
            self.options.len(),
            self.reel_count,
            if self.unique { "unique winners" } else { "repeats allowed" },
        );
        buffer.draw_str(
            self.bounds.x + 1,
            self.bounds.y + 1,
            &summary,
            self.config.muted_fg,
            self.config.bg,
        );

        let reels_area = Rect::new(
            self.bounds.x + 1,
            self.bounds.y + 3,
            self.bounds.width.saturating_sub(2),
            REEL_BOX_HEIGHT,
        );
        self.render_reels(buffer, reels_area);

        self.render_results(buffer, self.bounds.y + 3 + REEL_BOX_HEIGHT + 2);
        self.status.render(buffer);
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        let InputEvent::Key { code, modifiers } = event else {
            return false;
        };

        // While spinning, stop-early is the only live control.
        if self.is_spinning() {
            if *code == KeyCode::Char('x') && modifiers.control {
                self.stop_early();
                return true;
            }
            return false;
        }

        if modifiers.control {
            match code {
                KeyCode::Char('s') => {
                    self.start_spin();
                    return true;
                }
                KeyCode::Char('u') => {
                    self.unique = !self.unique;
                    self.dirty = true;
                    return true;
                }
                KeyCode::Char('r') => {
                    self.reset();
                    return true;
                }
                _ => return false,
            }
        }

        match code {
            KeyCode::Enter => {
                self.commit_input_line();
                true
            }
            KeyCode::Up => {
                self.adjust_reel_count(1);
                true
            }
            KeyCode::Down => {
                self.adjust_reel_count(-1);
                true
            }
            _ => self.input.handle_input(event),
        }
    }

    fn tick(&mut self, now: Duration) {
        self.input.tick(now);
        if self.input.needs_redraw() {
            self.dirty = true;
        }
        let Some(session) = &mut self.session else {
            return;
        };
        if session.advance(now) {
            self.dirty = true;
        }
        if session.is_settled() {
            self.results = session.winners().to_vec();
            self.session = None;
            self.status
                .set_message(Tone::Success, "Done! All reels stopped");
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
