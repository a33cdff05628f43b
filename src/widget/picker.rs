//! Picker Widget: the simpler random drawing.
//!
//! Unlike the slot page there is no deceleration model: each drum
//! flickers through random options on a fixed per-drum interval and
//! reveals its predetermined winner at a fixed, staggered stop time.
//! Draws are always without replacement.

use super::status_bar::{StatusBar, Tone};
use super::text_input::{TextInput, TextInputConfig};
use super::traits::Widget;
use crate::actor::{InputEvent, KeyCode};
use crate::buffer::{Buffer, Cell, Modifiers, Rgb};
use crate::layout::Rect;
use crate::query::{dedupe_lines, sample, validate_draw};
use crate::reel::PLACEHOLDER;
use rand::Rng;
use std::time::Duration;

const MIN_COUNT: usize = 1;
const MAX_COUNT: usize = 8;
const DRUM_BOX_HEIGHT: u16 = 3;

const FLICKER_BASE_MS: u64 = 70;
const FLICKER_STEP_MS: u64 = 10;
const REVEAL_BASE_MS: u64 = 1200;
const REVEAL_STEP_MS: u64 = 450;

/// Configuration for the picker widget.
#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// Page background.
    pub bg: Rgb,
    /// Primary text color.
    pub fg: Rgb,
    /// Muted text.
    pub muted_fg: Rgb,
    /// Accent color (revealed winners).
    pub accent: Rgb,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            bg: Rgb::new(18, 24, 30),
            fg: Rgb::new(225, 225, 225),
            muted_fg: Rgb::new(130, 145, 160),
            accent: Rgb::new(110, 220, 190),
        }
    }
}

/// State of one in-flight draw.
#[derive(Debug)]
struct ActiveDraw {
    winners: Vec<String>,
    started_at: Option<Duration>,
    shown: Vec<String>,
    revealed: Vec<bool>,
    next_flicker: Vec<Duration>,
}

impl ActiveDraw {
    fn new(winners: Vec<String>) -> Self {
        let drums = winners.len();
        Self {
            winners,
            started_at: None,
            shown: vec![PLACEHOLDER.to_string(); drums],
            revealed: vec![false; drums],
            next_flicker: vec![Duration::ZERO; drums],
        }
    }

    const fn flicker_interval(index: usize) -> Duration {
        Duration::from_millis(FLICKER_BASE_MS + index as u64 * FLICKER_STEP_MS)
    }

    const fn reveal_delay(index: usize) -> Duration {
        Duration::from_millis(REVEAL_BASE_MS + index as u64 * REVEAL_STEP_MS)
    }

    fn is_complete(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }

    /// Advance flicker/reveal state; returns true if anything changed.
    fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, options: &[String], now: Duration) -> bool {
        let started = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_sub(started);
        let mut changed = false;
        for index in 0..self.winners.len() {
            if self.revealed[index] {
                continue;
            }
            if elapsed >= Self::reveal_delay(index) {
                self.shown[index] = self.winners[index].clone();
                self.revealed[index] = true;
                changed = true;
            } else if now >= self.next_flicker[index] && !options.is_empty() {
                self.shown[index] = options[rng.gen_range(0..options.len())].clone();
                self.next_flicker[index] = now + Self::flicker_interval(index);
                changed = true;
            }
        }
        changed
    }
}

/// The random-picker page.
#[derive(Debug)]
pub struct PickerWidget {
    options: Vec<String>,
    count: usize,
    draw: Option<ActiveDraw>,
    results: Vec<String>,
    input: TextInput,
    status: StatusBar,
    bounds: Rect,
    config: PickerConfig,
    dirty: bool,
}

impl PickerWidget {
    /// Create an empty picker page.
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
        status.set_message(Tone::Info, "Add options, pick winner count, draw");
        status.set_hints("^S draw  ^R clear");
        Self {
            options: Vec::new(),
            count: MIN_COUNT,
            draw: None,
            results: Vec::new(),
            input,
            status,
            bounds,
            config: PickerConfig::default(),
            dirty: true,
        }
    }

    /// Replace the option list, deduplicated.
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

    /// Winners of the last completed draw.
    pub fn results(&self) -> &[String] {
        &self.results
    }

    /// Whether a draw animation is running.
    pub const fn is_drawing(&self) -> bool {
        self.draw.is_some()
    }

    /// Configured winner count.
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Last status message.
    pub fn status_message(&self) -> &str {
        self.status.message()
    }

    fn commit_input_line(&mut self) {
        let line = self.input.take();
        self.options = dedupe_lines(self.options.iter().map(String::as_str).chain([line.as_str()]));
        self.status
            .set_message(Tone::Info, format!("{} options", self.options.len()));
        self.dirty = true;
    }

    fn start_draw(&mut self) {
        if let Err(err) = validate_draw(self.options.len(), self.count, true) {
            self.status.set_message(Tone::Error, err.to_string());
            self.dirty = true;
            return;
        }
        let mut rng = rand::thread_rng();
        let winners = sample(&mut rng, &self.options, self.count, false);
        tracing::info!(count = self.count, "picker draw started");
        self.draw = Some(ActiveDraw::new(winners));
        self.results.clear();
        self.status.set_message(Tone::Info, "Drawing…");
        self.dirty = true;
    }

    fn clear(&mut self) {
        if self.is_drawing() {
            return;
        }
        self.options.clear();
        self.results.clear();
        self.input.clear();
        self.status.set_message(Tone::Info, "List cleared");
        self.dirty = true;
    }

    fn render_drums(&self, buffer: &mut Buffer, area: Rect) {
        let drums = self.draw.as_ref().map_or(self.results.len().max(1), |d| d.winners.len());
        #[allow(clippy::cast_possible_truncation)]
        let boxes = area.columns(drums.min(MAX_COUNT) as u16, 2);
        for (index, rect) in boxes.iter().enumerate() {
            let rect = Rect::new(rect.x, rect.y, rect.width, DRUM_BOX_HEIGHT.min(rect.height));
            let (value, revealed) = match &self.draw {
                Some(draw) => (draw.shown[index].clone(), draw.revealed[index]),
                None => (
                    self.results.get(index).cloned().unwrap_or_else(|| PLACEHOLDER.to_string()),
                    !self.results.is_empty(),
                ),
            };
            let border = if revealed { self.config.accent } else { self.config.muted_fg };
            buffer.draw_box(rect, border, self.config.bg);
            let inner_width = rect.width.saturating_sub(2) as usize;
            if inner_width == 0 || rect.height < 3 {
                continue;
            }
            let truncated: String = value.chars().take(inner_width).collect();
            let (fg, modifiers) = if revealed {
                (self.config.accent, Modifiers::BOLD)
            } else {
                (self.config.fg, Modifiers::DIM)
            };
            buffer.draw_str_with(rect.x + 1, rect.y + 1, &truncated, fg, self.config.bg, modifiers);
        }
    }

    fn render_results(&self, buffer: &mut Buffer, y: u16) {
        if self.results.is_empty() {
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

impl Widget for PickerWidget {
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

        let summary = format!("{} options · {} winners", self.options.len(), self.count);
        buffer.draw_str(
            self.bounds.x + 1,
            self.bounds.y + 1,
            &summary,
            self.config.muted_fg,
            self.config.bg,
        );

        let drums_area = Rect::new(
            self.bounds.x + 1,
            self.bounds.y + 3,
            self.bounds.width.saturating_sub(2),
            DRUM_BOX_HEIGHT,
        );
        self.render_drums(buffer, drums_area);
        self.render_results(buffer, self.bounds.y + 3 + DRUM_BOX_HEIGHT + 1);
        self.status.render(buffer);
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        let InputEvent::Key { code, modifiers } = event else {
            return false;
        };

        if self.is_drawing() {
            return false;
        }

        if modifiers.control {
            match code {
                KeyCode::Char('s') => {
                    self.start_draw();
                    return true;
                }
                KeyCode::Char('r') => {
                    self.clear();
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
                self.count = (self.count + 1).min(MAX_COUNT);
                self.dirty = true;
                true
            }
            KeyCode::Down => {
                self.count = self.count.saturating_sub(1).max(MIN_COUNT);
                self.dirty = true;
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
        let Some(draw) = &mut self.draw else {
            return;
        };
        let mut rng = rand::thread_rng();
        if draw.advance(&mut rng, &self.options, now) {
            self.dirty = true;
        }
        if draw.is_complete() {
            self.results = draw.winners.clone();
            self.draw = None;
            self.status
                .set_message(Tone::Success, "Done! Winners are in");
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

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_with_options(options: &[&str]) -> PickerWidget {
        let mut picker = PickerWidget::new(Rect::new(0, 0, 80, 12));
        picker.set_options(options.iter().copied());
        picker
    }

    fn finish_draw(picker: &mut PickerWidget) {
        let mut now = Duration::ZERO;
        for _ in 0..100_000 {
            if !picker.is_drawing() {
                return;
            }
            picker.tick(now);
            now += Duration::from_millis(16);
        }
        panic!("draw never finished");
    }

    #[test]
    fn test_draw_requires_options() {
        let mut picker = PickerWidget::new(Rect::new(0, 0, 80, 12));
        picker.handle_input(&InputEvent::ctrl(KeyCode::Char('s')));
        assert!(!picker.is_drawing());
        assert_eq!(picker.status_message(), "add at least one option");
    }

    #[test]
    fn test_more_winners_than_options_rejected() {
        let mut picker = widget_with_options(&["A", "B"]);
        picker.handle_input(&InputEvent::key(KeyCode::Up));
        picker.handle_input(&InputEvent::key(KeyCode::Up));
        assert_eq!(picker.count(), 3);
        picker.handle_input(&InputEvent::ctrl(KeyCode::Char('s')));
        assert!(!picker.is_drawing());
        assert!(picker.status_message().contains("only 2 available"));
    }

    #[test]
    fn test_draw_reveals_distinct_winners_in_stagger_order() {
        let mut picker = widget_with_options(&["A", "B", "C", "D", "E"]);
        picker.handle_input(&InputEvent::key(KeyCode::Up));
        picker.handle_input(&InputEvent::key(KeyCode::Up));
        picker.handle_input(&InputEvent::ctrl(KeyCode::Char('s')));
        assert!(picker.is_drawing());

        // first drum reveals strictly before the last one
        let mut now = Duration::ZERO;
        let mut first_revealed_at = None;
        while picker.is_drawing() {
            picker.tick(now);
            if first_revealed_at.is_none() {
                if let Some(draw) = &picker.draw {
                    if draw.revealed[0] {
                        first_revealed_at = Some(now);
                    }
                }
            }
            now += Duration::from_millis(16);
            assert!(now < Duration::from_secs(60));
        }
        assert!(first_revealed_at.unwrap() < now);

        let mut unique = picker.results().to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 3);
        for winner in picker.results() {
            assert!(picker.options().contains(winner));
        }
    }

    #[test]
    fn test_controls_locked_while_drawing() {
        let mut picker = widget_with_options(&["A", "B", "C"]);
        picker.handle_input(&InputEvent::ctrl(KeyCode::Char('s')));
        assert!(picker.is_drawing());
        assert!(!picker.handle_input(&InputEvent::ctrl(KeyCode::Char('r'))));
        assert!(!picker.handle_input(&InputEvent::key(KeyCode::Char('x'))));
        finish_draw(&mut picker);
        assert_eq!(picker.results().len(), 1);
    }

    #[test]
    fn test_clear_empties_list_and_results() {
        let mut picker = widget_with_options(&["A", "B"]);
        picker.handle_input(&InputEvent::ctrl(KeyCode::Char('s')));
        finish_draw(&mut picker);
        assert!(!picker.results().is_empty());
        picker.handle_input(&InputEvent::ctrl(KeyCode::Char('r')));
        assert!(picker.options().is_empty());
        assert!(picker.results().is_empty());
    }

    #[test]
    fn test_render_shows_summary() {
        let picker = widget_with_options(&["A", "B"]);
        let mut buffer = Buffer::new(80, 12);
        picker.render(&mut buffer);
        let screen: Vec<String> = (0..12).map(|y| buffer.row_text(y)).collect();
        assert!(screen.iter().any(|row| row.contains("2 options · 1 winners")));
    }
}
