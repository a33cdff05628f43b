//! Stats Widget: sortable leaderboard table.
//!
//! `m` sorts by messages, `r` by rewards; re-sorting the active column
//! flips direction. Up/Down scroll when the table is taller than the
//! page. The ten busiest members keep a "Top 10" badge wherever the
//! current ordering puts them.

use super::traits::Widget;
use crate::actor::{InputEvent, KeyCode};
use crate::buffer::{Buffer, Cell, Modifiers, Rgb};
use crate::data::{StatEntry, StatsDoc};
use crate::layout::Rect;
use crate::query::{collect_top, sort_entries, SortColumn, SortState};
use std::collections::HashSet;

const TOP_BADGE_COUNT: usize = 10;

/// Configuration for the stats widget.
#[derive(Debug, Clone)]
pub struct StatsConfig {
    /// Page background.
    pub bg: Rgb,
    /// Primary text color.
    pub fg: Rgb,
    /// Muted text (period, ranks).
    pub muted_fg: Rgb,
    /// Accent color (active sort column, badges).
    pub accent: Rgb,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            bg: Rgb::new(16, 24, 22),
            fg: Rgb::new(220, 220, 220),
            muted_fg: Rgb::new(130, 150, 140),
            accent: Rgb::new(100, 220, 160),
        }
    }
}

/// A sortable leaderboard.
#[derive(Debug)]
pub struct StatsWidget {
    period: String,
    entries: Vec<StatEntry>,
    top: HashSet<String>,
    sort: SortState,
    scroll: usize,
    bounds: Rect,
    config: StatsConfig,
    dirty: bool,
}

impl StatsWidget {
    /// Create the widget over a loaded stats document.
    pub fn new(bounds: Rect, doc: StatsDoc) -> Self {
        let top = collect_top(&doc.items, TOP_BADGE_COUNT);
        Self {
            period: doc.period,
            entries: doc.items,
            top,
            sort: SortState::default(),
            scroll: 0,
            bounds,
            config: StatsConfig::default(),
            dirty: true,
        }
    }

    /// Current sort state.
    pub const fn sort(&self) -> SortState {
        self.sort
    }

    /// Entries in display order under the current sort.
    pub fn sorted_entries(&self) -> Vec<StatEntry> {
        sort_entries(&self.entries, self.sort)
    }

    fn toggle_sort(&mut self, column: SortColumn) {
        self.sort.toggle(column);
        self.scroll = 0;
        self.dirty = true;
    }

    fn visible_rows(&self) -> usize {
        // header, period line, column header
        self.bounds.height.saturating_sub(3) as usize
    }

    fn header_label(&self, column: SortColumn, label: &str) -> String {
        if self.sort.column == column {
            format!("{label} {}", self.sort.direction.indicator())
        } else {
            label.to_string()
        }
    }
}

/// Group digits in threes, space-separated: 1234567 -> "1 234 567".
fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

impl Widget for StatsWidget {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.dirty = true;
    }

    fn render(&self, buffer: &mut Buffer) {
        buffer.fill_rect(self.bounds, Cell::new(' ').with_bg(self.config.bg));
        let x = self.bounds.x + 1;

        let period = if self.period.is_empty() {
            "No period given"
        } else {
            &self.period
        };
        let headline = format!("{period} — {} members", self.entries.len());
        buffer.draw_str_with(x, self.bounds.y, &headline, self.config.fg, self.config.bg, Modifiers::BOLD);

        let name_width = self.bounds.width.saturating_sub(36) as usize;
        let messages_label = self.header_label(SortColumn::Messages, "Messages");
        let rewards_label = self.header_label(SortColumn::Rewards, "Rewards");
        let header = format!(
            "{:>4} {:<name_width$} {:>12} {:>12}",
            "#", "Name", messages_label, rewards_label,
        );
        buffer.draw_str_with(
            x,
            self.bounds.y + 2,
            &header,
            self.config.accent,
            self.config.bg,
            Modifiers::UNDERLINE,
        );

        let sorted = self.sorted_entries();
        if sorted.is_empty() {
            buffer.draw_str(
                x,
                self.bounds.y + 4,
                "Nothing to show",
                self.config.muted_fg,
                self.config.bg,
            );
            return;
        }

        let rows = self.visible_rows();
        for (offset, entry) in sorted.iter().skip(self.scroll).take(rows).enumerate() {
            let rank = self.scroll + offset + 1;
            #[allow(clippy::cast_possible_truncation)]
            let y = self.bounds.y + 3 + offset as u16;
            let is_top = self.top.contains(&entry.name);
            let name = if is_top {
                format!("{} ★", entry.name)
            } else {
                entry.name.clone()
            };
            let line = format!(
                "{rank:>4} {:<name_width$} {:>12} {:>12}",
                name,
                format_number(entry.messages),
                format_number(entry.rewards),
            );
            let fg = if is_top { self.config.accent } else { self.config.fg };
            buffer.draw_str(x, y, &line, fg, self.config.bg);
        }
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        if let InputEvent::Key { code, .. } = event {
            match code {
                KeyCode::Char('m') => {
                    self.toggle_sort(SortColumn::Messages);
                    return true;
                }
                KeyCode::Char('r') => {
                    self.toggle_sort(SortColumn::Rewards);
                    return true;
                }
                KeyCode::Up => {
                    self.scroll = self.scroll.saturating_sub(1);
                    self.dirty = true;
                    return true;
                }
                KeyCode::Down => {
                    let max_scroll = self.entries.len().saturating_sub(self.visible_rows());
                    if self.scroll < max_scroll {
                        self.scroll += 1;
                    }
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
