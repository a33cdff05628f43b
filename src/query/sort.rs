//! Leaderboard sorting with toggly direction.

use crate::data::StatEntry;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Sortable leaderboard columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    /// Messages sent.
    Messages,
    /// Rewards earned.
    Rewards,
}

impl SortColumn {
    fn value(self, entry: &StatEntry) -> u64 {
        match self {
            Self::Messages => entry.messages,
            Self::Rewards => entry.rewards,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// The column-header indicator for this direction.
    pub const fn indicator(self) -> char {
        match self {
            Self::Ascending => '▲',
            Self::Descending => '▼',
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    /// Column the table is ordered by.
    pub column: SortColumn,
    /// Current direction.
    pub direction: SortDirection,
}

impl Default for SortState {
    /// The leaderboard opens sorted by messages, busiest first.
    fn default() -> Self {
        Self {
            column: SortColumn::Messages,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    /// Re-sorting the active column flips direction; a new column
    /// resets to descending.
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == column {
            self.direction = self.direction.flipped();
        } else {
            self.column = column;
            self.direction = SortDirection::Descending;
        }
    }
}

/// Sort entries by the given column and direction, ties broken by name.
pub fn sort_entries(entries: &[StatEntry], state: SortState) -> Vec<StatEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        let first = state.column.value(a);
        let second = state.column.value(b);
        if first == second {
            return a.name.cmp(&b.name);
        }
        match state.direction {
            SortDirection::Ascending => first.cmp(&second),
            SortDirection::Descending => second.cmp(&first),
        }
    });
    sorted
}

/// Names of the top `n` entries by message count.
pub fn collect_top(entries: &[StatEntry], n: usize) -> HashSet<String> {
    let mut by_messages = entries.to_vec();
    by_messages.sort_by(|a, b| match b.messages.cmp(&a.messages) {
        Ordering::Equal => a.name.cmp(&b.name),
        other => other,
    });
    by_messages
        .into_iter()
        .take(n)
        .map(|entry| entry.name)
        .collect()
}
