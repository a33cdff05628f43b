//! Pure list operations shared by the page widgets.
//!
//! Everything in here is stateless: filtering, folder-tree flattening,
//! leaderboard sorting, option-list parsing, and the random draws used
//! by the prize widgets.

mod filter;
mod options;
mod sample;
mod sort;
mod tree;

pub use filter::{collect_tags, matches, ArticleQuery, Filter};
pub use options::{dedupe_lines, merge_options, normalize_line, parse_options, MergeMode};
pub use sample::{sample, validate_draw, DrawError};
pub use sort::{collect_top, sort_entries, SortColumn, SortDirection, SortState};
pub use tree::{flatten_tree, FolderTree, TreeRow};
