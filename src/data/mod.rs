//! Typed models of the site's JSON documents.
//!
//! Each page consumes one fixture document. Field names follow the
//! fixtures' camelCase spelling via serde renames; loading goes through
//! [`load_json`] so every page shares the same error taxonomy.

mod gallery;
mod kanban;
mod kb;
mod stats;

pub use gallery::{GalleryDoc, GalleryItem};
pub use kanban::{cards_for_column, Board, BoardColumn, Card, KanbanDoc};
pub use kb::{Article, Folder, KbDoc, ROOT_FOLDER_ID};
pub use stats::{StatEntry, StatsDoc};

use serde::de::DeserializeOwned;
use std::path::Path;

/// Errors produced while loading a fixture document.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to load.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The document was not valid JSON for the expected shape.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path that failed to parse.
        path: String,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

/// Load and deserialize a JSON document from disk.
///
/// # Errors
///
/// Returns [`DataError::Io`] when the file cannot be read and
/// [`DataError::Parse`] when its contents do not match `T`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let doc = serde_json::from_str(&text).map_err(|source| DataError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "fixture loaded");
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_json_missing_file() {
        let err = load_json::<GalleryDoc>(Path::new("/nonexistent/gallery.json")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}
