//! Knowledge-base fixture: a folder tree plus tagged articles.

use serde::{Deserialize, Serialize};

/// Sentinel folder id that matches every article.
pub const ROOT_FOLDER_ID: &str = "root";

/// The knowledge-base document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KbDoc {
    /// Folder nodes, flat with parent references.
    #[serde(default)]
    pub folders: Vec<Folder>,
    /// All articles.
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// One folder node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Stable identifier.
    pub id: String,
    /// Display name (siblings sort by this).
    pub name: String,
    /// Parent folder id; `None` for top-level folders.
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// One article.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Stable identifier.
    pub id: String,
    /// Folder the article lives in.
    pub folder_id: String,
    /// Article title (search target).
    pub title: String,
    /// Tags used for filtering.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Short preview paragraph.
    #[serde(default)]
    pub preview: String,
    /// Last-updated date, as the fixture spells it (ISO-8601 expected).
    #[serde(default)]
    pub updated_at: String,
    /// Full article body as HTML.
    #[serde(default)]
    pub content_html: String,
}

impl KbDoc {
    /// Display name for a folder id, with the root sentinel handled.
    pub fn folder_name(&self, folder_id: &str) -> &str {
        self.folders
            .iter()
            .find(|f| f.id == folder_id)
            .map_or("Folder", |f| f.name.as_str())
    }

    /// Find an article by id.
    pub fn article(&self, article_id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == article_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixture_shape() {
        let doc: KbDoc = serde_json::from_str(
            r#"{
                "folders": [
                    {"id": "root", "name": "All"},
                    {"id": "f1", "name": "Guides", "parentId": null},
                    {"id": "f2", "name": "Setup", "parentId": "f1"}
                ],
                "articles": [
                    {
                        "id": "a1",
                        "folderId": "f2",
                        "title": "First steps",
                        "tags": ["intro"],
                        "preview": "Getting going.",
                        "updatedAt": "2024-03-05",
                        "contentHtml": "<p>Hi</p>"
                    }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(doc.folders.len(), 3);
        assert_eq!(doc.folders[2].parent_id.as_deref(), Some("f1"));
        assert_eq!(doc.articles[0].updated_at, "2024-03-05");
    }

    #[test]
    fn test_folder_name_lookup() {
        let doc: KbDoc = serde_json::from_str(
            r#"{"folders": [{"id": "f1", "name": "Guides"}], "articles": []}"#,
        )
        .unwrap();
        assert_eq!(doc.folder_name("f1"), "Guides");
        assert_eq!(doc.folder_name("missing"), "Folder");
    }
}
