//! Gallery fixture: tagged, searchable image cards.

use serde::{Deserialize, Serialize};

/// The gallery document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryDoc {
    /// All gallery cards.
    #[serde(default)]
    pub items: Vec<GalleryItem>,
}

/// One gallery card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    /// Stable identifier.
    pub id: String,
    /// Card title (search target).
    pub title: String,
    /// Longer description shown in the detail view.
    #[serde(default)]
    pub description: String,
    /// Image location.
    #[serde(default)]
    pub image_url: String,
    /// Tags used for filtering.
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixture_shape() {
        let doc: GalleryDoc = serde_json::from_str(
            r#"{
                "items": [
                    {
                        "id": "g1",
                        "title": "Sunset over the bay",
                        "description": "Evening walk",
                        "imageUrl": "images/sunset.jpg",
                        "tags": ["nature", "evening"]
                    }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(doc.items.len(), 1);
        assert_eq!(doc.items[0].image_url, "images/sunset.jpg");
        assert_eq!(doc.items[0].tags, vec!["nature", "evening"]);
    }

    #[test]
    fn test_missing_items_defaults_empty() {
        let doc: GalleryDoc = serde_json::from_str("{}").unwrap();
        assert!(doc.items.is_empty());
    }
}
