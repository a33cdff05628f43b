//! Kanban fixture: boards, columns, and cards.

use serde::{Deserialize, Serialize};

/// The kanban document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KanbanDoc {
    /// All boards.
    #[serde(default)]
    pub boards: Vec<Board>,
    /// All cards, across every board.
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// One board with its column layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Columns in display order.
    #[serde(default)]
    pub columns: Vec<BoardColumn>,
    /// Which card fields the board shows on card previews.
    #[serde(default)]
    pub card_preview_fields: Vec<String>,
}

/// One column of a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardColumn {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// One card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Stable identifier.
    pub id: String,
    /// Board this card belongs to.
    pub board_id: String,
    /// Column this card sits in.
    pub column_id: String,
    /// Card title.
    #[serde(default)]
    pub title: String,
    /// Tags shown on the preview.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Story-point estimate.
    #[serde(default)]
    pub points: Option<u32>,
    /// Assignee.
    #[serde(default)]
    pub owner: Option<String>,
    /// Due date, as the fixture spells it.
    #[serde(default)]
    pub due: Option<String>,
    /// Long description for the detail view.
    #[serde(default)]
    pub details: Option<String>,
}

impl Board {
    /// Preview fields with the historical fallback of title-only.
    pub fn preview_fields(&self) -> Vec<&str> {
        if self.card_preview_fields.is_empty() {
            vec!["title"]
        } else {
            self.card_preview_fields.iter().map(String::as_str).collect()
        }
    }
}

impl Card {
    /// Title with the placeholder used when a card has none.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }
}

/// Cards of one board column, in document order.
pub fn cards_for_column<'a>(cards: &'a [Card], board_id: &str, column_id: &str) -> Vec<&'a Card> {
    cards
        .iter()
        .filter(|card| card.board_id == board_id && card.column_id == column_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> KanbanDoc {
        serde_json::from_str(
            r#"{
                "boards": [
                    {
                        "id": "b1",
                        "name": "Launch",
                        "columns": [
                            {"id": "todo", "name": "To do"},
                            {"id": "done", "name": "Done"}
                        ],
                        "cardPreviewFields": ["title", "points", "owner"]
                    }
                ],
                "cards": [
                    {"id": "c1", "boardId": "b1", "columnId": "todo", "title": "Write copy", "points": 3},
                    {"id": "c2", "boardId": "b1", "columnId": "done", "title": "Ship", "owner": "Lena"},
                    {"id": "c3", "boardId": "b2", "columnId": "todo", "title": "Other board"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_cards_scoped_to_board_and_column() {
        let doc = fixture();
        let todo = cards_for_column(&doc.cards, "b1", "todo");
        assert_eq!(todo.len(), 1);
        assert_eq!(todo[0].id, "c1");
        assert!(cards_for_column(&doc.cards, "b1", "missing").is_empty());
    }

    #[test]
    fn test_preview_fields_fallback() {
        let doc = fixture();
        assert_eq!(doc.boards[0].preview_fields(), vec!["title", "points", "owner"]);
        let bare = Board {
            id: "x".into(),
            name: "X".into(),
            columns: Vec::new(),
            card_preview_fields: Vec::new(),
        };
        assert_eq!(bare.preview_fields(), vec!["title"]);
    }

    #[test]
    fn test_untitled_card_placeholder() {
        let card: Card = serde_json::from_str(
            r#"{"id": "c9", "boardId": "b1", "columnId": "todo"}"#,
        )
        .unwrap();
        assert_eq!(card.display_title(), "Untitled");
    }
}
