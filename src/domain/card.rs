use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default hex color applied to new categories and board themes.
pub const DEFAULT_COLOR: &str = "#3B82F6";

/// Category/label attached to cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub color: String,
}

impl Category {
    pub fn new(id: i64, name: String, color: String) -> Self {
        Self { id, name, color }
    }
}

/// A card within a lane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub lane_id: i64,
    pub position: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Card {
    /// Creates a card as the server would materialize it on creation.
    pub fn new(id: i64, title: String, lane_id: i64, position: f64) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description: String::new(),
            lane_id,
            position,
            created_at: now,
            updated_at: now,
            categories: Vec::new(),
        }
    }

    /// Applies an edit to title and description.
    ///
    /// Empty titles are ignored rather than erasing the existing one,
    /// matching the server's update semantics.
    pub fn apply_edit(&mut self, title: &str, description: &str) {
        let title = title.trim();
        if !title.is_empty() {
            self.title = title.to_string();
        }
        self.description = description.trim().to_string();
        self.updated_at = Utc::now();
    }

    /// Replaces the attached categories.
    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
        self.updated_at = Utc::now();
    }

    /// Checks whether a category is attached.
    pub fn has_category(&self, category_id: i64) -> bool {
        self.categories.iter().any(|c| c.id == category_id)
    }

    #[cfg(test)]
    pub(crate) fn test_fixture(id: i64, lane_id: i64, position: f64) -> Self {
        Self::new(id, format!("Card {id}"), lane_id, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_has_empty_description_and_no_categories() {
        let card = Card::new(1, "Write docs".to_string(), 4, 1.0);
        assert_eq!(card.description, "");
        assert!(card.categories.is_empty());
        assert_eq!(card.lane_id, 4);
    }

    #[test]
    fn test_apply_edit_ignores_empty_title() {
        let mut card = Card::new(1, "Original".to_string(), 1, 1.0);
        card.apply_edit("   ", "new description");

        assert_eq!(card.title, "Original");
        assert_eq!(card.description, "new description");
    }

    #[test]
    fn test_apply_edit_trims_and_replaces() {
        let mut card = Card::new(1, "Original".to_string(), 1, 1.0);
        card.apply_edit("  Renamed  ", "  body  ");

        assert_eq!(card.title, "Renamed");
        assert_eq!(card.description, "body");
    }

    #[test]
    fn test_set_categories_replaces_previous_set() {
        let mut card = Card::new(1, "Card".to_string(), 1, 1.0);
        card.set_categories(vec![Category::new(1, "Bug".to_string(), "#EF4444".to_string())]);
        assert!(card.has_category(1));

        card.set_categories(Vec::new());
        assert!(!card.has_category(1));
        assert!(card.categories.is_empty());
    }

    #[test]
    fn test_card_deserializes_without_optional_fields() {
        let json = r#"{
            "id": 7,
            "title": "Fix login",
            "lane_id": 2,
            "position": 1.5,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;

        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.id, 7);
        assert_eq!(card.description, "");
        assert!(card.categories.is_empty());
    }

    #[test]
    fn test_category_round_trips_through_json() {
        let category = Category::new(3, "Urgent".to_string(), "#F59E0B".to_string());
        let json = serde_json::to_string(&category).unwrap();
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, category);
    }
}
