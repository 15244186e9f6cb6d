use crate::{
    domain::{Card, Category, Lane},
    error::Result,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod http;

pub use http::HttpApi;

/// Body of the card move request: the card's new lane and its freshly
/// allocated sort position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveCard {
    pub lane_id: i64,
    pub position: f64,
}

/// Body of the lane reorder request: every lane id in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderLanes {
    pub lane_ids: Vec<i64>,
}

/// One entry of a bulk card reorder. Fields left `None` are not changed
/// by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardPlacement {
    pub card_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lane_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
}

/// Body of the bulk card reorder request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderCards {
    pub updates: Vec<CardPlacement>,
}

/// Fields of the card creation form.
#[derive(Debug, Clone, Default)]
pub struct NewCard {
    pub title: String,
    pub lane_id: i64,
    pub category_ids: Vec<i64>,
}

/// Fields of the card edit form. An empty set of category ids clears all
/// categories from the card.
#[derive(Debug, Clone, Default)]
pub struct CardEdit {
    pub title: String,
    pub description: String,
    pub category_ids: Vec<i64>,
}

/// Backend API surface for boards, lanes, cards, and categories.
///
/// Mutations report success or failure only; the server is the source of
/// truth and responses are not validated beyond their status.
#[async_trait]
pub trait KanbanApi: Send + Sync {
    /// Creates a lane; the server assigns its id and tail position.
    async fn create_lane(&self, title: &str) -> Result<Lane>;

    /// Deletes a lane and all its cards.
    async fn delete_lane(&self, lane_id: i64) -> Result<()>;

    /// Persists a new lane ordering after a lane drag.
    async fn reorder_lanes(&self, lane_ids: &[i64]) -> Result<()>;

    /// Creates a card; the server assigns its id and tail position.
    async fn create_card(&self, card: &NewCard) -> Result<Card>;

    /// Loads a single card with its categories.
    async fn fetch_card(&self, card_id: i64) -> Result<Card>;

    /// Updates a card's title, description, and categories.
    async fn update_card(&self, card_id: i64, edit: &CardEdit) -> Result<Card>;

    /// Persists a card's new lane and sort position after a drop.
    async fn move_card(&self, card_id: i64, target: &MoveCard) -> Result<()>;

    /// Applies a batch of card placements in one request.
    async fn reorder_cards(&self, updates: &[CardPlacement]) -> Result<()>;

    /// Deletes a card.
    async fn delete_card(&self, card_id: i64) -> Result<()>;

    /// Creates a category with the given name and hex color.
    async fn create_category(&self, name: &str, color: &str) -> Result<Category>;

    /// Lists all categories.
    async fn list_categories(&self) -> Result<Vec<Category>>;
}
