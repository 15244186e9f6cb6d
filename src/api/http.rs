use crate::{
    api::{CardEdit, CardPlacement, KanbanApi, MoveCard, NewCard, ReorderCards, ReorderLanes},
    domain::{Card, Category, Lane},
    error::{KanbanError, Result},
};
use async_trait::async_trait;
use reqwest::Response;

/// HTTP implementation of the backend API.
///
/// Requests are fire-and-forget from the UI's perspective: no timeout, no
/// retry, no cancellation. Concurrent edits from other clients are not
/// reconciled here; last write wins at the server.
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Creates a client for the backend at `base_url`, e.g.
    /// `http://localhost:5000`.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Same as [`HttpApi::new`] with a caller-provided `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self> {
        let parsed = reqwest::Url::parse(base_url)
            .map_err(|err| KanbanError::InvalidBaseUrl(format!("{base_url}: {err}")))?;
        if !parsed.has_host() {
            return Err(KanbanError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check_status(endpoint: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(KanbanError::UnexpectedStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            })
        }
    }
}

/// Form body for card creation.
fn new_card_form(card: &NewCard) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
        ("title", card.title.clone()),
        ("lane_id", card.lane_id.to_string()),
    ];
    push_category_ids(&mut pairs, &card.category_ids);
    pairs
}

/// Form body for card edits. Repeated `category_ids` entries carry the
/// multi-select; omitting them all clears the card's categories.
fn card_edit_form(edit: &CardEdit) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
        ("title", edit.title.clone()),
        ("description", edit.description.clone()),
    ];
    push_category_ids(&mut pairs, &edit.category_ids);
    pairs
}

fn push_category_ids(pairs: &mut Vec<(&'static str, String)>, category_ids: &[i64]) {
    for id in category_ids {
        pairs.push(("category_ids", id.to_string()));
    }
}

#[async_trait]
impl KanbanApi for HttpApi {
    async fn create_lane(&self, title: &str) -> Result<Lane> {
        let endpoint = self.endpoint("/lanes");
        let response = self
            .client
            .post(&endpoint)
            .form(&[("title", title)])
            .send()
            .await?;
        let lane = Self::check_status(&endpoint, response)?.json().await?;
        Ok(lane)
    }

    async fn delete_lane(&self, lane_id: i64) -> Result<()> {
        let endpoint = self.endpoint(&format!("/lanes/{lane_id}"));
        let response = self.client.delete(&endpoint).send().await?;
        Self::check_status(&endpoint, response)?;
        Ok(())
    }

    async fn reorder_lanes(&self, lane_ids: &[i64]) -> Result<()> {
        let endpoint = self.endpoint("/lanes/reorder");
        tracing::debug!(?lane_ids, "persisting lane order");
        let body = ReorderLanes {
            lane_ids: lane_ids.to_vec(),
        };
        let response = self.client.put(&endpoint).json(&body).send().await?;
        Self::check_status(&endpoint, response)?;
        Ok(())
    }

    async fn create_card(&self, card: &NewCard) -> Result<Card> {
        let endpoint = self.endpoint("/cards");
        let response = self
            .client
            .post(&endpoint)
            .form(&new_card_form(card))
            .send()
            .await?;
        let card = Self::check_status(&endpoint, response)?.json().await?;
        Ok(card)
    }

    async fn fetch_card(&self, card_id: i64) -> Result<Card> {
        let endpoint = self.endpoint(&format!("/cards/{card_id}"));
        let response = self.client.get(&endpoint).send().await?;
        let card = Self::check_status(&endpoint, response)?.json().await?;
        Ok(card)
    }

    async fn update_card(&self, card_id: i64, edit: &CardEdit) -> Result<Card> {
        let endpoint = self.endpoint(&format!("/cards/{card_id}/update"));
        let response = self
            .client
            .post(&endpoint)
            .form(&card_edit_form(edit))
            .send()
            .await?;
        let card = Self::check_status(&endpoint, response)?.json().await?;
        Ok(card)
    }

    async fn move_card(&self, card_id: i64, target: &MoveCard) -> Result<()> {
        let endpoint = self.endpoint(&format!("/cards/{card_id}/move"));
        tracing::debug!(
            card_id,
            lane_id = target.lane_id,
            position = target.position,
            "persisting card move"
        );
        let response = self.client.put(&endpoint).json(target).send().await?;
        Self::check_status(&endpoint, response)?;
        Ok(())
    }

    async fn reorder_cards(&self, updates: &[CardPlacement]) -> Result<()> {
        let endpoint = self.endpoint("/cards/reorder");
        let body = ReorderCards {
            updates: updates.to_vec(),
        };
        let response = self.client.put(&endpoint).json(&body).send().await?;
        Self::check_status(&endpoint, response)?;
        Ok(())
    }

    async fn delete_card(&self, card_id: i64) -> Result<()> {
        let endpoint = self.endpoint(&format!("/cards/{card_id}"));
        let response = self.client.delete(&endpoint).send().await?;
        Self::check_status(&endpoint, response)?;
        Ok(())
    }

    async fn create_category(&self, name: &str, color: &str) -> Result<Category> {
        let endpoint = self.endpoint("/categories");
        let response = self
            .client
            .post(&endpoint)
            .form(&[("name", name), ("color", color)])
            .send()
            .await?;
        let category = Self::check_status(&endpoint, response)?.json().await?;
        Ok(category)
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let endpoint = self.endpoint("/categories");
        let response = self.client.get(&endpoint).send().await?;
        let categories = Self::check_status(&endpoint, response)?.json().await?;
        Ok(categories)
    }
}
