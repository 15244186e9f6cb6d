use crate::domain::card::Card;
use crate::domain::position::sort_cards_by_position;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A lane (column) on the kanban board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lane {
    pub id: i64,
    pub title: String,
    pub position: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Lane {
    pub fn new(id: i64, title: String, position: f64) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            position,
            created_at: now,
            updated_at: now,
            cards: Vec::new(),
        }
    }

    /// Re-sorts the lane's cards by their position keys.
    pub fn sort_cards(&mut self) {
        sort_cards_by_position(&mut self.cards);
    }

    /// Returns the stored position of each card in display order.
    ///
    /// The snapshot shape feeds the position allocator, which tolerates
    /// missing entries.
    pub fn position_snapshot(&self) -> Vec<Option<f64>> {
        self.cards.iter().map(|c| Some(c.position)).collect()
    }

    pub fn card_index(&self, card_id: i64) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card_id)
    }
}

/// The board owning a set of ordered lanes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub lanes: Vec<Lane>,
}

impl Board {
    pub fn new(id: i64, name: String, color: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description: String::new(),
            color,
            created_at: now,
            updated_at: now,
            lanes: Vec::new(),
        }
    }

    /// Re-sorts lanes by their position keys.
    pub fn sort_lanes(&mut self) {
        self.lanes
            .sort_by(|a, b| a.position.partial_cmp(&b.position).unwrap_or(Ordering::Equal));
    }

    pub fn lane(&self, lane_id: i64) -> Option<&Lane> {
        self.lanes.iter().find(|l| l.id == lane_id)
    }

    pub fn lane_mut(&mut self, lane_id: i64) -> Option<&mut Lane> {
        self.lanes.iter_mut().find(|l| l.id == lane_id)
    }

    /// Finds a card anywhere on the board.
    pub fn card(&self, card_id: i64) -> Option<&Card> {
        self.lanes
            .iter()
            .flat_map(|l| l.cards.iter())
            .find(|c| c.id == card_id)
    }

    /// Detaches a card from whichever lane currently holds it.
    pub fn take_card(&mut self, card_id: i64) -> Option<Card> {
        for lane in &mut self.lanes {
            if let Some(index) = lane.card_index(card_id) {
                return Some(lane.cards.remove(index));
            }
        }
        None
    }

    /// Removes a card from the board. Returns true if it existed.
    pub fn remove_card(&mut self, card_id: i64) -> bool {
        self.take_card(card_id).is_some()
    }

    /// Removes a lane and its cards. Returns true if it existed.
    pub fn remove_lane(&mut self, lane_id: i64) -> bool {
        let before = self.lanes.len();
        self.lanes.retain(|l| l.id != lane_id);
        self.lanes.len() != before
    }

    /// Rearranges lanes to match the given id order and renumbers their
    /// positions by index, mirroring what the server persists on reorder.
    ///
    /// Ids that don't match a lane are skipped; lanes absent from `order`
    /// keep their relative order after the reordered ones.
    pub fn apply_lane_order(&mut self, order: &[i64]) {
        let mut reordered: Vec<Lane> = Vec::with_capacity(self.lanes.len());
        for id in order {
            if let Some(index) = self.lanes.iter().position(|l| l.id == *id) {
                reordered.push(self.lanes.remove(index));
            }
        }
        reordered.append(&mut self.lanes);

        for (index, lane) in reordered.iter_mut().enumerate() {
            lane.position = index as f64;
        }
        self.lanes = reordered;
    }

    /// Ids of all lanes in display order.
    pub fn lane_ids(&self) -> Vec<i64> {
        self.lanes.iter().map(|l| l.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_lanes() -> Board {
        let mut board = Board::new(1, "Main Project".to_string(), "#3B82F6".to_string());
        board.lanes = vec![
            Lane::new(10, "To Do".to_string(), 0.0),
            Lane::new(20, "Doing".to_string(), 1.0),
            Lane::new(30, "Done".to_string(), 2.0),
        ];
        board
    }

    #[test]
    fn test_sort_lanes_by_position() {
        let mut board = board_with_lanes();
        board.lanes[0].position = 5.0;
        board.sort_lanes();

        assert_eq!(board.lane_ids(), vec![20, 30, 10]);
    }

    #[test]
    fn test_take_card_detaches_from_owning_lane() {
        let mut board = board_with_lanes();
        board.lane_mut(10).unwrap().cards.push(Card::test_fixture(100, 10, 1.0));
        board.lane_mut(20).unwrap().cards.push(Card::test_fixture(200, 20, 1.0));

        let card = board.take_card(200).unwrap();
        assert_eq!(card.id, 200);
        assert!(board.lane(20).unwrap().cards.is_empty());
        assert_eq!(board.lane(10).unwrap().cards.len(), 1);

        assert!(board.take_card(999).is_none());
    }

    #[test]
    fn test_apply_lane_order_renumbers_by_index() {
        let mut board = board_with_lanes();
        board.apply_lane_order(&[30, 10, 20]);

        assert_eq!(board.lane_ids(), vec![30, 10, 20]);
        let positions: Vec<f64> = board.lanes.iter().map(|l| l.position).collect();
        assert_eq!(positions, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_apply_lane_order_skips_unknown_and_keeps_leftovers() {
        let mut board = board_with_lanes();
        board.apply_lane_order(&[20, 999]);

        // 20 moves to the front, the rest keep their relative order.
        assert_eq!(board.lane_ids(), vec![20, 10, 30]);
    }

    #[test]
    fn test_remove_lane_drops_its_cards() {
        let mut board = board_with_lanes();
        board.lane_mut(10).unwrap().cards.push(Card::test_fixture(100, 10, 1.0));

        assert!(board.remove_lane(10));
        assert!(board.lane(10).is_none());
        assert!(board.card(100).is_none());
        assert!(!board.remove_lane(10));
    }

    #[test]
    fn test_position_snapshot_matches_display_order() {
        let mut lane = Lane::new(10, "To Do".to_string(), 0.0);
        lane.cards.push(Card::test_fixture(1, 10, 1.0));
        lane.cards.push(Card::test_fixture(2, 10, 2.5));

        assert_eq!(lane.position_snapshot(), vec![Some(1.0), Some(2.5)]);
    }
}
