use crate::domain::card::Card;
use std::cmp::Ordering;

/// First position assigned in an otherwise empty lane.
pub const FIRST_POSITION: f64 = 1.0;

/// Computes the sort position for a card dropped into a lane.
///
/// `siblings` is the ordered sequence of stored positions for every card in
/// the target lane *after* the moved card has been tentatively inserted at
/// `index`; the moved card's own slot is present but its stale value is never
/// read. `None` entries stand for cards whose position attribute is missing,
/// and fall back to a reference value derived from the drop index.
///
/// The result strictly separates the card from both neighbors without
/// renumbering anyone else. Repeated midpoint insertion at the same boundary
/// will eventually exhaust f64 resolution and collide keys; the server owns
/// any cleanup of degenerate keys.
///
/// # Panics
/// Panics in debug builds if `index` is out of bounds or `siblings` is empty.
///
/// # Examples
/// ```
/// use kanban_client::domain::position::position_for_insertion;
///
/// let siblings = [Some(1.0), Some(0.0), Some(2.0), Some(3.0)];
/// assert_eq!(position_for_insertion(&siblings, 1), 1.5);
/// ```
pub fn position_for_insertion(siblings: &[Option<f64>], index: usize) -> f64 {
    debug_assert!(!siblings.is_empty());
    debug_assert!(index < siblings.len());

    let count = siblings.len();

    if count == 1 {
        return FIRST_POSITION;
    }

    if index == 0 {
        // Moving to the start
        let next = sibling_position(siblings, 1, index + 2);
        return next / 2.0;
    }

    if index == count - 1 {
        // Moving to the end
        let prev = sibling_position(siblings, index - 1, index);
        return prev + 1.0;
    }

    // Moving between cards
    let prev = sibling_position(siblings, index - 1, index);
    let next = sibling_position(siblings, index + 1, index + 2);
    (prev + next) / 2.0
}

/// Reads a neighbor's stored position, defaulting missing data to a
/// reference value derived from the drop index.
fn sibling_position(siblings: &[Option<f64>], at: usize, fallback: usize) -> f64 {
    siblings[at].unwrap_or(fallback as f64)
}

/// Sorts cards in-place by their position key, ascending.
///
/// Position values are ordinary floats; incomparable pairs are treated as
/// equal rather than panicking.
pub fn sort_cards_by_position(cards: &mut [Card]) {
    cards.sort_by(|a, b| compare_positions(a.position, b.position));
}

fn compare_positions(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::Card;

    fn positions(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_single_card_gets_first_position() {
        assert_eq!(position_for_insertion(&[None], 0), 1.0);
        assert_eq!(position_for_insertion(&[Some(7.5)], 0), 1.0);
    }

    #[test]
    fn test_insert_at_head_halves_next_position() {
        let siblings = positions(&[9.0, 4.0, 8.0]);
        assert_eq!(position_for_insertion(&siblings, 0), 2.0);
    }

    #[test]
    fn test_insert_at_tail_adds_one_to_previous() {
        let siblings = positions(&[1.0, 2.0, 0.0]);
        assert_eq!(position_for_insertion(&siblings, 2), 3.0);
    }

    #[test]
    fn test_insert_between_neighbors_takes_midpoint() {
        let siblings = positions(&[1.0, 0.0, 2.0, 3.0]);
        let result = position_for_insertion(&siblings, 1);
        assert_eq!(result, 1.5);
        assert!(1.0 < result && result < 2.0);
    }

    #[test]
    fn test_result_separates_card_from_both_neighbors() {
        let siblings = positions(&[0.25, 0.0, 0.5]);
        let result = position_for_insertion(&siblings, 1);
        assert!(0.25 < result && result < 0.5);
    }

    #[test]
    fn test_missing_next_position_falls_back_to_index_plus_two() {
        // Head insert with an unpositioned next card: reference value is 2.
        let result = position_for_insertion(&[Some(5.0), None], 0);
        assert_eq!(result, 1.0);

        // Middle insert with an unpositioned next card at index 3.
        let siblings = [Some(1.0), Some(2.0), None, None];
        assert_eq!(position_for_insertion(&siblings, 2), (2.0 + 4.0) / 2.0);
    }

    #[test]
    fn test_missing_previous_position_falls_back_to_index() {
        // Tail insert at index 2 with an unpositioned previous card.
        let siblings = [Some(1.0), None, None];
        assert_eq!(position_for_insertion(&siblings, 2), 3.0);
    }

    #[test]
    fn test_repeated_head_insertion_stays_ordered() {
        let mut head = 8.0;
        for _ in 0..20 {
            let next = position_for_insertion(&[None, Some(head)], 0);
            assert!(next < head);
            assert!(next > 0.0);
            head = next;
        }
    }

    #[test]
    fn test_midpoint_precision_eventually_exhausts() {
        // Known limitation: repeatedly splitting the same boundary runs out
        // of f64 resolution and the new key collides with a neighbor.
        let mut lo = 1.0;
        let hi = 2.0;
        let mut collided = false;
        for _ in 0..128 {
            let mid = position_for_insertion(&[Some(lo), None, Some(hi)], 1);
            if mid == lo || mid == hi {
                collided = true;
                break;
            }
            lo = mid;
        }
        assert!(collided);
    }

    #[test]
    fn test_sort_cards_by_position() {
        let mut cards = vec![
            Card::test_fixture(3, 1, 2.5),
            Card::test_fixture(1, 1, 0.5),
            Card::test_fixture(2, 1, 1.75),
        ];

        sort_cards_by_position(&mut cards);

        let ids: Vec<i64> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
