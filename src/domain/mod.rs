pub mod board;
pub mod card;
pub mod position;

pub use board::{Board, Lane};
pub use card::{Card, Category, DEFAULT_COLOR};
pub use position::{position_for_insertion, sort_cards_by_position, FIRST_POSITION};
