//! # Kanban Client
//!
//! Client-side interaction core for a kanban board web application.
//!
//! This crate provides the typed board state, fractional position
//! allocation for drag-and-drop reordering, modal dialog management, and
//! the HTTP glue for create/update/delete/reorder calls against the
//! backend API. The server remains the source of truth; nothing is
//! persisted locally.

pub mod api;
pub mod domain;
pub mod error;
pub mod ui;

// Re-export commonly used types
pub use api::{HttpApi, KanbanApi, MoveCard};
pub use domain::{
    board::{Board, Lane},
    card::{Card, Category},
    position::position_for_insertion,
};
pub use error::{KanbanError, Result};
pub use ui::{BoardController, ModalState, Notification};
