pub mod controller;
pub mod modal;

pub use controller::{BoardController, Notification, Severity};
pub use modal::{Modal, ModalId, ModalState};
