use thiserror::Error;

pub type Result<T> = std::result::Result<T, KanbanError>;

#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("Card not found: {0}")]
    CardNotFound(i64),

    #[error("Lane not found: {0}")]
    LaneNotFound(i64),

    #[error("Title is required")]
    TitleRequired,

    #[error("Name is required")]
    NameRequired,

    #[error("Drop index {index} out of range for lane with {len} cards")]
    DropIndexOutOfRange { index: usize, len: usize },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Server returned {status} for {endpoint}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
