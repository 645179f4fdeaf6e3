use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum PostboxError {
    #[error("Post not found: {0}")]
    PostNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Input interrupted")]
    Interrupted,

    #[error("Prompt error: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, PostboxError>;
