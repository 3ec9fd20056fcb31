use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid snapshot json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
