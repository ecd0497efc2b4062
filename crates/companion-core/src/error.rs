use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("message must not be empty")]
    EmptyMessage,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}
