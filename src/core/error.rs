use thiserror::Error;

#[derive(Error, Debug)]
pub enum SidekickError {
    #[error("Chat service unreachable: {0}")]
    Unreachable(String),

    #[error("LLM error: {0}")]
    LlmError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SidekickError>;
