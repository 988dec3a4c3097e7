use thiserror::Error;

#[derive(Debug, Error)]
pub enum MacroError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown meal category: {0}")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, MacroError>;
