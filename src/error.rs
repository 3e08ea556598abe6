use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeFixError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid corrections file: {0}")]
    InvalidCorrections(String),
}

pub type Result<T> = std::result::Result<T, RecipeFixError>;
