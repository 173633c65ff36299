#[derive(Debug, thiserror::Error)]
pub enum FoodError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no food record with slug '{0}'")]
    SlugNotFound(String),
    #[error("duplicate slug '{0}' in food dataset")]
    DuplicateSlug(String),
    #[error("invalid food record '{slug}': {reason}")]
    InvalidRecord { slug: String, reason: String },
    #[error("failed to read food dataset: {0}")]
    FileRead(std::io::Error),
    #[error("failed to deserialize food dataset: {0}")]
    Deserialization(serde_json::Error),
}

pub type FoodResult<T> = std::result::Result<T, FoodError>;
