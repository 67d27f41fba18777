use thiserror::Error;

#[derive(Debug, Error)]
pub enum FalconError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl FalconError {
    /// Build the validation error raised when a required field is missing or blank.
    pub fn required(field: &str) -> Self {
        Self::Validation(format!("{field} is required"))
    }
}

pub type FalconResult<T> = Result<T, FalconError>;
