use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid calendar options: {0}")]
    InvalidOptions(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
