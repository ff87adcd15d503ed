use thiserror::Error;

/// Errors surfaced by the fitness and membership core.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller-supplied input failed validation before any computation ran.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The referenced entity does not exist (or is not selectable).
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("invalid date: {0}")]
    InvalidDate(#[from] time::error::ComponentRange),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
