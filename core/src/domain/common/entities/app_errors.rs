use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Malformed or out-of-range input, detected before any mutation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing resource or a resource owned by someone else. Both cases are
    /// reported identically so callers cannot probe for existence.
    #[error("Resource not found")]
    NotFoundOrForbidden,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn store(context: &str, err: impl std::fmt::Display) -> Self {
        Self::StoreUnavailable(format!("{context}: {err}"))
    }
}
