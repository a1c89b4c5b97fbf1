use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Scam database unavailable: {0}")]
    StoreUnavailable(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Chat transport error: {0}")]
    TransportError(String),

    #[error("Invalid update: {0}")]
    InvalidUpdate(String),
}
