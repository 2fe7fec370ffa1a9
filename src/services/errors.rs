use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Errors surfaced by the service layer and mapped to HTTP statuses by the
/// route handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Credentials are missing or wrong (401).
    #[error("unauthorized")]
    Unauthorized,
    /// The authenticated user's role does not permit the operation (403).
    #[error("forbidden")]
    Forbidden,
    /// The requested entity does not exist (404).
    #[error("not found")]
    NotFound,
    /// A uniqueness constraint was violated (409).
    #[error("conflict: {0}")]
    Conflict(String),
    /// The submitted payload failed validation (400).
    #[error("invalid form data: {0}")]
    Form(String),
    #[error("password error: {0}")]
    Password(#[from] bcrypt::BcryptError),
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
    /// Any other repository failure (500).
    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::Conflict(what) => Self::Conflict(what),
            other => Self::Repository(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
