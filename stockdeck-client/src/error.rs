//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Wrong email or password (the auth collaborator answers with 403)
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether the caller should clear the entered password and re-prompt
    /// rather than show a generic failure.
    pub fn is_credential_failure(&self) -> bool {
        matches!(self, ClientError::InvalidCredentials)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<ClientError> for shared::AppError {
    fn from(err: ClientError) -> Self {
        use shared::ErrorCode;
        match err {
            ClientError::Unauthorized => shared::AppError::not_authenticated(),
            ClientError::InvalidCredentials => shared::AppError::invalid_credentials(),
            ClientError::Forbidden(msg) => shared::AppError::permission_denied(msg),
            ClientError::NotFound(msg) => {
                shared::AppError::with_message(ErrorCode::NotFound, msg)
            }
            ClientError::Validation(msg) => shared::AppError::validation(msg),
            ClientError::Http(e) => shared::AppError::network(e.to_string()),
            ClientError::InvalidResponse(msg) | ClientError::Internal(msg) => {
                shared::AppError::internal(msg)
            }
            ClientError::Serialization(e) => shared::AppError::internal(e.to_string()),
        }
    }
}
