#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

use thiserror::Error;

/// User facing failures of a DevExy operation. Every variant carries the
/// message shown in the panel that triggered the operation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DevexyError {
    /// Not logged in locally, or the backend rejected the token.
    #[error("{0}")]
    Auth(String),

    /// The request exceeded the operation's timeout.
    #[error("{0}")]
    Timeout(String),

    /// The backend answered with an error status.
    #[error("{0}")]
    Backend(String),

    /// The request was sent but no response came back.
    #[error("{0}")]
    Network(String),

    /// The user declined a confirmation prompt before anything was sent.
    #[error("Operation cancelled by user")]
    Cancelled,

    /// Missing workspace, missing selection and other validation failures.
    #[error("{0}")]
    Precondition(String),
}

impl DevexyError {
    pub fn not_logged_in() -> DevexyError {
        return DevexyError::Auth("Not logged in. Please log in first.".to_string());
    }

    pub fn token_expired() -> DevexyError {
        return DevexyError::Auth(
            "Authentication failed. Your token may have expired. Please log in again.".to_string(),
        );
    }

    pub fn is_cancelled(err: &anyhow::Error) -> bool {
        return matches!(
            err.downcast_ref::<DevexyError>(),
            Some(DevexyError::Cancelled)
        );
    }
}
