//! Error types for panto

use thiserror::Error;

/// Errors produced by the panto client
#[derive(Debug, Error)]
pub enum Error {
    /// Backend answered with a non-success status, or could not be reached
    #[error("{message}")]
    Request {
        /// User-facing message for the failed call
        message: String,
        /// HTTP status, when a response was received
        status: Option<u16>,
    },

    /// Backend response did not carry the expected envelope field
    #[error("invalid backend response: missing `{0}` field")]
    Envelope(&'static str),

    /// No provider stored in the session
    #[error("no active session")]
    NoSession,

    /// Dashboard operation attempted before a successful load
    #[error("dashboard is not loaded")]
    NotLoaded,

    /// Unknown repository identity
    #[error("repository not found: {0}")]
    RepositoryNotFound(String),

    /// Request abandoned because the owning dashboard was unmounted
    #[error("request cancelled")]
    Cancelled,

    /// Invalid configuration value
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Session storage I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parse error
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Build a request failure carrying only a message
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
            status: None,
        }
    }
}

/// Result type alias for panto
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_displays_message_only() {
        let err = Error::Request {
            message: "Failed to fetch user details".to_string(),
            status: Some(500),
        };
        assert_eq!(err.to_string(), "Failed to fetch user details");
    }

    #[test]
    fn test_envelope_error_names_field() {
        assert_eq!(
            Error::Envelope("repos").to_string(),
            "invalid backend response: missing `repos` field"
        );
    }
}
