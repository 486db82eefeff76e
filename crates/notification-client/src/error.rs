//! Error types for notification-client.

use thiserror::Error;

/// Errors that can occur when talking to the notification API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API answered with a non-success status.
    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status code reported by the API, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
