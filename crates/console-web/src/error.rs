//! Error types for the web console.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use notification_widget::WidgetError;
use thiserror::Error;

/// Errors that can occur in the web console.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Notification dropdown error.
    #[error("{0}")]
    Widget(#[from] WidgetError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ConsoleError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ConsoleError::Widget(err @ WidgetError::InvalidLink { .. }) => {
                tracing::warn!("Rejected link: {}", err);
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ConsoleError::Widget(err @ WidgetError::Api(_)) => {
                tracing::error!("Notification API error: {}", err);
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
            ConsoleError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for console handlers.
pub type Result<T> = std::result::Result<T, ConsoleError>;
