//! Error types for notification-widget.

use notification_client::ClientError;
use thiserror::Error;

/// Errors surfaced by the dropdown.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// The notification API call failed; local state was left unchanged.
    #[error("Notification API error: {0}")]
    Api(#[from] ClientError),

    /// A notification link could not be parsed as an absolute URL.
    #[error("Invalid notification link {link:?}: {reason}")]
    InvalidLink { link: String, reason: String },
}
