//! Configuration types for notification-client.

use std::time::Duration;

use crate::types::NotificationId;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for connecting to the notification API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://127.0.0.1:8000/api").
    ///
    /// Endpoint paths such as `users/notifications/` are appended to it.
    pub base_url: String,
    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the URL listing the user's alerts and messages.
    pub fn notifications_url(&self) -> String {
        self.endpoint("users/notifications/")
    }

    /// Get the URL that marks every message as read.
    pub fn read_all_url(&self) -> String {
        self.endpoint("users/notifications/read-all/")
    }

    /// Get the URL that marks one message as read.
    pub fn read_url(&self, id: NotificationId) -> String {
        self.endpoint(&format!("users/notifications/{}/read/", id))
    }

    /// Get the URL that deletes one message.
    pub fn delete_url(&self, id: NotificationId) -> String {
        self.endpoint(&format!("users/notifications/{}/delete/", id))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://127.0.0.1:8000/api")
    }
}
