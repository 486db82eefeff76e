//! Alert and message types returned by the notification API.

use serde::{Deserialize, Serialize};

/// Identifier of an addressable message.
pub type NotificationId = i64;

/// A transient notice shown above the user's messages.
///
/// Alerts have no id and cannot be read or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Text shown to the user.
    #[serde(default)]
    pub message: String,

    /// Optional target opened when the alert is clicked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Alert {
    /// Create an alert without a link.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            link: None,
        }
    }

    /// Attach a link to the alert.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

/// A persistent, addressable user notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message id used by the read and delete endpoints.
    pub id: NotificationId,

    /// Text shown to the user.
    #[serde(default)]
    pub message: String,

    /// Optional target opened when the message is clicked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Whether the user has read the message.
    #[serde(default)]
    pub is_read: bool,
}

impl Message {
    /// Create an unread message without a link.
    pub fn new(id: NotificationId, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
            link: None,
            is_read: false,
        }
    }

    /// Attach a link to the message.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Mark the message as read.
    pub fn read(mut self) -> Self {
        self.is_read = true;
        self
    }
}

/// Response of the notification listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationsPayload {
    /// Display-only alerts.
    #[serde(default)]
    pub alerts: Vec<Alert>,

    /// Addressable messages.
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl NotificationsPayload {
    /// Whether the payload would light the unread indicator.
    pub fn has_unread(&self) -> bool {
        has_unread(&self.alerts, &self.messages)
    }
}

/// Unread indicator: any alert at all, or any message not yet read.
pub fn has_unread(alerts: &[Alert], messages: &[Message]) -> bool {
    !alerts.is_empty() || messages.iter().any(|m| !m.is_read)
}
