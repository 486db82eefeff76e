//! Notification dropdown state.

use notification_client::{
    has_unread, Alert, Message, NotificationApi, NotificationId, NotificationsPayload,
};
use tracing::debug;

use crate::error::WidgetError;
use crate::navigation::{followable_link, ClickOutcome, LinkTarget, Location, Navigator};

/// When clicking the bell refreshes the notifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Refetch when the panel opens.
    #[default]
    OnOpen,
    /// Refetch when the panel closes.
    OnClose,
}

impl std::str::FromStr for RefreshPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on-open" | "open" => Ok(RefreshPolicy::OnOpen),
            "on-close" | "close" => Ok(RefreshPolicy::OnClose),
            other => Err(format!("unknown refresh policy: {}", other)),
        }
    }
}

/// View state of the notification bell and its dropdown panel.
///
/// `alerts` and `messages` always hold the last successful server response
/// for their endpoint. Failed calls return an error and change nothing.
#[derive(Debug)]
pub struct NotificationDropdown<A> {
    api: A,
    location: Location,
    refresh_policy: RefreshPolicy,
    is_open: bool,
    alerts: Vec<Alert>,
    messages: Vec<Message>,
}

impl<A: NotificationApi> NotificationDropdown<A> {
    /// Create a closed, empty dropdown rendered on `location`.
    pub fn new(api: A, location: Location) -> Self {
        Self {
            api,
            location,
            refresh_policy: RefreshPolicy::default(),
            is_open: false,
            alerts: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Set when clicking the bell refreshes.
    pub fn with_refresh_policy(mut self, policy: RefreshPolicy) -> Self {
        self.refresh_policy = policy;
        self
    }

    /// Fetch alerts and messages, replacing both sequences.
    pub async fn fetch_data(&mut self) -> Result<(), WidgetError> {
        let payload = self.api.fetch_notifications().await?;
        self.apply_snapshot(payload);
        Ok(())
    }

    /// Replace both sequences with a snapshot obtained elsewhere.
    pub fn apply_snapshot(&mut self, payload: NotificationsPayload) {
        debug!(
            alerts = payload.alerts.len(),
            messages = payload.messages.len(),
            "Notifications replaced"
        );
        self.alerts = payload.alerts;
        self.messages = payload.messages;
    }

    /// Toggle the panel, refreshing according to the refresh policy.
    ///
    /// Returns whether the panel is open afterwards. The toggle sticks even
    /// when the refresh fails.
    pub async fn handle_click_bell(&mut self) -> Result<bool, WidgetError> {
        self.is_open = !self.is_open;
        debug!(open = self.is_open, "Bell clicked");

        let refresh = match self.refresh_policy {
            RefreshPolicy::OnOpen => self.is_open,
            RefreshPolicy::OnClose => !self.is_open,
        };
        if refresh {
            self.fetch_data().await?;
        }

        Ok(self.is_open)
    }

    /// Mark every message as read.
    pub async fn read_all(&mut self) -> Result<(), WidgetError> {
        let messages = self.api.read_all().await?;
        self.replace_messages(messages);
        Ok(())
    }

    /// Mark the message with this id as read.
    pub async fn read_notification(&mut self, id: NotificationId) -> Result<(), WidgetError> {
        let messages = self.api.read_notification(id).await?;
        self.replace_messages(messages);
        Ok(())
    }

    /// Delete the message with this id.
    pub async fn delete_notification(&mut self, id: NotificationId) -> Result<(), WidgetError> {
        let messages = self.api.delete_notification(id).await?;
        self.replace_messages(messages);
        Ok(())
    }

    /// Follow the link of a clicked alert or message.
    ///
    /// Links on the current host navigate client-side and close the panel;
    /// anything else opens in a new browser context. Missing or blank links
    /// do nothing.
    pub fn on_message_click<N: Navigator + ?Sized>(
        &mut self,
        link: Option<&str>,
        navigator: &mut N,
    ) -> Result<ClickOutcome, WidgetError> {
        let location = self.location.clone();
        self.on_message_click_at(link, &location, navigator)
    }

    /// Follow a clicked link as seen from `location` instead of the
    /// location the dropdown was created with.
    pub fn on_message_click_at<N: Navigator + ?Sized>(
        &mut self,
        link: Option<&str>,
        location: &Location,
        navigator: &mut N,
    ) -> Result<ClickOutcome, WidgetError> {
        let Some(link) = followable_link(link) else {
            return Ok(ClickOutcome::Ignored);
        };

        match LinkTarget::classify(link, location)? {
            LinkTarget::Internal { path } => {
                navigator.push(&path);
                self.close();
                Ok(ClickOutcome::Navigated { path })
            }
            LinkTarget::External { url } => {
                navigator.open_external(&url);
                Ok(ClickOutcome::OpenedExternal { url })
            }
        }
    }

    fn replace_messages(&mut self, messages: Vec<Message>) {
        debug!(messages = messages.len(), "Messages replaced");
        self.messages = messages;
    }
}

impl<A> NotificationDropdown<A> {
    /// Close the panel without refreshing.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Whether the panel is shown.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Current alerts, in server order.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Current messages, in server order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Whether the bell shows its unread bullet.
    pub fn has_unread(&self) -> bool {
        has_unread(&self.alerts, &self.messages)
    }

    /// Whether there is nothing to show (the "no notifications" placeholder).
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty() && self.messages.is_empty()
    }

    /// The page the dropdown is rendered on.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// The refresh policy in effect.
    pub fn refresh_policy(&self) -> RefreshPolicy {
        self.refresh_policy
    }

    /// The notification API backing this dropdown.
    pub fn api(&self) -> &A {
        &self.api
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryApi;

    #[test]
    fn test_refresh_policy_from_str() {
        assert_eq!("on-open".parse::<RefreshPolicy>().unwrap(), RefreshPolicy::OnOpen);
        assert_eq!("ON-CLOSE".parse::<RefreshPolicy>().unwrap(), RefreshPolicy::OnClose);
        assert!("sometimes".parse::<RefreshPolicy>().is_err());
    }

    #[test]
    fn test_new_dropdown_is_closed_and_empty() {
        let dropdown = NotificationDropdown::new(MemoryApi::default(), Location::new("a"));
        assert!(!dropdown.is_open());
        assert!(dropdown.is_empty());
        assert!(!dropdown.has_unread());
        assert_eq!(dropdown.refresh_policy(), RefreshPolicy::OnOpen);
    }

    #[test]
    fn test_apply_snapshot_replaces_both() {
        let mut dropdown = NotificationDropdown::new(MemoryApi::default(), Location::new("a"));
        dropdown.apply_snapshot(NotificationsPayload {
            alerts: vec![Alert::new("Heads up")],
            messages: vec![Message::new(1, "one")],
        });
        assert_eq!(dropdown.alerts().len(), 1);
        assert_eq!(dropdown.messages().len(), 1);

        dropdown.apply_snapshot(NotificationsPayload::default());
        assert!(dropdown.is_empty());
    }
}
