//! In-memory doubles for exercising the dropdown without a backend.
//!
//! - [`MemoryApi`] - a notification API kept in memory, with call recording
//!   and failure injection
//! - [`RecordingNavigator`] - a navigator that records instead of navigating

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use notification_client::{
    Alert, ClientError, Message, NotificationApi, NotificationId, NotificationsPayload,
};

use crate::navigation::Navigator;

#[derive(Debug, Default)]
struct MemoryState {
    alerts: Vec<Alert>,
    messages: Vec<Message>,
    calls: Vec<String>,
    fail_with: Option<u16>,
}

/// A notification API that behaves like the real backend, in memory.
///
/// Clones share state, so a test can keep a handle while the dropdown owns
/// another.
#[derive(Debug, Clone, Default)]
pub struct MemoryApi {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryApi {
    /// Create an API holding these alerts and messages.
    pub fn new(alerts: Vec<Alert>, messages: Vec<Message>) -> Self {
        let api = Self::default();
        {
            let mut state = api.lock();
            state.alerts = alerts;
            state.messages = messages;
        }
        api
    }

    /// Replace the server-side alerts.
    pub fn set_alerts(&self, alerts: Vec<Alert>) {
        self.lock().alerts = alerts;
    }

    /// Replace the server-side messages.
    pub fn set_messages(&self, messages: Vec<Message>) {
        self.lock().messages = messages;
    }

    /// Server-side messages.
    pub fn messages(&self) -> Vec<Message> {
        self.lock().messages.clone()
    }

    /// Make every following call fail with this HTTP status.
    pub fn fail_with(&self, status: u16) {
        self.lock().fail_with = Some(status);
    }

    /// Stop failing calls.
    pub fn recover(&self) {
        self.lock().fail_with = None;
    }

    /// Calls made so far, e.g. `"GET users/notifications/"`.
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        // Poisoning is ignored.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn begin(&self, call: String) -> Result<MutexGuard<'_, MemoryState>, ClientError> {
        let mut state = self.lock();
        state.calls.push(call);
        match state.fail_with {
            Some(status) => Err(ClientError::Status {
                status,
                body: "injected failure".to_string(),
            }),
            None => Ok(state),
        }
    }
}

#[async_trait]
impl NotificationApi for MemoryApi {
    async fn fetch_notifications(&self) -> Result<NotificationsPayload, ClientError> {
        let state = self.begin("GET users/notifications/".to_string())?;
        Ok(NotificationsPayload {
            alerts: state.alerts.clone(),
            messages: state.messages.clone(),
        })
    }

    async fn read_all(&self) -> Result<Vec<Message>, ClientError> {
        let mut state = self.begin("PUT users/notifications/read-all/".to_string())?;
        for message in state.messages.iter_mut() {
            message.is_read = true;
        }
        Ok(state.messages.clone())
    }

    async fn read_notification(&self, id: NotificationId) -> Result<Vec<Message>, ClientError> {
        let mut state = self.begin(format!("PUT users/notifications/{}/read/", id))?;
        match state.messages.iter_mut().find(|m| m.id == id) {
            Some(message) => message.is_read = true,
            None => return Err(not_found(id)),
        }
        Ok(state.messages.clone())
    }

    async fn delete_notification(
        &self,
        id: NotificationId,
    ) -> Result<Vec<Message>, ClientError> {
        let mut state = self.begin(format!("DELETE users/notifications/{}/delete/", id))?;
        if !state.messages.iter().any(|m| m.id == id) {
            return Err(not_found(id));
        }
        state.messages.retain(|m| m.id != id);
        Ok(state.messages.clone())
    }
}

fn not_found(id: NotificationId) -> ClientError {
    ClientError::Status {
        status: 404,
        body: format!("notification {} not found", id),
    }
}

/// A navigation performed through [`RecordingNavigator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Client-side navigation to a path.
    Push(String),
    /// A new browser context opened on a URL.
    OpenExternal(String),
}

/// A navigator that only records what it was asked to do.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    history: Vec<Navigation>,
}

impl RecordingNavigator {
    /// Every navigation, in order.
    pub fn history(&self) -> &[Navigation] {
        &self.history
    }

    /// Paths navigated to client-side.
    pub fn pushed(&self) -> Vec<&str> {
        self.history
            .iter()
            .filter_map(|n| match n {
                Navigation::Push(path) => Some(path.as_str()),
                Navigation::OpenExternal(_) => None,
            })
            .collect()
    }

    /// URLs opened in a new browser context.
    pub fn opened(&self) -> Vec<&str> {
        self.history
            .iter()
            .filter_map(|n| match n {
                Navigation::OpenExternal(url) => Some(url.as_str()),
                Navigation::Push(_) => None,
            })
            .collect()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&mut self, path: &str) {
        self.history.push(Navigation::Push(path.to_string()));
    }

    fn open_external(&mut self, url: &str) {
        self.history.push(Navigation::OpenExternal(url.to_string()));
    }
}
