//! Application state shared across handlers.

use std::sync::Arc;

use futures::StreamExt;
use notification_client::{NotificationApi, PollConfig};
use notification_widget::{Location, NotificationDropdown, RefreshPolicy, WidgetError};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// The dropdown as owned by the console, over any notification API.
pub type Dropdown = NotificationDropdown<Arc<dyn NotificationApi>>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The console's notification dropdown.
    pub notifications: Arc<Mutex<Dropdown>>,
}

impl AppState {
    /// Create new application state.
    pub fn new(api: Arc<dyn NotificationApi>, location: Location, policy: RefreshPolicy) -> Self {
        let dropdown = NotificationDropdown::new(api, location).with_refresh_policy(policy);
        Self {
            notifications: Arc::new(Mutex::new(dropdown)),
        }
    }

    /// Load the initial notifications.
    pub async fn mount(&self) -> Result<(), WidgetError> {
        self.notifications.lock().await.fetch_data().await
    }

    /// Keep the dropdown fresh in the background.
    pub fn spawn_poller(&self, config: PollConfig) -> JoinHandle<()> {
        let notifications = self.notifications.clone();

        tokio::spawn(async move {
            let api = notifications.lock().await.api().clone();
            let mut poller = notification_client::poll(api, config);

            while let Some(result) = poller.next().await {
                match result {
                    Ok(payload) => notifications.lock().await.apply_snapshot(payload),
                    Err(e) => warn!("Background refresh failed: {}", e),
                }
            }

            info!("Background refresh stopped");
        })
    }
}
