//! Interval polling of the notification listing.

use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::stream::{self, BoxStream, Stream};
use tracing::{debug, info, warn};

use crate::api::NotificationApi;
use crate::error::ClientError;
use crate::types::NotificationsPayload;

/// Configuration for interval polling with backoff on failure.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay between successful polls.
    pub interval: Duration,
    /// Maximum delay between polls while failing.
    pub max_delay: Duration,
    /// Backoff multiplier applied per consecutive failure.
    pub backoff_multiplier: f64,
    /// Consecutive failures after which the stream ends (None = never).
    pub max_failures: Option<u32>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(60),
            max_delay: Duration::from_secs(600),
            backoff_multiplier: 2.0,
            max_failures: None,
        }
    }
}

impl PollConfig {
    /// Poll every `interval`, with default backoff settings.
    pub fn every(interval: Duration) -> Self {
        Self {
            interval,
            ..Self::default()
        }
    }

    /// Calculate the delay before the next poll after `failures` consecutive failures.
    pub fn delay_for_failures(&self, failures: u32) -> Duration {
        let delay_ms =
            self.interval.as_millis() as f64 * self.backoff_multiplier.powi(failures as i32);
        let delay = Duration::from_millis(delay_ms as u64);
        delay.min(self.max_delay.max(self.interval))
    }

    /// Check if polling should continue after the given number of consecutive failures.
    pub fn should_continue(&self, failures: u32) -> bool {
        self.max_failures.map_or(true, |max| failures < max)
    }
}

struct PollState<A> {
    api: A,
    config: PollConfig,
    failures: u32,
}

/// A stream of notification snapshots fetched on an interval.
///
/// Each item is the result of one `GET users/notifications/`. The first
/// request is made one interval after the stream is first polled.
pub struct NotificationPoller {
    inner: BoxStream<'static, Result<NotificationsPayload, ClientError>>,
}

impl NotificationPoller {
    /// Create a poller over any notification API.
    pub fn new<A>(api: A, config: PollConfig) -> Self
    where
        A: NotificationApi + 'static,
    {
        info!(interval = ?config.interval, "Starting notification poller");

        let state = PollState {
            api,
            config,
            failures: 0,
        };

        let inner = stream::unfold(Some(state), |state| async move {
            let Some(mut state) = state else {
                return None;
            };

            tokio::time::sleep(state.config.delay_for_failures(state.failures)).await;

            match state.api.fetch_notifications().await {
                Ok(payload) => {
                    if state.failures > 0 {
                        info!("Notification polling recovered");
                    }
                    state.failures = 0;
                    debug!(
                        alerts = payload.alerts.len(),
                        messages = payload.messages.len(),
                        "Polled notifications"
                    );
                    Some((Ok(payload), Some(state)))
                }
                Err(e) => {
                    state.failures += 1;
                    warn!(
                        "Notification poll failed: {} (failures: {})",
                        e, state.failures
                    );
                    if state.config.should_continue(state.failures) {
                        Some((Err(e), Some(state)))
                    } else {
                        info!("Notification poller giving up");
                        Some((Err(e), None))
                    }
                }
            }
        });

        Self {
            inner: Box::pin(inner),
        }
    }
}

impl Stream for NotificationPoller {
    type Item = Result<NotificationsPayload, ClientError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

/// Create a notification poller.
pub fn poll<A>(api: A, config: PollConfig) -> NotificationPoller
where
    A: NotificationApi + 'static,
{
    NotificationPoller::new(api, config)
}
