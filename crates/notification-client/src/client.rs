//! Notification API HTTP client.

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::api::NotificationApi;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::types::{Message, NotificationId, NotificationsPayload};

/// Client for the user notification endpoints.
#[derive(Clone)]
pub struct NotificationClient {
    http: Client,
    config: ClientConfig,
}

impl NotificationClient {
    /// Build a client for the given configuration.
    ///
    /// No request is made; the base URL is only validated.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        url::Url::parse(&config.base_url)
            .map_err(|e| ClientError::Config(format!("base_url {:?}: {}", config.base_url, e)))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Http)?;

        info!("Notification client targeting {}", config.base_url);

        Ok(Self { http, config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the underlying HTTP client.
    pub fn http_client(&self) -> &Client {
        &self.http
    }

    /// Send a body-less request and decode the JSON answer.
    async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
    ) -> Result<R, ClientError> {
        debug!(%method, url, "Notification API call");

        let response = self
            .http
            .request(method.clone(), url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(ClientError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%method, url, status = status.as_u16(), "Notification API call failed");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(ClientError::Http)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl NotificationApi for NotificationClient {
    async fn fetch_notifications(&self) -> Result<NotificationsPayload, ClientError> {
        self.request(Method::GET, &self.config.notifications_url())
            .await
    }

    async fn read_all(&self) -> Result<Vec<Message>, ClientError> {
        self.request(Method::PUT, &self.config.read_all_url()).await
    }

    async fn read_notification(&self, id: NotificationId) -> Result<Vec<Message>, ClientError> {
        self.request(Method::PUT, &self.config.read_url(id)).await
    }

    async fn delete_notification(
        &self,
        id: NotificationId,
    ) -> Result<Vec<Message>, ClientError> {
        self.request(Method::DELETE, &self.config.delete_url(id))
            .await
    }
}

impl std::fmt::Debug for NotificationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationClient")
            .field("config", &self.config)
            .finish()
    }
}
