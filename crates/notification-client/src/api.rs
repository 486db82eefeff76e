//! The notification API as a trait, so views can run against test doubles.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ClientError;
use crate::types::{Message, NotificationId, NotificationsPayload};

/// Operations offered by the backend notification API.
///
/// Every mutation answers with the complete, authoritative message list.
#[async_trait]
pub trait NotificationApi: Send + Sync {
    /// `GET users/notifications/`
    async fn fetch_notifications(&self) -> Result<NotificationsPayload, ClientError>;

    /// `PUT users/notifications/read-all/`
    async fn read_all(&self) -> Result<Vec<Message>, ClientError>;

    /// `PUT users/notifications/{id}/read/`
    async fn read_notification(&self, id: NotificationId) -> Result<Vec<Message>, ClientError>;

    /// `DELETE users/notifications/{id}/delete/`
    async fn delete_notification(&self, id: NotificationId)
        -> Result<Vec<Message>, ClientError>;
}

#[async_trait]
impl<T: NotificationApi + ?Sized> NotificationApi for Arc<T> {
    async fn fetch_notifications(&self) -> Result<NotificationsPayload, ClientError> {
        (**self).fetch_notifications().await
    }

    async fn read_all(&self) -> Result<Vec<Message>, ClientError> {
        (**self).read_all().await
    }

    async fn read_notification(&self, id: NotificationId) -> Result<Vec<Message>, ClientError> {
        (**self).read_notification(id).await
    }

    async fn delete_notification(
        &self,
        id: NotificationId,
    ) -> Result<Vec<Message>, ClientError> {
        (**self).delete_notification(id).await
    }
}
