//! User notification API client library.
//!
//! This crate provides a Rust client for the backend that owns a user's
//! notifications. It supports:
//!
//! - Fetching the current alerts and messages
//! - Marking one or all messages as read
//! - Deleting messages
//! - Polling for fresh notifications on an interval
//!
//! # Example
//!
//! ```no_run
//! use notification_client::{ClientConfig, NotificationApi, NotificationClient};
//!
//! # async fn example() -> Result<(), notification_client::ClientError> {
//! let config = ClientConfig::new("http://127.0.0.1:8000/api");
//! let client = NotificationClient::new(config)?;
//!
//! let payload = client.fetch_notifications().await?;
//! for message in &payload.messages {
//!     println!("#{} {} (read: {})", message.id, message.message, message.is_read);
//! }
//!
//! // The backend answers every mutation with the full message list
//! let messages = client.read_all().await?;
//! println!("{} messages after read-all", messages.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod poll;
pub mod types;

pub use api::NotificationApi;
pub use client::NotificationClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use poll::{poll, NotificationPoller, PollConfig};
pub use types::*;

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
