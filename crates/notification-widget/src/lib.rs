//! Notification bell and dropdown view state.
//!
//! This crate holds the state behind a notification bell:
//!
//! - [`NotificationDropdown`] - open/closed state, the alert and message
//!   sequences, and the operations that refresh or mutate them
//! - [`LinkTarget`] / [`Navigator`] - routing of clicked notification links
//!   to client-side navigation or a new browser context
//! - [`testing`] - in-memory doubles for driving the dropdown in tests
//!
//! The backend is authoritative: every successful call replaces local state
//! wholesale with what the server returned.
//!
//! # Example
//!
//! ```rust
//! use notification_widget::testing::{MemoryApi, RecordingNavigator};
//! use notification_widget::{Location, Message, NotificationDropdown};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), notification_widget::WidgetError> {
//!     let api = MemoryApi::new(vec![], vec![Message::new(1, "Report ready")]);
//!     let mut dropdown = NotificationDropdown::new(api, Location::new("app.example.com"));
//!
//!     dropdown.fetch_data().await?;
//!     assert!(dropdown.has_unread());
//!
//!     dropdown.read_all().await?;
//!     assert!(!dropdown.has_unread());
//!
//!     let mut navigator = RecordingNavigator::default();
//!     dropdown.on_message_click(Some("https://app.example.com/reports/1"), &mut navigator)?;
//!     assert_eq!(navigator.pushed(), vec!["/reports/1"]);
//!     Ok(())
//! }
//! ```

mod dropdown;
mod error;
mod navigation;
pub mod testing;

pub use dropdown::{NotificationDropdown, RefreshPolicy};
pub use error::WidgetError;
pub use navigation::{followable_link, ClickOutcome, LinkTarget, Location, Navigator};

// Re-export the data model for convenience
pub use notification_client::{Alert, Message, NotificationApi, NotificationId, NotificationsPayload};
