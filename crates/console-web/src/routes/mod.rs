//! Route handlers for the web console.

pub mod health;
pub mod notifications;
pub mod system;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // HTML pages
        .route("/", get(system::index_page))
        .route("/system/data-constructor", get(system::data_constructor_page))
        // Notification widget fragments
        .route("/notifications", get(notifications::mount))
        .route("/notifications/bell", post(notifications::click_bell))
        .route("/notifications/read-all", post(notifications::read_all))
        .route("/notifications/:id/read", post(notifications::read_one))
        .route("/notifications/:id/delete", post(notifications::delete_one))
        .route("/notifications/open", get(notifications::open_link))
        // Health check
        .route("/health", get(health::health))
}
