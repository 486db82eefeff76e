//! Web console hosting the notification bell and system pages.
//!
//! Provides the notification dropdown and the system pages via HTMX +
//! server-rendered HTML.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use config::{Config, ConfigError};
pub use error::ConsoleError;
pub use state::AppState;

/// Build the full application: routes, static assets and request tracing.
pub fn app(state: AppState) -> Router {
    routes::router()
        .nest_service("/static", ServeDir::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static")))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
