//! Web console binary.

use std::sync::Arc;

use console_web::{AppState, Config};
use notification_client::{ClientConfig, NotificationApi, NotificationClient, PollConfig};
use notification_widget::Location;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting console web server");

    // Connect the notification API
    let client = NotificationClient::new(ClientConfig::new(&config.notifications_api_url))?;
    let api: Arc<dyn NotificationApi> = Arc::new(client);

    // Build application state
    let state = AppState::new(
        api,
        Location::new(&config.public_host),
        config.refresh_policy,
    );
    if let Err(e) = state.mount().await {
        warn!("Initial notification load failed: {}", e);
    }

    if let Some(interval) = config.poll_interval {
        info!(?interval, "Background notification refresh enabled");
        state.spawn_poller(PollConfig::every(interval));
    }

    // Build router
    let app = console_web::app(state);

    // Start server
    info!(addr = %config.addr, "Console web server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
