//! Print notifications as they change.
//!
//! Run with: cargo run -p notification-client --example watch_notifications
//!
//! Examples:
//!   NOTIFICATIONS_API_URL=http://127.0.0.1:8000/api cargo run --example watch_notifications
//!   NOTIFICATIONS_POLL_SECS=5 cargo run --example watch_notifications

use std::env;
use std::time::Duration;

use futures::StreamExt;
use notification_client::{ClientConfig, NotificationApi, NotificationClient, PollConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let base_url =
        env::var("NOTIFICATIONS_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8000/api".into());
    let interval: u64 = env::var("NOTIFICATIONS_POLL_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);

    println!("Watching {} every {}s...", base_url, interval);
    let client = NotificationClient::new(ClientConfig::new(base_url))?;

    let initial = client.fetch_notifications().await?;
    println!(
        "{} alerts, {} messages, unread: {}",
        initial.alerts.len(),
        initial.messages.len(),
        initial.has_unread()
    );

    let mut last = initial;
    let mut poller = notification_client::poll(client, PollConfig::every(Duration::from_secs(interval)));
    while let Some(result) = poller.next().await {
        match result {
            Ok(payload) if payload != last => {
                for alert in &payload.alerts {
                    println!("[alert] {}", alert.message);
                }
                for message in &payload.messages {
                    let marker = if message.is_read { ' ' } else { '*' };
                    println!("{} #{} {}", marker, message.id, message.message);
                }
                last = payload;
            }
            Ok(_) => {}
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}
