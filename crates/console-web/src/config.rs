//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use notification_client::ClientConfig;
use notification_widget::RefreshPolicy;

/// Console web server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Notification API base URL.
    pub notifications_api_url: String,
    /// Host the console is reached at, used to tell internal links apart.
    pub public_host: String,
    /// Background refresh interval, if polling is enabled.
    pub poll_interval: Option<Duration>,
    /// When clicking the bell refreshes.
    pub refresh_policy: RefreshPolicy,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `CONSOLE_ADDR` | Server bind address | `127.0.0.1:8790` |
    /// | `NOTIFICATIONS_API_URL` | Notification API base URL | `http://127.0.0.1:8000/api` |
    /// | `CONSOLE_HOST` | Public host of the console | `CONSOLE_ADDR` |
    /// | `NOTIFICATIONS_POLL_SECS` | Background refresh interval | (disabled) |
    /// | `NOTIFICATIONS_REFRESH` | `on-open` or `on-close` | `on-open` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr: SocketAddr = lookup("CONSOLE_ADDR")
            .unwrap_or_else(|| "127.0.0.1:8790".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let notifications_api_url = lookup("NOTIFICATIONS_API_URL")
            .unwrap_or_else(|| ClientConfig::default().base_url);

        let public_host = lookup("CONSOLE_HOST").unwrap_or_else(|| addr.to_string());

        let poll_interval = match lookup("NOTIFICATIONS_POLL_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => return Err(ConfigError::InvalidPollInterval(raw)),
            },
            None => None,
        };

        let refresh_policy = match lookup("NOTIFICATIONS_REFRESH") {
            Some(raw) => raw
                .parse::<RefreshPolicy>()
                .map_err(ConfigError::InvalidRefreshPolicy)?,
            None => RefreshPolicy::default(),
        };

        Ok(Self {
            addr,
            notifications_api_url,
            public_host,
            poll_interval,
            refresh_policy,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid CONSOLE_ADDR format")]
    InvalidAddr,

    #[error("NOTIFICATIONS_POLL_SECS must be a positive number of seconds, got {0:?}")]
    InvalidPollInterval(String),

    #[error("Invalid NOTIFICATIONS_REFRESH: {0}")]
    InvalidRefreshPolicy(String),
}
