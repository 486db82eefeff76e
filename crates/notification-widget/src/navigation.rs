//! Routing of clicked notification links.

use url::Url;

use crate::error::WidgetError;

/// The page the dropdown is rendered on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    host: String,
}

impl Location {
    /// Create a location from a `host[:port]` string.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into().to_ascii_lowercase(),
        }
    }

    /// Derive the location from the current page URL.
    pub fn from_url(page_url: &str) -> Result<Self, WidgetError> {
        let url = parse_link(page_url)?;
        Ok(Self {
            host: host_with_port(&url).unwrap_or_default(),
        })
    }

    /// Host of the page, including a non-default port.
    pub fn host(&self) -> &str {
        &self.host
    }
}

/// Where a notification link leads relative to the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Same host: navigate client-side to this path and query.
    Internal { path: String },
    /// Other host: open the link, as parsed and serialized, in a new browser context.
    External { url: String },
}

impl LinkTarget {
    /// Classify an absolute link against the current page location.
    pub fn classify(link: &str, location: &Location) -> Result<Self, WidgetError> {
        let url = parse_link(link)?;

        match host_with_port(&url) {
            Some(host) if host == location.host => {
                let path = match url.query() {
                    Some(query) if !query.is_empty() => format!("{}?{}", url.path(), query),
                    _ => url.path().to_string(),
                };
                Ok(LinkTarget::Internal { path })
            }
            _ => Ok(LinkTarget::External {
                url: url.to_string(),
            }),
        }
    }

    /// Whether the link stays on the current host.
    pub fn is_internal(&self) -> bool {
        matches!(self, LinkTarget::Internal { .. })
    }
}

/// Side effects of following a notification link.
pub trait Navigator {
    /// Navigate client-side to a path on the current host.
    fn push(&mut self, path: &str);

    /// Open a URL in a new browser context.
    fn open_external(&mut self, url: &str);
}

/// What a click on a notification did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The notification has no link.
    Ignored,
    /// Client-side navigation happened and the dropdown closed.
    Navigated { path: String },
    /// The link was opened in a new browser context.
    OpenedExternal { url: String },
}

/// The link worth following, if any. Blank links count as no link.
pub fn followable_link(link: Option<&str>) -> Option<&str> {
    link.map(str::trim).filter(|link| !link.is_empty())
}

fn parse_link(link: &str) -> Result<Url, WidgetError> {
    Url::parse(link).map_err(|e| WidgetError::InvalidLink {
        link: link.to_string(),
        reason: e.to_string(),
    })
}

/// `host[:port]`, leaving out the scheme's default port.
fn host_with_port(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
