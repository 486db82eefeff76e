//! Notification bell and dropdown routes.
//!
//! Every action answers with the re-rendered widget so HTMX can swap it in
//! place. Backend failures are shown inside the panel.

use askama::Template;
use axum::extract::{Path, Query, State};
use axum::http::header::{self, HeaderName};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use notification_widget::{
    followable_link, Alert, ClickOutcome, Location, Message, Navigator, NotificationId,
    WidgetError,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{ConsoleError, Result};
use crate::state::{AppState, Dropdown};

/// Bell with its dropdown panel.
#[derive(Template)]
#[template(path = "notifications.html")]
pub struct WidgetTemplate {
    pub open: bool,
    pub bullet: bool,
    pub empty: bool,
    pub alerts: Vec<Alert>,
    pub messages: Vec<Message>,
    pub error: Option<String>,
}

impl WidgetTemplate {
    fn render(dropdown: &Dropdown, error: Option<String>) -> Self {
        Self {
            open: dropdown.is_open(),
            bullet: dropdown.has_unread(),
            empty: dropdown.is_empty(),
            alerts: dropdown
                .alerts()
                .iter()
                .map(|alert| Alert {
                    link: clickable(&alert.link),
                    ..alert.clone()
                })
                .collect(),
            messages: dropdown
                .messages()
                .iter()
                .map(|message| Message {
                    link: clickable(&message.link),
                    ..message.clone()
                })
                .collect(),
            error,
        }
    }
}

/// Blank links render as plain text.
fn clickable(link: &Option<String>) -> Option<String> {
    followable_link(link.as_deref()).map(str::to_string)
}

/// Log a failed action and turn it into the panel's error line.
fn report<T>(action: &str, result: std::result::Result<T, WidgetError>) -> Option<String> {
    result.err().map(|err| {
        warn!(action, error = %err, "Notification action failed");
        format!("Could not {}: {}", action, err)
    })
}

/// Load notifications and render the widget.
pub async fn mount(State(state): State<AppState>) -> WidgetTemplate {
    let mut dropdown = state.notifications.lock().await;
    let error = report("load notifications", dropdown.fetch_data().await);
    WidgetTemplate::render(&dropdown, error)
}

/// Toggle the panel.
pub async fn click_bell(State(state): State<AppState>) -> WidgetTemplate {
    let mut dropdown = state.notifications.lock().await;
    let error = report("refresh notifications", dropdown.handle_click_bell().await);
    WidgetTemplate::render(&dropdown, error)
}

/// Mark every message as read.
pub async fn read_all(State(state): State<AppState>) -> WidgetTemplate {
    let mut dropdown = state.notifications.lock().await;
    let error = report("mark all as read", dropdown.read_all().await);
    WidgetTemplate::render(&dropdown, error)
}

/// Mark one message as read.
pub async fn read_one(
    State(state): State<AppState>,
    Path(id): Path<NotificationId>,
) -> WidgetTemplate {
    let mut dropdown = state.notifications.lock().await;
    let error = report("mark as read", dropdown.read_notification(id).await);
    WidgetTemplate::render(&dropdown, error)
}

/// Delete one message.
pub async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<NotificationId>,
) -> WidgetTemplate {
    let mut dropdown = state.notifications.lock().await;
    let error = report("delete notification", dropdown.delete_notification(id).await);
    WidgetTemplate::render(&dropdown, error)
}

/// Query of the link-following endpoint.
#[derive(Deserialize)]
pub struct OpenParams {
    pub link: String,
}

/// Follow the link of a clicked alert or message.
///
/// Links are classified against the `Host` the browser used, falling back to
/// the configured console host.
pub async fn open_link(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<OpenParams>,
) -> Result<Response> {
    let mut navigator = ResponseNavigator::new(is_htmx(&headers));
    let request_location = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|host| !host.is_empty())
        .map(Location::new);

    let mut dropdown = state.notifications.lock().await;
    let outcome = match &request_location {
        Some(location) => {
            dropdown.on_message_click_at(Some(&params.link), location, &mut navigator)?
        }
        None => dropdown.on_message_click(Some(&params.link), &mut navigator)?,
    };
    drop(dropdown);
    info!(?outcome, "Notification link followed");

    match (outcome, navigator.response) {
        (ClickOutcome::Ignored, _) => {
            Ok((StatusCode::NO_CONTENT, [(HX_RESWAP, HeaderValue::from_static("none"))])
                .into_response())
        }
        (_, Some(response)) => response,
        (_, None) => Err(ConsoleError::Internal(
            "link produced no navigation".to_string(),
        )),
    }
}

const HX_LOCATION: HeaderName = HeaderName::from_static("hx-location");
const HX_RESWAP: HeaderName = HeaderName::from_static("hx-reswap");
const HX_TRIGGER: HeaderName = HeaderName::from_static("hx-trigger");

fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("hx-request")
        .is_some_and(|value| value.as_bytes() == b"true")
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::try_from(value)
        .map_err(|_| ConsoleError::Internal(format!("not a valid header value: {:?}", value)))
}

fn see_other(location: &str) -> Result<Response> {
    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, header_value(location)?)]).into_response())
}

/// Turns navigation requests into an HTTP response for the browser.
struct ResponseNavigator {
    htmx: bool,
    response: Option<Result<Response>>,
}

impl ResponseNavigator {
    fn new(htmx: bool) -> Self {
        Self {
            htmx,
            response: None,
        }
    }
}

impl Navigator for ResponseNavigator {
    fn push(&mut self, path: &str) {
        let response = if self.htmx {
            header_value(path)
                .map(|location| (StatusCode::OK, [(HX_LOCATION, location)]).into_response())
        } else {
            see_other(path)
        };
        self.response = Some(response);
    }

    fn open_external(&mut self, url: &str) {
        let response = if self.htmx {
            let trigger = serde_json::json!({ "open-external": { "url": url } }).to_string();
            header_value(&trigger).map(|trigger| {
                (
                    StatusCode::OK,
                    [
                        (HX_RESWAP, HeaderValue::from_static("none")),
                        (HX_TRIGGER, trigger),
                    ],
                )
                    .into_response()
            })
        } else {
            see_other(url)
        };
        self.response = Some(response);
    }
}
