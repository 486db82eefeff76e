//! Route tests for the web console, driven through the router in-process.
//!
//! Run with:
//!   cargo test -p console-web --test routes_tests

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use console_web::AppState;
use notification_widget::testing::MemoryApi;
use notification_widget::{Alert, Location, Message, RefreshPolicy};
use tower::ServiceExt;

fn setup(api: &MemoryApi) -> (Router, AppState) {
    let state = AppState::new(
        Arc::new(api.clone()),
        Location::new("console.example.com"),
        RefreshPolicy::OnOpen,
    );
    (console_web::app(state.clone()), state)
}

async fn call(router: &Router, method: &str, uri: &str, htmx: bool) -> (StatusCode, HeaderMap, String) {
    let headers: &[(&str, &str)] = if htmx { &[("HX-Request", "true")] } else { &[] };
    call_with(router, method, uri, headers).await
}

async fn call_with(
    router: &Router,
    method: &str,
    uri: &str,
    headers: &[(&str, &str)],
) -> (StatusCode, HeaderMap, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let resp = router
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

// ============================================================================
// Pages
// ============================================================================

#[tokio::test]
async fn test_health() {
    let (router, _) = setup(&MemoryApi::default());
    let (status, _, body) = call(&router, "GET", "/health", false).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"status":"ok"}"#);
}

#[tokio::test]
async fn test_data_constructor_page() {
    let (router, _) = setup(&MemoryApi::default());
    let (status, _, body) = call(&router, "GET", "/system/data-constructor", false).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h2 class=\"intro-y\">Data Constructor</h2>"));
    assert!(body.contains("In development..."));
}

#[tokio::test]
async fn test_index_loads_widget() {
    let (router, _) = setup(&MemoryApi::default());
    let (status, _, body) = call(&router, "GET", "/", false).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"hx-get="/notifications""#));
}

// ============================================================================
// Widget
// ============================================================================

#[tokio::test]
async fn test_mount_renders_bullet_for_unread() {
    let api = MemoryApi::new(vec![], vec![Message::new(1, "Report ready")]);
    let (router, _) = setup(&api);

    let (status, _, body) = call(&router, "GET", "/notifications", true).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("notification--bullet"));
    assert_eq!(api.calls(), vec!["GET users/notifications/"]);
}

#[tokio::test]
async fn test_mount_without_unread_has_no_bullet() {
    let api = MemoryApi::new(vec![], vec![Message::new(1, "Report ready").read()]);
    let (router, _) = setup(&api);

    let (_, _, body) = call(&router, "GET", "/notifications", true).await;
    assert!(!body.contains("notification--bullet"));
}

#[tokio::test]
async fn test_open_panel_shows_alerts_and_messages() {
    let api = MemoryApi::new(
        vec![Alert::new("Maintenance <tonight>")],
        vec![Message::new(1, "Report ready").with_link("https://console.example.com/reports/1")],
    );
    let (router, _) = setup(&api);

    let (status, _, body) = call(&router, "POST", "/notifications/bell", true).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Maintenance &lt;tonight&gt;"));
    assert!(body.contains("Report ready"));
    assert!(body.contains("/notifications/1/read"));
    assert!(body.contains("https%3A%2F%2Fconsole.example.com%2Freports%2F1"));
    assert!(!body.contains("No notifications"));
}

#[tokio::test]
async fn test_blank_links_render_as_plain_text() {
    let api = MemoryApi::new(
        vec![Alert::new("Maintenance tonight").with_link("")],
        vec![Message::new(1, "Report ready").with_link("  ")],
    );
    let (router, _) = setup(&api);

    let (status, _, body) = call(&router, "POST", "/notifications/bell", true).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Maintenance tonight"));
    assert!(body.contains("Report ready"));
    assert!(!body.contains("/notifications/open"));
    assert!(!body.contains("cursor-pointer"));
}

#[tokio::test]
async fn test_empty_panel_shows_placeholder() {
    let (router, _) = setup(&MemoryApi::default());

    let (_, _, body) = call(&router, "POST", "/notifications/bell", true).await;
    assert!(body.contains("No notifications"));
}

#[tokio::test]
async fn test_closed_panel_hides_body() {
    let api = MemoryApi::new(vec![], vec![Message::new(1, "Report ready")]);
    let (router, _) = setup(&api);

    call(&router, "POST", "/notifications/bell", true).await;
    let (_, _, body) = call(&router, "POST", "/notifications/bell", true).await;

    assert!(!body.contains("Report ready"));
    assert!(body.contains("notification--bullet"));
}

#[tokio::test]
async fn test_read_all_route() {
    let api = MemoryApi::new(vec![], vec![Message::new(1, "a"), Message::new(2, "b")]);
    let (router, state) = setup(&api);
    call(&router, "GET", "/notifications", true).await;

    let (status, _, body) = call(&router, "POST", "/notifications/read-all", true).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("notification--bullet"));
    let dropdown = state.notifications.lock().await;
    assert!(dropdown.messages().iter().all(|m| m.is_read));
}

#[tokio::test]
async fn test_read_and_delete_routes() {
    let api = MemoryApi::new(vec![], vec![Message::new(1, "a"), Message::new(2, "b")]);
    let (router, state) = setup(&api);
    call(&router, "GET", "/notifications", true).await;

    call(&router, "POST", "/notifications/1/read", true).await;
    call(&router, "POST", "/notifications/2/delete", true).await;

    let dropdown = state.notifications.lock().await;
    assert_eq!(dropdown.messages(), &[Message::new(1, "a").read()]);
}

#[tokio::test]
async fn test_backend_failure_is_rendered() {
    let api = MemoryApi::new(vec![], vec![Message::new(1, "a")]);
    let (router, state) = setup(&api);
    call(&router, "POST", "/notifications/bell", true).await;
    api.fail_with(500);

    let (status, _, body) = call(&router, "POST", "/notifications/read-all", true).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Could not mark all as read"));
    assert!(body.contains("role=\"alert\""));
    let dropdown = state.notifications.lock().await;
    assert_eq!(dropdown.messages(), &[Message::new(1, "a")]);
}

// ============================================================================
// Link clicks
// ============================================================================

#[tokio::test]
async fn test_internal_link_htmx_location() {
    let (router, state) = setup(&MemoryApi::default());
    call(&router, "POST", "/notifications/bell", true).await;

    let uri = "/notifications/open?link=https%3A%2F%2Fconsole.example.com%2Freports%2F1%3Ftab%3Da";
    let (status, headers, _) = call(&router, "GET", uri, true).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["hx-location"], "/reports/1?tab=a");
    assert!(headers.get("hx-trigger").is_none());
    assert!(!state.notifications.lock().await.is_open());
}

#[tokio::test]
async fn test_internal_link_plain_redirect() {
    let (router, _) = setup(&MemoryApi::default());

    let uri = "/notifications/open?link=https%3A%2F%2Fconsole.example.com%2Freports%2F1";
    let (status, headers, _) = call(&router, "GET", uri, false).await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(headers["location"], "/reports/1");
}

#[tokio::test]
async fn test_external_link_triggers_new_context() {
    let (router, state) = setup(&MemoryApi::default());
    call(&router, "POST", "/notifications/bell", true).await;

    let uri = "/notifications/open?link=https%3A%2F%2Fdocs.example.org%2Fguide";
    let (status, headers, _) = call(&router, "GET", uri, true).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers.get("hx-location").is_none());
    assert_eq!(headers["hx-reswap"], "none");
    let trigger: serde_json::Value =
        serde_json::from_str(headers["hx-trigger"].to_str().unwrap()).unwrap();
    assert_eq!(trigger["open-external"]["url"], "https://docs.example.org/guide");
    assert!(state.notifications.lock().await.is_open());
}

#[tokio::test]
async fn test_invalid_link_is_bad_request() {
    let (router, _) = setup(&MemoryApi::default());

    let (status, _, body) = call(&router, "GET", "/notifications/open?link=nope", true).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Invalid notification link"));
}

#[tokio::test]
async fn test_blank_link_does_nothing() {
    let (router, state) = setup(&MemoryApi::default());
    call(&router, "POST", "/notifications/bell", true).await;

    for uri in ["/notifications/open?link=", "/notifications/open?link=%20%20"] {
        let (status, headers, body) = call(&router, "GET", uri, true).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(headers["hx-reswap"], "none");
        assert!(headers.get("hx-location").is_none());
        assert!(headers.get("hx-trigger").is_none());
        assert!(body.is_empty());
    }
    assert!(state.notifications.lock().await.is_open());
}

#[tokio::test]
async fn test_external_link_with_newline_redirects_to_cleaned_url() {
    let (router, _) = setup(&MemoryApi::default());

    let uri = "/notifications/open?link=https%3A%2F%2Fdocs.example.org%2Fa%0Ab";
    let (status, headers, _) = call(&router, "GET", uri, false).await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(headers["location"], "https://docs.example.org/ab");
}

#[tokio::test]
async fn test_internal_link_with_newline_is_cleaned() {
    let (router, _) = setup(&MemoryApi::default());

    let uri = "/notifications/open?link=https%3A%2F%2Fconsole.example.com%2Frep%0Aorts%2F1";
    let (status, headers, _) = call(&router, "GET", uri, false).await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(headers["location"], "/reports/1");
}

#[tokio::test]
async fn test_request_host_decides_internal_links() {
    let (router, state) = setup(&MemoryApi::default());
    call(&router, "POST", "/notifications/bell", true).await;

    let uri = "/notifications/open?link=http%3A%2F%2Fconsole.example.com%3A8790%2Freports%2F1";
    let (status, headers, _) = call_with(
        &router,
        "GET",
        uri,
        &[("HX-Request", "true"), ("Host", "console.example.com:8790")],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["hx-location"], "/reports/1");
    assert!(headers.get("hx-trigger").is_none());
    assert!(!state.notifications.lock().await.is_open());
}

#[tokio::test]
async fn test_request_host_makes_configured_host_external() {
    let (router, _) = setup(&MemoryApi::default());

    let uri = "/notifications/open?link=https%3A%2F%2Fconsole.example.com%2Freports%2F1";
    let (status, headers, _) =
        call_with(&router, "GET", uri, &[("Host", "localhost:8790")]).await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(headers["location"], "https://console.example.com/reports/1");
}
