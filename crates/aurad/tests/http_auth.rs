//! HTTP-level tests: session auth gating the chat page and /ask.

use aura_common::AuraConfig;
use aurad::server::{self, AppState};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AuraConfig::default();
    config.database.path = dir.path().join("aura.db");

    let state = AppState::new(&config).unwrap();
    (server::router(Arc::new(state)), dir)
}

fn form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn ask(question: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/ask")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder
        .body(Body::from(format!("{{\"question\": {:?}}}", question)))
        .unwrap()
}

/// Extract "aura_session=<token>" from a Set-Cookie header.
fn session_cookie(response: &axum::response::Response) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie present")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_chat_page_redirects_without_session() {
    let (app, _dir) = test_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn test_ask_requires_session() {
    let (app, _dir) = test_app();

    let response = app.oneshot(ask("hello", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_login_ask_flow() {
    let (app, _dir) = test_app();

    // Register redirects to the login page
    let response = app
        .clone()
        .oneshot(form("/register", "username=sam&password=hunter2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");

    // Login sets the session cookie and redirects home
    let response = app
        .clone()
        .oneshot(form("/login", "username=sam&password=hunter2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    let cookie = session_cookie(&response);

    // The chat page greets the user by name
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, cookie.clone())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("sam"));

    // /ask now answers
    let response = app
        .clone()
        .oneshot(ask("what is seven plus three", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("✅ Answer: 10"));
}

#[tokio::test]
async fn test_bad_password_shows_error_not_session() {
    let (app, _dir) = test_app();

    app.clone()
        .oneshot(form("/register", "username=sam&password=hunter2"))
        .await
        .unwrap();

    let response = app
        .oneshot(form("/login", "username=sam&password=wrong"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert!(body_string(response)
        .await
        .contains("Invalid username or password!"));
}

#[tokio::test]
async fn test_duplicate_registration_shows_error() {
    let (app, _dir) = test_app();

    app.clone()
        .oneshot(form("/register", "username=sam&password=hunter2"))
        .await
        .unwrap();

    let response = app
        .oneshot(form("/register", "username=sam&password=other"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Username already exists!"));
}

#[tokio::test]
async fn test_logout_invalidates_session() {
    let (app, _dir) = test_app();

    app.clone()
        .oneshot(form("/register", "username=sam&password=hunter2"))
        .await
        .unwrap();
    let response = app
        .clone()
        .oneshot(form("/login", "username=sam&password=hunter2"))
        .await
        .unwrap();
    let cookie = session_cookie(&response);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/logout")
                .header(header::COOKIE, cookie.clone())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    // The old cookie no longer works
    let response = app.oneshot(ask("hello", Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_healthz() {
    let (app, _dir) = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("\"status\":\"ok\""));
    assert!(body.contains(aura_common::VERSION));
}
