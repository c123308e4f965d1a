//! HTTP routes for aurad.
//!
//! Pages: login, register, logout, and the session-gated chat page.
//! API: the JSON `/ask` endpoint and `/healthz`.

use crate::auth::{self, AuthError};
use crate::server::AppState;
use crate::sessions::SESSION_COOKIE;
use aura_common::rpc::{AskRequest, AskResponse, Credentials, HealthResponse};
use aura_common::VERSION;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use std::sync::Arc;
use tracing::{error, info};

type AppStateArc = Arc<AppState>;

const LOGIN_PAGE: &str = include_str!("assets/login.html");
const REGISTER_PAGE: &str = include_str!("assets/register.html");
const CHAT_PAGE: &str = include_str!("assets/index.html");

// ============================================================================
// Page Routes
// ============================================================================

pub fn page_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/", get(home))
        .route("/login", get(login_page).post(login))
        .route("/register", get(register_page).post(register))
        .route("/logout", get(logout))
}

async fn home(State(state): State<AppStateArc>, headers: HeaderMap) -> Response {
    match current_user(&state, &headers) {
        Some(username) => {
            Html(CHAT_PAGE.replace("{{username}}", &escape_html(&username))).into_response()
        }
        None => Redirect::to("/login").into_response(),
    }
}

async fn login_page() -> Html<String> {
    render_with_error(LOGIN_PAGE, "")
}

async fn login(State(state): State<AppStateArc>, Form(creds): Form<Credentials>) -> Response {
    match auth::login_user(&state.store, &creds.username, &creds.password) {
        Ok(()) => {
            let token = state.sessions.create(&creds.username);
            info!(username = %creds.username, "user logged in");
            (
                [(header::SET_COOKIE, session_cookie(&token))],
                Redirect::to("/"),
            )
                .into_response()
        }
        Err(AuthError::Internal(err)) => {
            error!(%err, "login failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
        }
        Err(err) => render_with_error(LOGIN_PAGE, &err.to_string()).into_response(),
    }
}

async fn register_page() -> Html<String> {
    render_with_error(REGISTER_PAGE, "")
}

async fn register(State(state): State<AppStateArc>, Form(creds): Form<Credentials>) -> Response {
    match auth::register_user(&state.store, &creds.username, &creds.password) {
        Ok(()) => {
            info!(username = %creds.username, "user registered");
            Redirect::to("/login").into_response()
        }
        Err(AuthError::Internal(err)) => {
            error!(%err, "registration failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
        }
        Err(err) => render_with_error(REGISTER_PAGE, &err.to_string()).into_response(),
    }
}

async fn logout(State(state): State<AppStateArc>, headers: HeaderMap) -> Response {
    if let Some(token) = session_token(&headers) {
        state.sessions.remove(&token);
    }
    (
        [(header::SET_COOKIE, expired_session_cookie())],
        Redirect::to("/login"),
    )
        .into_response()
}

// ============================================================================
// API Routes
// ============================================================================

pub fn api_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/ask", post(ask))
        .route("/healthz", get(healthz))
}

async fn ask(
    State(state): State<AppStateArc>,
    headers: HeaderMap,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, String)> {
    let username = current_user(&state, &headers)
        .ok_or((StatusCode::UNAUTHORIZED, "login required".to_string()))?;

    let answer = state.answer_router.route(&req.question, Some(&username)).await;
    Ok(Json(AskResponse { answer }))
}

async fn healthz(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: VERSION.to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

// ============================================================================
// Session & template helpers
// ============================================================================

/// Pull the session token out of the Cookie header.
fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;
    cookie_header.split(';').find_map(|cookie| {
        cookie
            .trim()
            .strip_prefix(SESSION_COOKIE)?
            .strip_prefix('=')
            .map(|token| token.to_string())
    })
}

/// Resolve the request's session to a username, if any.
fn current_user(state: &AppState, headers: &HeaderMap) -> Option<String> {
    let token = session_token(headers)?;
    state.sessions.username_for(&token)
}

fn session_cookie(token: &str) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, token)
}

fn expired_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE)
}

fn render_with_error(template: &str, error: &str) -> Html<String> {
    Html(template.replace("{{error}}", &escape_html(error)))
}

/// Minimal HTML entity escaping for values substituted into pages.
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_parsing() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            "other=1; aura_session=abc-123; theme=dark".parse().unwrap(),
        );
        assert_eq!(session_token(&headers).as_deref(), Some("abc-123"));

        let empty = HeaderMap::new();
        assert_eq!(session_token(&empty), None);
    }

    #[test]
    fn test_session_token_requires_exact_name() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, "not_aura_session=abc".parse().unwrap());
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
