//! HTTP server for aurad

use crate::answer_router::AnswerRouter;
use crate::routes;
use crate::sessions::SessionManager;
use crate::store::AuraStore;
use crate::weather::WeatherClient;
use anyhow::{Context, Result};
use aura_common::AuraConfig;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub store: Arc<AuraStore>,
    pub sessions: SessionManager,
    pub answer_router: AnswerRouter,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: &AuraConfig) -> Result<Self> {
        let store = Arc::new(AuraStore::open(&config.database.path)?);
        store.seed_defaults()?;

        let weather = WeatherClient::new(config.weather.city.clone())?;

        Ok(Self {
            store: store.clone(),
            sessions: SessionManager::new(config.session.ttl_hours),
            answer_router: AnswerRouter::new(store, weather),
            start_time: Instant::now(),
        })
    }
}

/// Assemble the router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::page_routes())
        .merge(routes::api_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server
pub async fn run(state: AppState, bind_addr: &str) -> Result<()> {
    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    info!("  Listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
