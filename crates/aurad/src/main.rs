//! Aura Daemon - chat assistant web server
//!
//! Serves the login-gated chat UI and answers questions through the
//! canned/evaluator/QA-bank pipeline.

use anyhow::Result;
use aura_common::AuraConfig;
use aurad::server;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Aura Daemon v{} starting", env!("CARGO_PKG_VERSION"));

    let config = AuraConfig::load()?;
    let bind_addr = config.server.bind_addr.clone();

    let state = server::AppState::new(&config)?;
    info!("QA bank ready with {} rows", state.store.qa_count()?);

    server::run(state, &bind_addr).await
}
