mod config;
mod errors;
mod llm_client;
mod models;
mod rewrite;
mod routes;
mod search;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::search::client::AdzunaClient;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing search credentials)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobscout API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize job search client
    let search = AdzunaClient::new(
        config.adzuna_base_url.clone(),
        config.adzuna_app_id.clone(),
        config.adzuna_app_key.clone(),
    );
    info!(
        "Search client initialized ({}, default country: {})",
        config.adzuna_base_url, config.default_country
    );

    // Initialize LLM client (optional)
    let llm = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(llm)
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; resume rewriting disabled");
            None
        }
    };

    // Build app state
    let state = AppState {
        config: config.clone(),
        search: Arc::new(search),
        llm,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
