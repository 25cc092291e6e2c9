mod assistant;
mod config;
mod cv;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assistant::service::{CvAssistant, API_KEY_VAR};
use crate::config::Config;
use crate::cv::store::load_cv;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Assistant API v{}", env!("CARGO_PKG_VERSION"));

    let cv = load_cv(&config.cv_data_path)?;

    if config
        .groq_api_key
        .as_deref()
        .map_or(true, |key| key.trim().is_empty())
    {
        warn!("{API_KEY_VAR} is not set; /api/v1/ask will fail until it is configured");
    }

    let llm = LlmClient::new()?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        cv: Arc::new(cv),
        assistant: CvAssistant::new(config.groq_api_key.clone(), Arc::new(llm)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
