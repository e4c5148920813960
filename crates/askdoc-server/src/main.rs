//! askdoc — retrieval-augmented question answering over uploaded documents.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod envelope;
mod routes;
mod state;
#[cfg(test)]
mod testutil;

use askdoc_chat::DashScopeChat;
use askdoc_core::AskdocConfig;
use askdoc_embed::DashScopeEmbedder;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AskdocConfig::from_env()?;
    if config.api_key.is_none() {
        warn!("DASHSCOPE_API_KEY is not set; uploads and queries will fail downstream");
    }

    let api_key = config.api_key.clone().unwrap_or_default();
    let embedder = Arc::new(DashScopeEmbedder::new(
        &config.api_base,
        &api_key,
        &config.embedding_model,
    ));
    let chat = Arc::new(DashScopeChat::new(
        &config.api_base,
        &api_key,
        &config.chat_model,
        config.temperature,
    ));

    let port = config.port;
    let state = Arc::new(AppState::new(config, embedder, chat));

    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("askdoc server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
