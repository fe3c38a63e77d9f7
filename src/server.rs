//! Server assembly and startup.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::api::{self, AppState};
use crate::config::AppConfig;
use crate::queues::cache::ResponseCache;
use crate::queues::search::GitHubSearchClient;
use crate::queues::service::QueueService;

pub fn build_router(state: Arc<AppState>) -> Router {
    api::api_router().with_state(state)
}

pub async fn start_server(config: AppConfig) -> Result<()> {
    if config.github_token.is_none() {
        // Not fatal: queue requests answer CONFIG_ERROR until a token is set.
        info!("GITHUB_TOKEN is not set; queue requests will fail with CONFIG_ERROR");
    }

    let client = GitHubSearchClient::new(config.github_token.clone());
    let service = QueueService::new(Arc::new(client), ResponseCache::new(), config.repo.clone());
    let state = Arc::new(AppState {
        service,
        repo: config.repo.clone(),
    });

    let mut app = build_router(state);
    if config.dev_mode {
        app = app.layer(CorsLayer::permissive());
    }

    let host = if config.dev_mode { "0.0.0.0" } else { "127.0.0.1" };
    let addr = format!("{}:{}", host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    let local_addr = listener.local_addr()?;
    info!(repo = %config.repo, "Command Center running at http://{local_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    info!("Shutting down");
}
