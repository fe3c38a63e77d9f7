//! HTTP surface: route handlers, shared state, and error-code mapping.
//!
//! Success responses carry `Cache-Control: no-store`; freshness is managed
//! by the in-process cache, and downstream caches must not hold stale
//! queue snapshots.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tracing::warn;

use crate::errors::QueueError;
use crate::queues::models::{PromptContext, PromptKind, Queue};
use crate::queues::service::QueueService;

// ── Shared application state ──────────────────────────────────────────

pub struct AppState {
    pub service: QueueService,
    /// `owner/repo` slug, echoed into prompt contexts.
    pub repo: String,
}

pub type SharedState = Arc<AppState>;

// ── Error handling ────────────────────────────────────────────────────

pub enum ApiError {
    MissingParameter(String),
    InvalidParameter(String),
    NotFound(String),
    ConfigError(String),
    GitHubError(String),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            Self::MissingParameter(_) => "MISSING_PARAMETER",
            Self::InvalidParameter(_) => "INVALID_PARAMETER",
            Self::NotFound(_) => "NOT_FOUND",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::GitHubError(_) => "GITHUB_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.code();
        let (status, message) = match self {
            Self::MissingParameter(param) => (
                StatusCode::BAD_REQUEST,
                format!("Missing required query parameter '{param}'"),
            ),
            Self::InvalidParameter(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::ConfigError(msg) => (StatusCode::UNAUTHORIZED, msg),
            Self::GitHubError(msg) => (StatusCode::BAD_GATEWAY, msg),
        };
        (
            status,
            Json(serde_json::json!({"error": {"code": code, "message": message}})),
        )
            .into_response()
    }
}

impl From<QueueError> for ApiError {
    fn from(err: QueueError) -> Self {
        match &err {
            QueueError::Config(_) => Self::ConfigError(err.to_string()),
            QueueError::UnknownQueue(_) => Self::InvalidParameter(err.to_string()),
            QueueError::RateLimited { .. }
            | QueueError::Provider { .. }
            | QueueError::Http(_) => Self::GitHubError(err.to_string()),
        }
    }
}

// ── Router ────────────────────────────────────────────────────────────

pub fn api_router() -> Router<SharedState> {
    Router::new()
        .route("/api/queue", get(get_queue))
        .route("/api/prompt-context", get(get_prompt_context))
        .route("/health", get(health_check))
}

// ── Handlers ──────────────────────────────────────────────────────────

async fn health_check() -> &'static str {
    "ok"
}

#[derive(Deserialize)]
struct QueueQuery {
    name: Option<String>,
}

async fn get_queue(
    State(state): State<SharedState>,
    Query(params): Query<QueueQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let name = params
        .name
        .ok_or_else(|| ApiError::MissingParameter("name".to_string()))?;
    let queue: Queue = name.parse().map_err(ApiError::from)?;

    let response = state.service.fetch_queue(queue).await.map_err(|err| {
        warn!(queue = %queue, error = %err, "queue fetch failed");
        ApiError::from(err)
    })?;

    Ok((
        [(header::CACHE_CONTROL, "no-store")],
        Json(response),
    ))
}

#[derive(Deserialize)]
struct PromptQuery {
    name: Option<String>,
    number: Option<String>,
    kind: Option<String>,
}

/// Data for one copyable prompt: the card plus repo context. The dashboard
/// formats the prompt text; this endpoint only supplies the pieces.
async fn get_prompt_context(
    State(state): State<SharedState>,
    Query(params): Query<PromptQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let name = params
        .name
        .ok_or_else(|| ApiError::MissingParameter("name".to_string()))?;
    let number = params
        .number
        .ok_or_else(|| ApiError::MissingParameter("number".to_string()))?;
    let kind = params
        .kind
        .ok_or_else(|| ApiError::MissingParameter("kind".to_string()))?;

    let queue: Queue = name.parse().map_err(ApiError::from)?;
    let number: u64 = number
        .parse()
        .map_err(|_| ApiError::InvalidParameter(format!("Invalid item number '{number}'")))?;
    let kind: PromptKind = kind.parse().map_err(ApiError::InvalidParameter)?;

    let response = state.service.fetch_queue(queue).await.map_err(|err| {
        warn!(queue = %queue, error = %err, "queue fetch failed");
        ApiError::from(err)
    })?;
    let card = response
        .cards
        .into_iter()
        .find(|card| card.number == number)
        .ok_or_else(|| {
            ApiError::NotFound(format!("No item #{number} in queue '{queue}'"))
        })?;

    Ok((
        [(header::CACHE_CONTROL, "no-store")],
        Json(PromptContext {
            kind,
            repo: state.repo.clone(),
            card,
        }),
    ))
}

// ── Tests ─────────────────────────────────────────────────────────────
