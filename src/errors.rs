//! Typed error hierarchy for the queue aggregation core.
//!
//! `QueueError` covers everything that can go wrong between a queue name
//! arriving and cards leaving: configuration, queue validation, and the
//! GitHub search call. HTTP status mapping lives in `api::ApiError`.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors from the queue fetch path.
#[derive(Debug, Error)]
pub enum QueueError {
    #[error("GitHub credential is not configured: {0}")]
    Config(String),

    #[error(
        "Unknown queue '{0}' (valid queues: needs-qa, needs-pm, dev-queue, ready-to-merge, in-flight)"
    )]
    UnknownQueue(String),

    #[error("GitHub rate limit exceeded{}", reset_suffix(.reset))]
    RateLimited { reset: Option<DateTime<Utc>> },

    #[error("GitHub search API returned status {status}")]
    Provider { status: u16 },

    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),
}

fn reset_suffix(reset: &Option<DateTime<Utc>>) -> String {
    match reset {
        Some(at) => format!(", resets at {}", at.to_rfc3339()),
        None => String::new(),
    }
}
