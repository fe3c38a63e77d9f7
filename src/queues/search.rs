//! GitHub issue-search client.
//!
//! One GET per uncached queue fetch, fixed page size, newest-updated first.
//! Rate-limit responses (403/429) are distinguished from other failures so
//! the caller can surface the reset time; error bodies are logged, never
//! returned.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::Deserialize;
use tracing::{debug, warn};

use super::models::RawItem;
use crate::errors::QueueError;

const GITHUB_SEARCH_URL: &str = "https://api.github.com/search/issues";
const PAGE_SIZE: u32 = 50;
const USER_AGENT: &str = "command-center";

#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Run one pre-encoded search query and return the raw items.
    async fn search(&self, query: &str) -> Result<Vec<RawItem>, QueueError>;
}

pub struct GitHubSearchClient {
    token: Option<String>,
    client: reqwest::Client,
}

impl GitHubSearchClient {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<RawItem>,
}

#[async_trait]
impl SearchClient for GitHubSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<RawItem>, QueueError> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| QueueError::Config("GITHUB_TOKEN is not set".to_string()))?;

        // The query arrives pre-encoded from the query builder; splice it
        // directly so reqwest does not re-encode the literal `+` separators.
        let url = format!(
            "{GITHUB_SEARCH_URL}?q={query}&per_page={PAGE_SIZE}&sort=updated&order=desc"
        );

        let resp = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {token}"))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
            let reset = parse_reset_header(resp.headers());
            let body = resp.text().await.unwrap_or_default();
            warn!(%status, body = %body, "GitHub search rate-limited");
            return Err(QueueError::RateLimited { reset });
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(%status, body = %body, "GitHub search returned error status");
            return Err(QueueError::Provider {
                status: status.as_u16(),
            });
        }

        let search: SearchResponse = resp.json().await?;
        debug!(items = search.items.len(), "GitHub search succeeded");
        Ok(search.items)
    }
}

/// `X-RateLimit-Reset` carries the reset instant as epoch seconds.
fn parse_reset_header(headers: &HeaderMap) -> Option<DateTime<Utc>> {
    let epoch = headers
        .get("x-ratelimit-reset")?
        .to_str()
        .ok()?
        .trim()
        .parse::<i64>()
        .ok()?;
    Utc.timestamp_opt(epoch, 0).single()
}
