//! Queue fetch orchestration: cache -> query -> search -> normalize.

use std::sync::Arc;

use tracing::{debug, info};

use super::cache::ResponseCache;
use super::models::{Queue, QueueCard, QueueResponse};
use super::normalize::normalize_item;
use super::query::build_search_query;
use super::search::SearchClient;
use crate::errors::QueueError;

pub struct QueueService {
    client: Arc<dyn SearchClient>,
    cache: ResponseCache,
    repo: String,
}

impl QueueService {
    pub fn new(client: Arc<dyn SearchClient>, cache: ResponseCache, repo: impl Into<String>) -> Self {
        Self {
            client,
            cache,
            repo: repo.into(),
        }
    }

    /// Fetch one queue, serving from the cache while its entry is fresh.
    ///
    /// Cards keep the source response order. A search failure propagates
    /// whole; there are no partial results. Concurrent misses for the same
    /// queue may each reach GitHub (no coalescing); the last write wins.
    pub async fn fetch_queue(&self, queue: Queue) -> Result<QueueResponse, QueueError> {
        let key = ResponseCache::queue_key(queue);

        if let Some((cards, fetched_at)) = self.cache.get(&key) {
            debug!(queue = %queue, cards = cards.len(), "queue cache hit");
            return Ok(QueueResponse {
                queue,
                cards,
                cached: true,
                fetched_at,
            });
        }

        let query = build_search_query(&self.repo, queue);
        debug!(queue = %queue, %query, "queue cache miss, querying GitHub");

        let items = self.client.search(&query).await?;
        let cards: Vec<QueueCard> = items.iter().map(normalize_item).collect();
        let fetched_at = self.cache.put(&key, cards.clone());
        info!(queue = %queue, cards = cards.len(), "fetched queue from GitHub");

        Ok(QueueResponse {
            queue,
            cards,
            cached: false,
            fetched_at,
        })
    }
}
