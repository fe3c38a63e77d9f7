//! Short-TTL in-memory cache for queue payloads.
//!
//! An explicit instance shared via the app state, not a module-level global,
//! so tests can construct isolated caches. Entries expire after the TTL and
//! are evicted lazily on the first read past expiry; there is no background
//! sweep. Process restart loses everything, which is the accepted tradeoff.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use super::models::{Queue, QueueCard};

pub const CACHE_TTL: Duration = Duration::from_secs(60);

struct CacheEntry {
    cards: Vec<QueueCard>,
    /// Monotonic capture time, used for the TTL check.
    captured_at: Instant,
    /// Wall-clock capture time, surfaced as `fetchedAt`.
    fetched_at: DateTime<Utc>,
}

pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::with_ttl(CACHE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Namespaced key for one queue, so queues never collide.
    pub fn queue_key(queue: Queue) -> String {
        format!("queue:{queue}")
    }

    /// Returns the cached cards and their fetch time while the entry is
    /// fresh. An expired entry is removed as a side effect.
    pub fn get(&self, key: &str) -> Option<(Vec<QueueCard>, DateTime<Utc>)> {
        let mut entries = lock_entries(&self.entries);
        match entries.get(key) {
            Some(entry) if entry.captured_at.elapsed() < self.ttl => {
                Some((entry.cards.clone(), entry.fetched_at))
            }
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Unconditionally stores `cards` under `key` with the current
    /// timestamp, replacing any previous entry. Returns the stored fetch
    /// time.
    pub fn put(&self, key: &str, cards: Vec<QueueCard>) -> DateTime<Utc> {
        let fetched_at = Utc::now();
        let entry = CacheEntry {
            cards,
            captured_at: Instant::now(),
            fetched_at,
        };
        lock_entries(&self.entries).insert(key.to_string(), entry);
        fetched_at
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_entries(
    entries: &Mutex<HashMap<String, CacheEntry>>,
) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry>> {
    // A poisoned lock still holds a consistent map; entries are only ever
    // replaced whole.
    match entries.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
