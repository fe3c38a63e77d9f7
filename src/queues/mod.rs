//! Work-queue aggregation core.
//!
//! ## Overview
//!
//! A queue is a named bucket of GitHub issues/PRs selected by label criteria
//! (e.g. `needs-qa`). One request names a queue; the service checks the
//! in-memory cache, and on a miss builds a search query, calls GitHub's
//! issue-search endpoint, and normalizes every raw item into a `QueueCard`
//! before caching and returning the list.
//!
//! ## Module Map
//!
//! ```text
//! ┌──────────┐   HTTP   ┌────────────────────────────────────────────────┐
//! │Dashboard │ ───────> │  api.rs  (route handlers, AppState)            │
//! │   UI     │ <─────── │       │                                        │
//! └──────────┘          │       │ QueueService::fetch_queue()            │
//!                       │       v                                        │
//!                       │  service.rs   (cache check, orchestration)     │
//!                       │    │        │                                  │
//!                       │    │ miss   │ hit                              │
//!                       │    v        v                                  │
//!                       │  query.rs  cache.rs  (60 s TTL, lazy eviction) │
//!                       │    │                                           │
//!                       │    v                                           │
//!                       │  search.rs  (GitHub issue-search, reqwest)     │
//!                       │    │                                           │
//!                       │    v                                           │
//!                       │  normalize.rs ── derive.rs  (pattern rules)    │
//!                       └────────────────────────────────────────────────┘
//! ```
//!
//! | Module      | Responsibility                                          |
//! |-------------|---------------------------------------------------------|
//! | `models`    | `Queue`, `Label`, `RawItem`, `QueueCard`, responses     |
//! | `query`     | queue -> GitHub search query string                     |
//! | `search`    | `SearchClient` trait + reqwest implementation           |
//! | `derive`    | label-prefix filters, preview-URL and agent-brief rules |
//! | `normalize` | raw item -> card                                        |
//! | `cache`     | per-queue TTL cache shared across requests              |
//! | `service`   | ties the above together                                 |

pub mod cache;
pub mod derive;
pub mod models;
pub mod normalize;
pub mod query;
pub mod search;
pub mod service;

#[cfg(test)]
pub mod testing;
