//! Test doubles shared by the service and API tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::models::{Label, RawItem};
use super::search::SearchClient;
use crate::errors::QueueError;

/// A `SearchClient` that serves canned items (or a canned error) and
/// records every query it receives.
pub struct MockSearchClient {
    items: Vec<RawItem>,
    error: Option<Box<dyn Fn() -> QueueError + Send + Sync>>,
    queries: Mutex<Vec<String>>,
}

impl MockSearchClient {
    pub fn with_items(items: Vec<RawItem>) -> Self {
        Self {
            items,
            error: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(make_error: impl Fn() -> QueueError + Send + Sync + 'static) -> Self {
        Self {
            items: Vec::new(),
            error: Some(Box::new(make_error)),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Number of outbound searches issued so far.
    pub fn calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchClient for MockSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<RawItem>, QueueError> {
        self.queries.lock().unwrap().push(query.to_string());
        match &self.error {
            Some(make_error) => Err(make_error()),
            None => Ok(self.items.clone()),
        }
    }
}

/// A realistic raw item: labeled, with a preview link and an agent brief.
pub fn sample_item(number: u64) -> RawItem {
    RawItem {
        number,
        title: format!("Sample item {number}"),
        html_url: format!("https://github.com/acme-studio/command-center/issues/{number}"),
        body: Some(format!(
            "Preview: https://preview.example.dev/{number}\n\n## Agent Brief\nImplement the change behind a flag and add coverage."
        )),
        labels: vec![
            Label {
                name: "status:ready".to_string(),
                color: "0e8a16".to_string(),
                description: None,
            },
            Label {
                name: "needs:dev".to_string(),
                color: "fbca04".to_string(),
                description: Some("Waiting on a developer".to_string()),
            },
        ],
        updated_at: "2026-02-10T09:00:00Z".to_string(),
        pull_request: None,
    }
}
