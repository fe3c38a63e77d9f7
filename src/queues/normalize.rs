//! Raw search item -> queue card.
//!
//! Pure and deterministic: no network, no cache, no clock. Malformed input
//! degrades field-by-field (a null body becomes an empty string) instead of
//! failing the item.

use super::derive;
use super::models::{ItemType, QueueCard, RawItem};

pub fn normalize_item(item: &RawItem) -> QueueCard {
    let body = item.body.clone().unwrap_or_default();

    QueueCard {
        number: item.number,
        title: item.title.clone(),
        url: item.html_url.clone(),
        item_type: if item.pull_request.is_some() {
            ItemType::Pr
        } else {
            ItemType::Issue
        },
        labels: item.labels.clone(),
        status_labels: derive::labels_with_prefix(&item.labels, derive::STATUS_PREFIX),
        needs_labels: derive::labels_with_prefix(&item.labels, derive::NEEDS_PREFIX),
        qa_grade: derive::qa_grade(&item.labels),
        has_agent_brief: derive::has_agent_brief(&body),
        preview_url: derive::preview_url(&body),
        updated_at: item.updated_at.clone(),
        body,
        // Populated by the QA orchestrator in a later phase, never here.
        verdict: None,
        provenance: None,
        qa_provider: None,
        qa_model: None,
        qa_temperature: None,
    }
}
