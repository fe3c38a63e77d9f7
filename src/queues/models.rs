use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::QueueError;

/// The fixed set of work queues the dashboard knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Queue {
    NeedsQa,
    NeedsPm,
    DevQueue,
    ReadyToMerge,
    InFlight,
}

impl Queue {
    pub const ALL: [Queue; 5] = [
        Queue::NeedsQa,
        Queue::NeedsPm,
        Queue::DevQueue,
        Queue::ReadyToMerge,
        Queue::InFlight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NeedsQa => "needs-qa",
            Self::NeedsPm => "needs-pm",
            Self::DevQueue => "dev-queue",
            Self::ReadyToMerge => "ready-to-merge",
            Self::InFlight => "in-flight",
        }
    }
}

impl fmt::Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Queue {
    type Err = QueueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "needs-qa" => Ok(Self::NeedsQa),
            "needs-pm" => Ok(Self::NeedsPm),
            "dev-queue" => Ok(Self::DevQueue),
            "ready-to-merge" => Ok(Self::ReadyToMerge),
            "in-flight" => Ok(Self::InFlight),
            other => Err(QueueError::UnknownQueue(other.to_string())),
        }
    }
}

/// A GitHub label. Source order is preserved wherever labels are carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One unprocessed item from GitHub's issue-search response (subset of fields).
#[derive(Debug, Clone, Deserialize)]
pub struct RawItem {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub body: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    pub updated_at: String,
    /// Present only when the item is a pull request.
    pub pull_request: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Issue,
    Pr,
}

/// The normalized representation of one issue/PR shown in a queue.
///
/// Every field the source body/labels do not supply stays `None` and is
/// dropped from the JSON, never a placeholder string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueCard {
    pub number: u64,
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Raw body text; empty string when the source supplied none.
    pub body: String,
    pub labels: Vec<Label>,
    /// Label names prefixed `status:`, in source order.
    pub status_labels: Vec<String>,
    /// Label names prefixed `needs:`, in source order.
    pub needs_labels: Vec<String>,
    /// Value after the first `qa-grade:` label's prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qa_grade: Option<String>,
    pub has_agent_brief: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    pub updated_at: String,

    // Reserved for the QA-orchestrator phase. Typed so the wire shape is
    // stable, but never populated by this core.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qa_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qa_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qa_temperature: Option<f64>,
}

/// Payload of `GET /api/queue`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueResponse {
    pub queue: Queue,
    pub cards: Vec<QueueCard>,
    /// Whether `cards` came from the in-memory cache.
    pub cached: bool,
    /// When the cards were actually fetched from GitHub.
    pub fetched_at: DateTime<Utc>,
}

/// The kind of copyable prompt the dashboard builds from a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptKind {
    Implement,
    Review,
    Qa,
}

impl PromptKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Implement => "implement",
            Self::Review => "review",
            Self::Qa => "qa",
        }
    }
}

impl FromStr for PromptKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "implement" => Ok(Self::Implement),
            "review" => Ok(Self::Review),
            "qa" => Ok(Self::Qa),
            other => Err(format!(
                "Invalid prompt kind '{other}' (valid: implement, review, qa)"
            )),
        }
    }
}

/// Everything the dashboard needs to render one copyable prompt.
/// This core supplies the data; the prompt text itself is built client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptContext {
    pub kind: PromptKind,
    pub repo: String,
    pub card: QueueCard,
}
