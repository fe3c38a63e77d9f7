//! Pattern rules that extract structured signals from issue/PR bodies and
//! labels. All rules are deterministic; for body patterns the first match
//! wins.
//!
//! - label prefixes: `status:`, `needs:`, `qa-grade:` (case-sensitive)
//! - preview URL: `Preview:`/`Deploy URL:` followed by an http(s) link
//! - agent brief: a markdown `Agent Brief` heading with a non-placeholder
//!   section body underneath

use regex::Regex;
use std::sync::LazyLock;

use super::models::Label;

pub const STATUS_PREFIX: &str = "status:";
pub const NEEDS_PREFIX: &str = "needs:";
pub const QA_GRADE_PREFIX: &str = "qa-grade:";

/// Sections shorter than this after trimming are treated as placeholders.
const MIN_BRIEF_LEN: usize = 10;

// "preview" or "deploy", optional "url", a colon, then an http(s) URL that
// runs until whitespace or a closing paren (tolerates markdown links).
static PREVIEW_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:preview|deploy)(?:\s+url)?\s*:\s*(https?://[^\s)]+)").unwrap()
});

static AGENT_BRIEF_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#{1,6}\s*agent\s+brief\s*$").unwrap());

static HEADING_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,6}\s").unwrap());

/// All label names carrying the given prefix, in source order.
pub fn labels_with_prefix(labels: &[Label], prefix: &str) -> Vec<String> {
    labels
        .iter()
        .filter(|label| label.name.starts_with(prefix))
        .map(|label| label.name.clone())
        .collect()
}

/// The value after `qa-grade:` on the first such label, if any.
pub fn qa_grade(labels: &[Label]) -> Option<String> {
    labels
        .iter()
        .find_map(|label| label.name.strip_prefix(QA_GRADE_PREFIX))
        .map(str::to_string)
}

/// First preview/deploy URL embedded in the body, if any.
pub fn preview_url(body: &str) -> Option<String> {
    PREVIEW_URL_REGEX
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|url| url.as_str().to_string())
}

/// Whether the body carries a usable agent-brief section. Only presence is
/// surfaced on the card; the extracted text exists to apply the length gate.
pub fn has_agent_brief(body: &str) -> bool {
    extract_agent_brief(body).is_some()
}

fn extract_agent_brief(body: &str) -> Option<String> {
    let mut in_section = false;
    let mut section: Vec<&str> = Vec::new();

    for line in body.lines() {
        if in_section {
            if HEADING_LINE.is_match(line) {
                break;
            }
            section.push(line);
        } else if AGENT_BRIEF_HEADING.is_match(line.trim_end()) {
            in_section = true;
        }
    }

    if !in_section {
        return None;
    }
    let text = section.join("\n").trim().to_string();
    (text.len() >= MIN_BRIEF_LEN).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(name: &str) -> Label {
        Label {
            name: name.to_string(),
            color: "ededed".to_string(),
            description: None,
        }
    }

    // ── Label prefixes ───────────────────────────────────────────────

    #[test]
    fn prefix_filters_preserve_source_order() {
        let labels = vec![
            label("status:ready"),
            label("bug"),
            label("needs:dev"),
            label("status:verified"),
        ];
        assert_eq!(
            labels_with_prefix(&labels, STATUS_PREFIX),
            vec!["status:ready", "status:verified"]
        );
        assert_eq!(labels_with_prefix(&labels, NEEDS_PREFIX), vec!["needs:dev"]);
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        let labels = vec![label("Status:ready"), label("NEEDS:dev")];
        assert!(labels_with_prefix(&labels, STATUS_PREFIX).is_empty());
        assert!(labels_with_prefix(&labels, NEEDS_PREFIX).is_empty());
    }

    #[test]
    fn qa_grade_strips_prefix_and_takes_first() {
        let labels = vec![label("qa-grade:A"), label("qa-grade:B")];
        assert_eq!(qa_grade(&labels), Some("A".to_string()));
        assert_eq!(qa_grade(&[label("bug")]), None);
    }

    // ── Preview URL ──────────────────────────────────────────────────

    #[test]
    fn preview_url_extracts_first_match() {
        let body = "Preview: https://example.com/x\nmore text";
        assert_eq!(preview_url(body), Some("https://example.com/x".to_string()));
    }

    #[test]
    fn preview_url_accepts_deploy_url_variant() {
        let body = "deploy url:https://stage.example.dev/app-42";
        assert_eq!(
            preview_url(body),
            Some("https://stage.example.dev/app-42".to_string())
        );
    }

    #[test]
    fn preview_url_stops_at_closing_paren() {
        let body = "(preview: https://example.com/x) trailing";
        assert_eq!(preview_url(body), Some("https://example.com/x".to_string()));
    }

    #[test]
    fn preview_url_absent_without_pattern() {
        assert_eq!(preview_url("just a link https://example.com"), None);
        assert_eq!(preview_url(""), None);
    }

    #[test]
    fn preview_url_first_match_wins() {
        let body = "Preview: https://one.example.com\nDeploy: https://two.example.com";
        assert_eq!(preview_url(body), Some("https://one.example.com".to_string()));
    }

    // ── Agent brief ──────────────────────────────────────────────────

    #[test]
    fn agent_brief_detected_up_to_next_heading() {
        let body = "## Agent Brief\nThis is a sufficiently long brief description.\n## Other";
        assert!(has_agent_brief(body));
    }

    #[test]
    fn agent_brief_detected_at_end_of_body() {
        let body = "intro\n### agent brief\nRefactor the cache eviction path.";
        assert!(has_agent_brief(body));
    }

    #[test]
    fn agent_brief_rejects_placeholder_sections() {
        assert!(!has_agent_brief("## Agent Brief\nshort"));
        assert!(!has_agent_brief("## Agent Brief\n\n## Other"));
    }

    #[test]
    fn agent_brief_absent_without_heading() {
        assert!(!has_agent_brief("Agent Brief: inline mention, not a heading"));
        assert!(!has_agent_brief(""));
    }

    #[test]
    fn agent_brief_section_excludes_following_heading_text() {
        // The next section is long; only the brief's own text counts.
        let body = "## Agent Brief\nshort\n## Context\nplenty of text over ten chars";
        assert!(!has_agent_brief(body));
    }
}
