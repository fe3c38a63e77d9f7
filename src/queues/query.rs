//! Queue -> GitHub search query.
//!
//! GitHub's legacy search syntax treats `+` as the term separator and `:`
//! as the qualifier separator, so neither may be percent-encoded. Only the
//! quotes wrapping label values are encoded (`%22`); the query string is
//! spliced into the request URL as-is.

use super::models::Queue;

/// Build the issue-search query for one queue, scoped to open items in the
/// given repository.
pub fn build_search_query(repo: &str, queue: Queue) -> String {
    let labels: &[&str] = match queue {
        Queue::NeedsQa => &["needs:qa"],
        Queue::NeedsPm => &["needs:pm"],
        Queue::DevQueue => &["status:ready", "needs:dev"],
        Queue::ReadyToMerge => &["status:verified"],
        Queue::InFlight => &["status:in-progress"],
    };

    let mut query = format!("repo:{repo}+is:open");
    for label in labels {
        query.push_str("+label:%22");
        query.push_str(label);
        query.push_str("%22");
    }
    query
}
