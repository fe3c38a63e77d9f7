//! Environment-sourced configuration.
//!
//! The server reads everything from the environment (a `.env` file is loaded
//! by `main` via dotenvy). A missing `GITHUB_TOKEN` is deliberately not a
//! startup failure: the server boots and answers queue requests with a
//! `CONFIG_ERROR` until the credential is provided.

/// The single repository the dashboard aggregates. Overridable with
/// `COMMAND_CENTER_REPO` for local testing against a fork.
pub const DEFAULT_REPO: &str = "acme-studio/command-center";

pub const DEFAULT_PORT: u16 = 4180;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bearer token for GitHub's search API. `None` until configured.
    pub github_token: Option<String>,
    /// `owner/repo` slug scoping every search query.
    pub repo: String,
    pub port: u16,
    /// Permissive CORS + external bind for local UI development.
    pub dev_mode: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            github_token: non_empty_var("GITHUB_TOKEN"),
            repo: non_empty_var("COMMAND_CENTER_REPO").unwrap_or_else(|| DEFAULT_REPO.to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            dev_mode: false,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
