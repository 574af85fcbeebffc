//! GitHub star badge.
//!
//! The count is fetched once per mount in a background task. Any failure
//! hides the badge; nothing is ever surfaced to the user.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio::task::JoinHandle;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum StarCountError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Source of repository star counts
#[async_trait]
pub trait RepoStats: Send + Sync {
    async fn stargazers(&self, repo: &RepoRef) -> Result<u64, StarCountError>;
}

#[derive(Debug, Deserialize)]
struct RepoResponse {
    stargazers_count: u64,
}

#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    api_base: String,
}

impl GitHubClient {
    pub fn new(api_base: impl Into<String>) -> Result<Self, StarCountError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self::with_client(client, api_base))
    }

    pub fn with_client(client: Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RepoStats for GitHubClient {
    async fn stargazers(&self, repo: &RepoRef) -> Result<u64, StarCountError> {
        let url = format!("{}/repos/{}/{}", self.api_base, repo.owner, repo.repo);
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, GITHUB_ACCEPT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StarCountError::Status(status.as_u16()));
        }

        let body: RepoResponse = response.json().await?;
        Ok(body.stargazers_count)
    }
}

/// `1500` → `1.5k`; counts under a thousand are shown as-is
pub fn format_stars(count: u64) -> String {
    if count >= 1000 {
        format!("{:.1}k", count as f64 / 1000.0)
    } else {
        count.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StarBadge {
    #[default]
    Loading,
    Ready(u64),
    Hidden,
}

impl StarBadge {
    pub fn from_result(result: Result<u64, StarCountError>) -> Self {
        match result {
            Ok(count) => StarBadge::Ready(count),
            Err(_) => StarBadge::Hidden,
        }
    }

    /// Text to display, `None` while loading or after a failure
    pub fn label(&self) -> Option<String> {
        match self {
            StarBadge::Ready(count) => Some(format_stars(*count)),
            StarBadge::Loading | StarBadge::Hidden => None,
        }
    }
}

/// In-flight star fetch; dropping it aborts the request
pub struct StarFetch {
    task: JoinHandle<()>,
}

impl StarFetch {
    pub fn spawn<S, F>(source: S, repo: RepoRef, on_done: F) -> Self
    where
        S: RepoStats + 'static,
        F: FnOnce(StarBadge) + Send + 'static,
    {
        let task = tokio::spawn(async move {
            let result = source.stargazers(&repo).await;
            if let Err(e) = &result {
                tracing::debug!(repo = %repo, error = %e, "Hiding star badge");
            }
            on_done(StarBadge::from_result(result));
        });
        Self { task }
    }
}

impl Drop for StarFetch {
    fn drop(&mut self) {
        self.task.abort();
    }
}
