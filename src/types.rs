use chrono::{DateTime, Utc};
use serde::Deserialize;

// GitHub API response structures
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub public_repos: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    pub updated_at: DateTime<Utc>,
    pub html_url: String,
    pub homepage: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub fork: bool,
}

impl RepoSummary {
    /// Homepage link, with the API's empty-string placeholder treated as absent.
    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref().filter(|h| !h.is_empty())
    }
}

/// Outcome of the one-shot profile + repository fetch. A `Success` always
/// carries a defined (possibly empty) repository list; `Failure` carries no
/// detail beyond the fact of failure; the cause only goes to the log.
#[derive(Debug)]
pub enum FetchOutcome {
    Success {
        profile: Profile,
        repos: Vec<RepoSummary>,
    },
    Failure,
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success { .. })
    }
}
