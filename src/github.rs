use crate::error::{PortfolioError, Result};
use crate::types::{FetchOutcome, Profile, RepoSummary};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

const API_BASE_URL: &str = "https://api.github.com";
const PER_PAGE: u32 = 100;

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Client against a non-default API root. Tests point this at an
    /// unreachable address to exercise the failure path.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        // GitHub rejects requests without a User-Agent.
        let client = Client::builder()
            .user_agent("portfolio-terminal/0.1.0")
            .build()?;

        Ok(GitHubClient {
            client,
            base_url: base_url.into(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        match response.status() {
            reqwest::StatusCode::OK => Ok(response.json().await?),
            reqwest::StatusCode::NOT_FOUND => {
                Err(PortfolioError::NotFound(format!("Resource not found: {}", url)))
            }
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(PortfolioError::ApiError(
                    format!("API request failed with status {}: {}", status, error_text)
                ))
            }
        }
    }

    pub async fn fetch_profile(&self, username: &str) -> Result<Profile> {
        let url = format!("{}/users/{}", self.base_url, username);
        self.get_json(&url).await
    }

    pub async fn fetch_repos(&self, username: &str) -> Result<Vec<RepoSummary>> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.base_url, username, PER_PAGE
        );
        self.get_json(&url).await
    }

    /// Issue the profile and repository-list requests in parallel and wait
    /// for both. Fire-once: no retry, no timeout beyond transport defaults.
    /// Any failure on either request collapses the whole fetch to `Failure`;
    /// the cause is logged, never surfaced to the caller.
    pub async fn fetch_portfolio(&self, username: &str) -> FetchOutcome {
        match futures::try_join!(self.fetch_profile(username), self.fetch_repos(username)) {
            Ok((profile, repos)) => {
                debug!(count = repos.len(), "fetched repositories for {}", username);
                FetchOutcome::Success { profile, repos }
            }
            Err(e) => {
                error!("Error fetching GitHub data: {}", e);
                FetchOutcome::Failure
            }
        }
    }
}
