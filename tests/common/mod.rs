use chrono::{DateTime, Utc};
use portfolio_terminal::types::{Profile, RepoSummary};

pub fn timestamp(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid RFC 3339 timestamp")
}

pub fn profile(public_repos: Option<u32>) -> Profile {
    Profile { public_repos }
}

/// Baseline non-fork repository; tests tweak fields as needed.
pub fn repo(name: &str, stars: u32, updated_at: &str) -> RepoSummary {
    RepoSummary {
        name: name.to_string(),
        description: Some(format!("{} description", name)),
        language: None,
        stargazers_count: stars,
        forks_count: 0,
        updated_at: timestamp(updated_at),
        html_url: format!("https://github.com/leon-rg/{}", name),
        homepage: None,
        topics: Vec::new(),
        fork: false,
    }
}

pub fn fork(name: &str, stars: u32, updated_at: &str) -> RepoSummary {
    RepoSummary {
        fork: true,
        ..repo(name, stars, updated_at)
    }
}

pub fn repos_from_json(json: &str) -> anyhow::Result<Vec<RepoSummary>> {
    Ok(serde_json::from_str(json)?)
}
