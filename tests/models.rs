mod common;

use portfolio_terminal::types::{FetchOutcome, Profile, RepoSummary};

#[test]
fn test_full_repo_deserialization() {
    let json = r#"{
        "name": "portfolio-terminal",
        "description": "Terminal portfolio",
        "language": "Rust",
        "stargazers_count": 42,
        "forks_count": 3,
        "updated_at": "2025-03-12T08:30:00Z",
        "html_url": "https://github.com/leon-rg/portfolio-terminal",
        "homepage": "https://leon-rg.dev",
        "topics": ["cli", "portfolio"],
        "fork": false
    }"#;

    let repo: RepoSummary = serde_json::from_str(json).unwrap();

    assert_eq!(repo.name, "portfolio-terminal");
    assert_eq!(repo.description.as_deref(), Some("Terminal portfolio"));
    assert_eq!(repo.language.as_deref(), Some("Rust"));
    assert_eq!(repo.stargazers_count, 42);
    assert_eq!(repo.forks_count, 3);
    assert_eq!(repo.updated_at, common::timestamp("2025-03-12T08:30:00Z"));
    assert_eq!(repo.homepage(), Some("https://leon-rg.dev"));
    assert_eq!(repo.topics, vec!["cli", "portfolio"]);
    assert!(!repo.fork);
}

#[test]
fn test_minimal_repo_uses_defaults() {
    // The repository-list payload may omit optional fields entirely.
    let json = r#"{
        "name": "bare",
        "html_url": "https://github.com/leon-rg/bare",
        "updated_at": "2024-01-01T00:00:00Z"
    }"#;

    let repo: RepoSummary = serde_json::from_str(json).unwrap();

    assert!(repo.description.is_none());
    assert!(repo.language.is_none());
    assert_eq!(repo.stargazers_count, 0);
    assert_eq!(repo.forks_count, 0);
    assert!(repo.homepage.is_none());
    assert!(repo.topics.is_empty());
    assert!(!repo.fork);
}

#[test]
fn test_null_optionals_tolerated() {
    let json = r#"{
        "name": "nulls",
        "description": null,
        "language": null,
        "homepage": null,
        "html_url": "https://github.com/leon-rg/nulls",
        "updated_at": "2024-01-01T00:00:00Z"
    }"#;

    let repo: RepoSummary = serde_json::from_str(json).unwrap();

    assert!(repo.description.is_none());
    assert!(repo.language.is_none());
    assert!(repo.homepage().is_none());
}

#[test]
fn test_empty_homepage_counts_as_absent() {
    let mut repo = common::repo("site", 1, "2024-06-01T00:00:00Z");

    repo.homepage = Some(String::new());
    assert!(repo.homepage().is_none());

    repo.homepage = Some("https://example.com".to_string());
    assert_eq!(repo.homepage(), Some("https://example.com"));
}

#[test]
fn test_profile_deserialization() {
    let profile: Profile = serde_json::from_str(r#"{"public_repos": 27}"#).unwrap();
    assert_eq!(profile.public_repos, Some(27));

    // A profile payload without the counter still parses.
    let profile: Profile = serde_json::from_str(r#"{}"#).unwrap();
    assert!(profile.public_repos.is_none());
}

#[test]
fn test_repo_list_deserialization() {
    let json = r#"[
        {"name": "a", "html_url": "https://github.com/leon-rg/a", "updated_at": "2024-01-01T00:00:00Z", "fork": true},
        {"name": "b", "html_url": "https://github.com/leon-rg/b", "updated_at": "2024-02-01T00:00:00Z", "stargazers_count": 7}
    ]"#;

    let repos = common::repos_from_json(json).expect("list parses");

    assert_eq!(repos.len(), 2);
    assert!(repos[0].fork);
    assert_eq!(repos[1].stargazers_count, 7);
}

#[test]
fn test_outcome_success_always_has_repo_list() {
    let outcome = FetchOutcome::Success {
        profile: common::profile(None),
        repos: Vec::new(),
    };

    assert!(outcome.is_success());
    match outcome {
        FetchOutcome::Success { repos, .. } => assert!(repos.is_empty()),
        FetchOutcome::Failure => panic!("expected success"),
    }
}
