use crate::types::{Profile, RepoSummary};

/// At most this many topic tags surface on a card.
pub const MAX_TOPICS: usize = 3;

pub const DEFAULT_GLYPH: &str = "📦";

// Fixed language -> glyph table. Unknown and absent languages fall back to
// DEFAULT_GLYPH.
const LANGUAGE_GLYPHS: &[(&str, &str)] = &[
    ("JavaScript", "📜"),
    ("TypeScript", "🔷"),
    ("Python", "🐍"),
    ("Java", "☕"),
    ("C++", "⚙️"),
    ("C", "🔧"),
    ("Go", "🐹"),
    ("Rust", "🦀"),
    ("Ruby", "💎"),
    ("PHP", "🐘"),
    ("HTML", "🌐"),
    ("CSS", "🎨"),
    ("Shell", "🐚"),
    ("Dockerfile", "🐳"),
];

pub fn language_glyph(language: Option<&str>) -> &'static str {
    language
        .and_then(|lang| {
            LANGUAGE_GLYPHS
                .iter()
                .find(|(name, _)| *name == lang)
                .map(|(_, glyph)| *glyph)
        })
        .unwrap_or(DEFAULT_GLYPH)
}

/// Summary counters shown above the project list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub repo_count: u32,
    pub total_stars: u64,
}

/// Counters over the non-fork population, so the header numbers describe the
/// projects actually shown. `repo_count` prefers the profile's own figure
/// when the API provided one.
pub fn stats(profile: &Profile, repos: &[RepoSummary]) -> Stats {
    let repo_count = profile
        .public_repos
        .unwrap_or(repos.len() as u32);

    let total_stars = repos
        .iter()
        .filter(|repo| !repo.fork)
        .map(|repo| repo.stargazers_count as u64)
        .sum();

    Stats {
        repo_count,
        total_stars,
    }
}

/// Displayable projects: forks dropped, the rest ordered by stars descending
/// with most-recently-updated first on ties. The sort is stable, so entries
/// equal on both keys keep their API order. The input is left untouched.
pub fn display_repos(repos: &[RepoSummary]) -> Vec<RepoSummary> {
    let mut own: Vec<RepoSummary> = repos.iter().filter(|repo| !repo.fork).cloned().collect();

    own.sort_by(|a, b| {
        b.stargazers_count
            .cmp(&a.stargazers_count)
            .then(b.updated_at.cmp(&a.updated_at))
    });

    own
}
