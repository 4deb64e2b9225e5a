use crate::transform::{self, Stats, MAX_TOPICS};
use crate::types::{FetchOutcome, RepoSummary};
use std::time::Duration;
use url::Url;

/// Per-card entrance stagger: card `i` appears `i *` this much after the first.
pub const STAGGER_INCREMENT: Duration = Duration::from_millis(100);

pub const NO_DESCRIPTION: &str = "No description available";

/// Full-surface notices that take the place of the card list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The fetch failed; shown in place of the loading indicator.
    Error,
    /// Nothing survived the fork filter.
    Empty,
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Notice::Error => "Error loading repositories. Please try again later.",
            Notice::Empty => "No repositories found.",
        }
    }
}

/// One display-ready project card. Badge fields are `None` when the badge is
/// omitted entirely (zero stars/forks, absent language).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub language: Option<String>,
    pub stars: Option<u32>,
    pub forks: Option<u32>,
    pub topics: Vec<String>,
    pub updated: String,
    pub repo_url: String,
    pub homepage: Option<String>,
    pub entrance_delay: Duration,
}

/// Build the card for the repository at position `index` of the display list.
pub fn project_card(repo: &RepoSummary, index: usize) -> ProjectCard {
    let glyph = transform::language_glyph(repo.language.as_deref());

    let homepage = repo
        .homepage()
        .filter(|h| Url::parse(h).is_ok())
        .map(str::to_string);

    ProjectCard {
        title: format!("{} {}", glyph, repo.name),
        description: repo
            .description
            .clone()
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        language: repo.language.clone(),
        stars: (repo.stargazers_count > 0).then_some(repo.stargazers_count),
        forks: (repo.forks_count > 0).then_some(repo.forks_count),
        topics: repo.topics.iter().take(MAX_TOPICS).cloned().collect(),
        updated: repo.updated_at.format("%-d %b %Y").to_string(),
        repo_url: repo.html_url.clone(),
        homepage,
        entrance_delay: STAGGER_INCREMENT * index as u32,
    }
}

/// Named stat slots of the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    RepoCount,
    StarCount,
}

/// Surface the pipeline draws on. The pipeline only ever sets slot text,
/// appends cards and shows notices; everything else about presentation
/// belongs to the implementation. A surface without a given slot treats
/// `set_slot` as a silent no-op.
pub trait RenderSurface {
    fn set_slot(&mut self, slot: Slot, value: &str);
    fn clear_loading(&mut self);
    fn append_card(&mut self, card: &ProjectCard);
    fn show_notice(&mut self, notice: Notice);
}

/// Apply a fetch outcome to a surface. On failure exactly one error notice
/// replaces the loading indicator and nothing else is touched. On success
/// the counters are written, the loading indicator cleared, and one card
/// appended per displayable repository, or a single empty-state notice when
/// none survive the fork filter.
pub fn render(outcome: &FetchOutcome, surface: &mut dyn RenderSurface) {
    let (profile, repos) = match outcome {
        FetchOutcome::Success { profile, repos } => (profile, repos),
        FetchOutcome::Failure => {
            surface.show_notice(Notice::Error);
            return;
        }
    };

    let Stats {
        repo_count,
        total_stars,
    } = transform::stats(profile, repos);
    surface.set_slot(Slot::RepoCount, &repo_count.to_string());
    surface.set_slot(Slot::StarCount, &total_stars.to_string());

    surface.clear_loading();

    let display = transform::display_repos(repos);
    if display.is_empty() {
        surface.show_notice(Notice::Empty);
        return;
    }

    for (index, repo) in display.iter().enumerate() {
        let card = project_card(repo, index);
        surface.append_card(&card);
    }
}
