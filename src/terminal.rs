use crate::render::{Notice, ProjectCard, RenderSurface, Slot, STAGGER_INCREMENT};
use colored::*;

/// Renders onto stdout with `colored` markup. The entrance stagger is real
/// wall-clock here (a short sleep before each card) unless animation is off.
pub struct TerminalSurface {
    animate: bool,
}

impl TerminalSurface {
    pub fn new(animate: bool) -> Self {
        TerminalSurface { animate }
    }
}

impl RenderSurface for TerminalSurface {
    fn set_slot(&mut self, slot: Slot, value: &str) {
        match slot {
            Slot::RepoCount => println!("{} {}", "Public repos:".bold(), value.green()),
            Slot::StarCount => println!("{} {}", "Total stars:".bold(), value.yellow()),
        }
    }

    fn clear_loading(&mut self) {
        println!("{}\n", "=".repeat(50).dimmed());
    }

    fn append_card(&mut self, card: &ProjectCard) {
        if self.animate && !card.entrance_delay.is_zero() {
            std::thread::sleep(STAGGER_INCREMENT);
        }

        println!("{}", card.title.bold().green());
        println!("  {}", card.description);

        let mut badges: Vec<String> = Vec::new();
        if let Some(language) = &card.language {
            badges.push(language.cyan().to_string());
        }
        if let Some(stars) = card.stars {
            badges.push(format!("⭐ {}", stars));
        }
        if let Some(forks) = card.forks {
            badges.push(format!("🔱 {}", forks));
        }
        if !badges.is_empty() {
            println!("  {}", badges.join("  "));
        }

        if !card.topics.is_empty() {
            let tags: Vec<String> = card
                .topics
                .iter()
                .map(|topic| format!("#{}", topic).yellow().to_string())
                .collect();
            println!("  {}", tags.join(" "));
        }

        println!("  {} {}", "Updated:".dimmed(), card.updated.dimmed());
        match &card.homepage {
            Some(homepage) => println!("  → {} | → {}", card.repo_url.blue(), homepage.blue()),
            None => println!("  → {}", card.repo_url.blue()),
        }
        println!();
    }

    fn show_notice(&mut self, notice: Notice) {
        match notice {
            Notice::Error => println!("{}", format!("❌ {}", notice.text()).red()),
            Notice::Empty => println!("{}", notice.text().dimmed()),
        }
    }
}
