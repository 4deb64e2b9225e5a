use clap::Parser;
use colored::*;
use portfolio_terminal::cli::Cli;
use portfolio_terminal::error::Result;
use portfolio_terminal::github::GitHubClient;
use portfolio_terminal::render;
use portfolio_terminal::splash::{self, FireOnce};
use portfolio_terminal::terminal::TerminalSurface;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn"))
        )
        .init();

    let cli = Cli::parse();

    println!("{}", "Portfolio Terminal".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    // Timer expiry and user skip are alternate paths to the same single
    // pipeline run; the latch keeps it at-most-once.
    let trigger = FireOnce::new();

    if !cli.skip_splash {
        splash::boot_splash().await;
    }

    if trigger.try_fire() {
        run_pipeline(&cli).await?;
    }

    Ok(())
}

async fn run_pipeline(cli: &Cli) -> Result<()> {
    println!("🔍 Loading repositories for {}...\n", cli.user.cyan());

    let client = GitHubClient::new()?;
    let outcome = client.fetch_portfolio(&cli.user).await;

    // A failed fetch is rendered as the error notice, not propagated.
    let mut surface = TerminalSurface::new(!cli.no_animation);
    render::render(&outcome, &mut surface);

    Ok(())
}
