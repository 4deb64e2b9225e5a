use clap::Parser;

#[derive(Parser)]
#[command(name = "portfolio-terminal")]
#[command(about = "Terminal portfolio - renders a GitHub account's repositories as project cards")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub account to showcase
    #[arg(long, env = "PORTFOLIO_USER", default_value = "leon-rg")]
    pub user: String,

    /// Skip the boot splash and fetch immediately
    #[arg(long)]
    pub skip_splash: bool,

    /// Disable the card entrance animation
    #[arg(long)]
    pub no_animation: bool,
}
