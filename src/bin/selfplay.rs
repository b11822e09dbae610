use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::ai::Difficulty;
use connect_four::config::AppConfig;
use connect_four::game::Player;
use connect_four::selfplay::run_match;

/// Play Connect Four computer-vs-computer matches between difficulty tiers.
#[derive(Parser)]
#[command(name = "selfplay", about = "Pit two Connect Four difficulty tiers against each other")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override Player 1's difficulty: easy, medium or hard
    #[arg(long)]
    player_one: Option<Difficulty>,

    /// Override Player 2's difficulty: easy, medium or hard
    #[arg(long)]
    player_two: Option<Difficulty>,

    /// Override the search depth used by medium and hard
    #[arg(long)]
    depth: Option<usize>,

    /// Base seed for reproducible matches
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        app_config.selfplay.games = games;
    }
    if let Some(difficulty) = cli.player_one {
        app_config.selfplay.player_one = difficulty;
    }
    if let Some(difficulty) = cli.player_two {
        app_config.selfplay.player_two = difficulty;
    }
    if let Some(depth) = cli.depth {
        app_config.engine.search_depth = depth;
    }
    if cli.seed.is_some() {
        app_config.selfplay.seed = cli.seed;
    }
    if let Err(e) = app_config.validate() {
        bail!("invalid settings after overrides: {e}");
    }

    let settings = &app_config.selfplay;
    println!(
        "{} ({}) vs {} ({}), {} games, search depth {}",
        Player::PlayerOne.name(),
        settings.player_one,
        Player::PlayerTwo.name(),
        settings.player_two,
        settings.games,
        app_config.engine.search_depth,
    );
    println!("-------------------------------------------");

    let summary = run_match(&app_config);

    println!("-------------------------------------------");
    println!(
        "{} wins: {} ({:.1}%)",
        Player::PlayerOne.name(),
        summary.player_one_wins,
        summary.win_rate(Player::PlayerOne) * 100.0
    );
    println!(
        "{} wins: {} ({:.1}%)",
        Player::PlayerTwo.name(),
        summary.player_two_wins,
        summary.win_rate(Player::PlayerTwo) * 100.0
    );
    println!("Draws: {}", summary.draws);

    Ok(())
}
