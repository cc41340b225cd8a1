//! Conquest - Entry Point
//!
//! Sets up logging and configuration, then plays an interactive game on the
//! terminal until one player holds every territory or the players leave.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use conquest::combat::Dice;
use conquest::core::config::GameConfig;
use conquest::core::error::Result;
use conquest::game::GameController;
use conquest::ui::{ConsoleInput, ConsoleView};

/// Two-player territory conquest decided by dice
#[derive(Parser, Debug)]
#[command(name = "conquest")]
#[command(about = "Two players fight over territories one die roll at a time")]
struct Args {
    /// TOML file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of territories on the map
    #[arg(long)]
    territories: Option<usize>,

    /// Random seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many battles
    #[arg(long)]
    max_turns: Option<u32>,

    /// Print the end-of-game summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("conquest=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    tracing::info!(?config, "Conquest starting...");

    let game = GameController::<Dice>::from_config(&config)?;

    let mut view = ConsoleView::stdout();
    let mut input = ConsoleInput::stdin();
    view.write_banner(config.territory_count)?;

    let summary = game.run(&mut view, &mut input)?;

    if args.json {
        view.write_text(&summary.to_json()?)?;
    } else {
        view.write_text(&format!("\n{}", summary.summary()))?;
        view.write_text("Goodbye!")?;
    }
    Ok(())
}

/// Defaults, then the config file, then command-line flags
fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(territories) = args.territories {
        config.territory_count = territories;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.max_turns.is_some() {
        config.max_turns = args.max_turns;
    }

    config.validate()?;
    Ok(config)
}
