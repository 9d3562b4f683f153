//! MENACE CLI - train and inspect magic-square matchbox tables
//!
//! Set `RUST_LOG=debug` to trace individual reinforcement updates.

use anyhow::Result;
use clap::{Parser, Subcommand};
use magic_menace::cli::commands::{inspect, replay, stats, train};

#[derive(Parser)]
#[command(name = "menace")]
#[command(version, about = "MENACE matchbox learning over the magic square", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train player 1 by self-play
    Train(Box<train::TrainArgs>),

    /// Show the learned matchbox for a board history
    Inspect(inspect::InspectArgs),

    /// Show per-depth state-space statistics
    Stats(stats::StatsArgs),

    /// Reinforce one recorded game
    Replay(replay::ReplayArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => train::execute(*args),
        Commands::Inspect(args) => inspect::execute(args),
        Commands::Stats(args) => stats::execute(args),
        Commands::Replay(args) => replay::execute(args),
    }
}
