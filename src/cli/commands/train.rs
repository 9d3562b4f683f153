//! Train command - self-play MENACE against a baseline opponent

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;

use super::{load_or_new, save};
use crate::{
    cli::output::{
        ProgressObserver, create_training_progress, format_number, format_percent, print_kv,
        print_section,
    },
    config::TrainingConfig,
    policy::OpponentKind,
    training::{TrainingResults, TrainingSession},
};

#[derive(Debug, Serialize)]
struct TrainingSummaryFile<'a> {
    config: &'a TrainingConfig,
    results: &'a TrainingResults,
    learned_states: usize,
    total_beads: u64,
}

#[derive(Parser, Debug)]
#[command(about = "Train player 1's matchboxes by self-play", allow_negative_numbers = true)]
pub struct TrainArgs {
    /// JSON config file; flags below override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Number of training games
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Opponent to train against (random, defensive)
    #[arg(long, short = 'o')]
    pub opponent: Option<OpponentKind>,

    /// Random seed for reproducibility
    #[arg(long, short = 's')]
    pub seed: Option<u64>,

    /// Beads added for a win
    #[arg(long)]
    pub win: Option<i16>,

    /// Beads added for a draw
    #[arg(long)]
    pub draw: Option<i16>,

    /// Bead change for a loss (negative removes)
    #[arg(long)]
    pub loss: Option<i16>,

    /// Continue training a saved table
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Where to save the trained table
    #[arg(long, short = 'O')]
    pub output: Option<PathBuf>,

    /// Write a JSON summary of the run
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

fn resolve_config(args: &TrainArgs) -> Result<TrainingConfig> {
    let mut config = match &args.config {
        Some(path) => TrainingConfig::from_json_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => TrainingConfig::default(),
    };
    if let Some(games) = args.games {
        config.games = games;
    }
    if let Some(opponent) = args.opponent {
        config.opponent = opponent;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(win) = args.win {
        config.reinforcement.win = win;
    }
    if let Some(draw) = args.draw {
        config.reinforcement.draw = draw;
    }
    if let Some(loss) = args.loss {
        config.reinforcement.loss = loss;
    }
    if args.no_progress {
        config.progress = false;
    }
    config.validate()?;
    Ok(config)
}

fn write_summary(path: &Path, session: &TrainingSession) -> Result<()> {
    let space = session.space();
    let summary = TrainingSummaryFile {
        config: session.config(),
        results: session.results(),
        learned_states: space.learned().count(),
        total_beads: space.total_beads(),
    };
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    to_writer_pretty(file, &summary)?;
    Ok(())
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let space = load_or_new(args.input.as_deref())?;
    let mut session = TrainingSession::with_space(config.clone(), space)?;

    if config.progress {
        let bar = create_training_progress(config.games as u64)?;
        session.train_with(&mut ProgressObserver::new(bar))?;
    } else {
        session.train()?;
    }

    let results = session.results();
    print_section("Training complete");
    print_kv("Opponent", &config.opponent.to_string());
    print_kv("Games", &format_number(results.games));
    print_kv(
        "Wins",
        &format!("{} ({})", results.wins, format_percent(results.win_rate())),
    );
    print_kv(
        "Draws",
        &format!("{} ({})", results.draws, format_percent(results.draw_rate())),
    );
    print_kv(
        "Losses",
        &format!("{} ({})", results.losses, format_percent(results.loss_rate())),
    );
    print_kv(
        "Learned states",
        &format_number(session.space().learned().count()),
    );

    if let Some(path) = &args.summary {
        write_summary(path, &session)?;
        print_kv("Summary", &path.display().to_string());
    }
    if let Some(path) = &args.output {
        save(session.space(), path)?;
        print_kv("Saved table", &path.display().to_string());
    }
    Ok(())
}
