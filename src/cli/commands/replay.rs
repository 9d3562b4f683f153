//! Replay command - reinforce one recorded game and show its decision path

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{load_or_new, save};
use crate::{
    analyzer::decision_path,
    cli::output::{print_kv, print_section},
    reinforcement::ReinforcementEngine,
    types::{BoardState, Outcome},
};

#[derive(Parser, Debug)]
#[command(about = "Reinforce a single recorded game")]
pub struct ReplayArgs {
    /// Moves of the finished game, comma separated, e.g. 5,2,6,4,9
    #[arg(long, short = 'm')]
    pub moves: BoardState,

    /// Outcome code: 1 = player 1 wins, 2 = player 2 wins, 0 = draw
    #[arg(long)]
    pub outcome: u8,

    /// Saved table to update (a fresh table if omitted)
    #[arg(long, short = 't')]
    pub table: Option<PathBuf>,

    /// Where to save the updated table (defaults to --table)
    #[arg(long, short = 'O')]
    pub output: Option<PathBuf>,
}

pub fn execute(args: ReplayArgs) -> Result<()> {
    let outcome = Outcome::from_code(args.outcome)?;
    let mut space = load_or_new(args.table.as_deref())?;
    let mut engine = ReinforcementEngine::new();
    engine.reinforce(&mut space, args.moves.as_slice(), outcome)?;

    print_section(&format!("{} ({outcome})", args.moves));
    for point in &decision_path(&args.moves) {
        let count = space
            .matchbox(&point.state)
            .map_or(0, |matchbox| matchbox.count(point.chosen));
        print_kv(
            &point.state.to_string(),
            &format!("played {} -> {count} bead(s)", point.chosen),
        );
    }

    if let Some(path) = args.output.as_ref().or(args.table.as_ref()) {
        save(&space, path)?;
        print_kv("Saved table", &path.display().to_string());
    }
    Ok(())
}
