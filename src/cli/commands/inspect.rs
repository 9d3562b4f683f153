//! Inspect command - show the matchbox for one board history

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use super::load_or_new;
use crate::{
    cli::output::{format_percent, print_kv, print_section, print_subsection},
    game::render_board,
    types::BoardState,
};

#[derive(Parser, Debug)]
#[command(about = "Show the candidate moves learned for a board history")]
pub struct InspectArgs {
    /// Saved table to read (a fresh table if omitted)
    #[arg(long, short = 't')]
    pub table: Option<PathBuf>,

    /// Moves so far, comma separated, e.g. 5,2 (empty for the opening)
    #[arg(long, short = 'H')]
    pub history: Option<BoardState>,
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let space = load_or_new(args.table.as_deref())?;
    let history = args.history.unwrap_or_default();

    let Some(matchbox) = space.matchbox(&history) else {
        bail!(crate::Error::UnknownBoardState {
            state: history.to_string()
        });
    };

    print_section(&format!("Board state {history}"));
    println!("{}", render_board(&history));

    print_subsection("Candidate moves");
    if matchbox.is_empty() {
        println!("  (empty: player 1 plays uniformly at random here)");
    } else {
        let total = matchbox.total();
        for (square, count) in matchbox.iter() {
            print_kv(
                &format!("square {square}"),
                &format!(
                    "{count} bead(s), {}",
                    format_percent(count as f64 / total as f64)
                ),
            );
        }
        print_kv("Total beads", &total.to_string());
        print_kv("Entropy", &format!("{:.3} nats", matchbox.entropy()));
    }
    Ok(())
}
