//! Stats command - per-depth size of the state space and how much is learned

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::load_or_new;
use crate::{
    cli::output::{format_number, print_section},
    types::MAX_DEPTH,
};

#[derive(Parser, Debug)]
#[command(about = "Show state-space and learning statistics")]
pub struct StatsArgs {
    /// Saved table to summarise (a fresh table if omitted)
    #[arg(long, short = 't')]
    pub table: Option<PathBuf>,
}

pub fn execute(args: StatsArgs) -> Result<()> {
    let space = load_or_new(args.table.as_deref())?;

    print_section("State space");
    println!("  {:>5}  {:>10}  {:>10}", "depth", "states", "learned");
    for depth in 0..=MAX_DEPTH {
        println!(
            "  {:>5}  {:>10}  {:>10}",
            depth,
            format_number(space.len_at_depth(depth)),
            format_number(space.learned_at_depth(depth))
        );
    }
    println!(
        "  {:>5}  {:>10}  {:>10}",
        "total",
        format_number(space.len()),
        format_number(space.learned().count())
    );
    println!("\n  total beads: {}", space.total_beads());
    Ok(())
}
