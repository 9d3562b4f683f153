//! Output formatting and progress reporting for the CLI

use anyhow::{Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    ports::Observer,
    training::{GameRecord, TrainingResults},
};

/// Create a progress bar for training
pub fn create_training_progress(total_games: u64) -> Result<ProgressBar> {
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
        .map_err(|e| anyhow!("invalid progress bar template: {e}"))?
        .progress_chars("=>-");
    let pb = ProgressBar::new(total_games);
    pb.set_style(style);
    Ok(pb)
}

/// Drives a progress bar from training events.
pub struct ProgressObserver {
    bar: ProgressBar,
}

impl ProgressObserver {
    pub fn new(bar: ProgressBar) -> Self {
        Self { bar }
    }
}

impl Observer for ProgressObserver {
    fn on_game_end(
        &mut self,
        _game_num: usize,
        _record: &GameRecord,
        results: &TrainingResults,
    ) -> crate::Result<()> {
        self.bar.inc(1);
        if results.games.is_multiple_of(50) {
            self.bar
                .set_message(format!("win rate {:.1}%", results.win_rate() * 100.0));
        }
        Ok(())
    }

    fn on_training_end(&mut self, results: &TrainingResults) -> crate::Result<()> {
        self.bar.finish_with_message(format!(
            "win rate {:.1}%",
            results.win_rate() * 100.0
        ));
        Ok(())
    }
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Format a ratio as a percentage
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}
