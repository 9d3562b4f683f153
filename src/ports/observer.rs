//! Observer port - hooks for watching a training run
//!
//! Observers receive events in this order:
//! 1. `on_training_start(total_games)` once
//! 2. `on_game_end(game_num, record, results)` after each game is reinforced
//! 3. `on_training_end(results)` once

use crate::{
    Result,
    training::{GameRecord, TrainingResults},
};

/// Observer trait for monitoring training
///
/// Every method defaults to a no-op, so implementors only override the
/// events they care about.
///
/// # Examples
///
/// ```
/// use magic_menace::{
///     ports::Observer,
///     training::{GameRecord, TrainingResults},
/// };
///
/// struct CountingObserver {
///     games: usize,
/// }
///
/// impl Observer for CountingObserver {
///     fn on_game_end(
///         &mut self,
///         _game_num: usize,
///         _record: &GameRecord,
///         _results: &TrainingResults,
///     ) -> magic_menace::Result<()> {
///         self.games += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer {
    /// Called once before the first game.
    fn on_training_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each game has been played and reinforced.
    ///
    /// `results` already includes this game.
    fn on_game_end(
        &mut self,
        _game_num: usize,
        _record: &GameRecord,
        _results: &TrainingResults,
    ) -> Result<()> {
        Ok(())
    }

    /// Called once after the last game.
    fn on_training_end(&mut self, _results: &TrainingResults) -> Result<()> {
        Ok(())
    }
}

/// The unit observer ignores every event.
impl Observer for () {}
