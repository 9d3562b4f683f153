//! Outcome-driven reinforcement of the learned table
//!
//! After each finished game every player-1 decision along its path is
//! rewarded or punished: a win adds three beads for the chosen move, a draw
//! adds one, and a loss removes at most one.

use serde::{Deserialize, Serialize};

use crate::{
    analyzer::decision_path,
    state_space::StateSpace,
    types::{Move, MoveList, Outcome},
};

/// MENACE reinforcement values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReinforcementValues {
    pub win: i16,
    pub draw: i16,
    pub loss: i16,
}

impl Default for ReinforcementValues {
    fn default() -> Self {
        // MENACE's original values
        ReinforcementValues {
            win: 3,
            draw: 1,
            loss: -1,
        }
    }
}

impl ReinforcementValues {
    /// Check that rewards add beads and the penalty removes them.
    pub fn validate(&self) -> crate::Result<()> {
        if self.win < 0 || self.draw < 0 || self.loss > 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "reinforcement values must satisfy win >= 0, draw >= 0, loss <= 0 (got {}/{}/{})",
                    self.win, self.draw, self.loss
                ),
            });
        }
        Ok(())
    }

    fn update_for(&self, outcome: Outcome) -> BeadUpdate {
        match outcome {
            Outcome::PlayerOneWin => BeadUpdate::Add(self.win.unsigned_abs().into()),
            Outcome::Draw => BeadUpdate::Add(self.draw.unsigned_abs().into()),
            Outcome::PlayerTwoWin => BeadUpdate::Remove(self.loss.unsigned_abs().into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BeadUpdate {
    Add(u32),
    Remove(u32),
}

/// Counters of reinforced games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    pub games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    /// Decision points updated across all games
    pub decisions: usize,
}

/// Applies finished games to a [`StateSpace`].
#[derive(Debug, Clone, Default)]
pub struct ReinforcementEngine {
    values: ReinforcementValues,
    stats: EngineStats,
}

impl ReinforcementEngine {
    /// Create with MENACE's original values (+3 / +1 / -1)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom reinforcement values
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if the values fail
    /// [`ReinforcementValues::validate`].
    pub fn with_values(values: ReinforcementValues) -> crate::Result<Self> {
        values.validate()?;
        Ok(Self {
            values,
            stats: EngineStats::default(),
        })
    }

    pub fn values(&self) -> ReinforcementValues {
        self.values
    }

    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = EngineStats::default();
    }

    /// Reinforce every player-1 decision of a finished game.
    ///
    /// The move list is validated first. Every decision's board state is
    /// looked up before any matchbox changes, so a failed call leaves the
    /// table untouched.
    ///
    /// # Errors
    ///
    /// * [`crate::Error::InvalidMoveList`] for a malformed move list
    /// * [`crate::Error::UnknownBoardState`] if a decision's history is not
    ///   in the table (for instance, play continued past a completed line)
    pub fn reinforce(
        &mut self,
        space: &mut StateSpace,
        moves: &[Move],
        outcome: Outcome,
    ) -> crate::Result<()> {
        let moves = MoveList::new(moves)?;
        self.reinforce_list(space, &moves, outcome)
    }

    /// Same as [`Self::reinforce`], taking the integer outcome code.
    ///
    /// # Errors
    ///
    /// Additionally returns [`crate::Error::InvalidOutcomeCode`] for codes
    /// other than 0, 1 and 2.
    pub fn reinforce_code(
        &mut self,
        space: &mut StateSpace,
        moves: &[Move],
        code: u8,
    ) -> crate::Result<()> {
        let outcome = Outcome::from_code(code)?;
        self.reinforce(space, moves, outcome)
    }

    /// Reinforce an already validated move list.
    pub fn reinforce_list(
        &mut self,
        space: &mut StateSpace,
        moves: &MoveList,
        outcome: Outcome,
    ) -> crate::Result<()> {
        let path = decision_path(&moves.as_state());

        if let Some(missing) = path.iter().find(|point| !space.contains(&point.state)) {
            return Err(crate::Error::UnknownBoardState {
                state: missing.state.to_string(),
            });
        }

        let update = self.values.update_for(outcome);
        for point in &path {
            let matchbox = space.require_mut(&point.state)?;
            match update {
                BeadUpdate::Add(copies) => matchbox.add(point.chosen, copies),
                BeadUpdate::Remove(copies) => {
                    let removed = matchbox.remove(point.chosen, copies);
                    if removed < copies {
                        log::trace!(
                            "{}: only {removed} of {copies} bead(s) of {} to remove",
                            point.state,
                            point.chosen
                        );
                    }
                }
            }
            log::debug!(
                "{outcome}: {} -> {} now has {} bead(s)",
                point.state,
                point.chosen,
                matchbox.count(point.chosen)
            );
        }

        self.stats.games += 1;
        self.stats.decisions += path.len();
        match outcome {
            Outcome::PlayerOneWin => self.stats.wins += 1,
            Outcome::Draw => self.stats.draws += 1,
            Outcome::PlayerTwoWin => self.stats.losses += 1,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoardState;

    fn state(moves: &[Move]) -> BoardState {
        BoardState::from_moves(moves).unwrap()
    }

    #[test]
    fn test_default_values_are_menace_original() {
        let values = ReinforcementValues::default();
        assert_eq!((values.win, values.draw, values.loss), (3, 1, -1));
        assert!(values.validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_values() {
        let values = ReinforcementValues {
            win: 3,
            draw: 1,
            loss: 2,
        };
        assert!(matches!(
            ReinforcementEngine::with_values(values),
            Err(crate::Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_win_adds_three_beads_per_decision() {
        let mut space = StateSpace::new();
        let mut engine = ReinforcementEngine::new();
        engine
            .reinforce(&mut space, &[5, 2, 6, 4, 9], Outcome::PlayerOneWin)
            .unwrap();

        assert_eq!(space.matchbox(&BoardState::empty()).unwrap().count(5), 3);
        assert_eq!(space.matchbox(&state(&[5, 2])).unwrap().count(6), 3);
        assert_eq!(space.matchbox(&state(&[5, 2, 6, 4])).unwrap().count(9), 3);
        assert_eq!(space.total_beads(), 9);
        assert_eq!(engine.stats().wins, 1);
        assert_eq!(engine.stats().decisions, 3);
    }

    #[test]
    fn test_loss_after_win_removes_one() {
        let mut space = StateSpace::new();
        let mut engine = ReinforcementEngine::new();
        engine.reinforce_code(&mut space, &[5, 2, 6, 4, 9], 1).unwrap();
        engine.reinforce_code(&mut space, &[5, 1, 6, 4, 2, 3], 2).unwrap();

        assert_eq!(space.matchbox(&BoardState::empty()).unwrap().count(5), 2);
        // (5,1) was never rewarded, so the penalty there is a no-op
        assert!(space.matchbox(&state(&[5, 1])).unwrap().is_empty());
        assert_eq!(engine.stats().losses, 1);
    }

    #[test]
    fn test_custom_values_scale_updates() {
        let mut space = StateSpace::new();
        let mut engine = ReinforcementEngine::with_values(ReinforcementValues {
            win: 3,
            draw: 1,
            loss: -2,
        })
        .unwrap();
        engine.reinforce(&mut space, &[5], Outcome::Draw).unwrap();
        engine.reinforce(&mut space, &[5], Outcome::PlayerOneWin).unwrap();
        engine.reinforce(&mut space, &[5], Outcome::PlayerTwoWin).unwrap();
        assert_eq!(space.matchbox(&BoardState::empty()).unwrap().count(5), 2);
    }

    #[test]
    fn test_invalid_code_is_rejected_before_mutation() {
        let mut space = StateSpace::new();
        let mut engine = ReinforcementEngine::new();
        assert!(matches!(
            engine.reinforce_code(&mut space, &[5, 2, 6, 4, 9], 7),
            Err(crate::Error::InvalidOutcomeCode { code: 7 })
        ));
        assert_eq!(space.total_beads(), 0);
        assert_eq!(engine.stats().games, 0);
    }

    #[test]
    fn test_empty_game_changes_nothing() {
        let mut space = StateSpace::new();
        let mut engine = ReinforcementEngine::new();
        engine.reinforce(&mut space, &[], Outcome::Draw).unwrap();
        assert_eq!(space.total_beads(), 0);
        assert_eq!(engine.stats().decisions, 0);
    }
}
