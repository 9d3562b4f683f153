//! Move-sequence analysis
//!
//! Splits an interleaved move list into per-player halves and decomposes a
//! finished game into player 1's decision points.

use crate::{
    magic::has_winning_triple,
    types::{BoardState, DecisionPoint, Move},
};

/// Split an alternating move list into (player 1 moves, player 2 moves).
pub fn deinterlace(moves: &[Move]) -> (Vec<Move>, Vec<Move>) {
    let player_one = moves.iter().step_by(2).copied().collect();
    let player_two = moves.iter().skip(1).step_by(2).copied().collect();
    (player_one, player_two)
}

/// Merge per-player moves back into one alternating list.
///
/// Player 1 moves first, so it may have made one move more than player 2.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidMoveList`] for any other length difference.
pub fn interleave(player_one: &[Move], player_two: &[Move]) -> crate::Result<Vec<Move>> {
    if player_one.len() != player_two.len() && player_one.len() != player_two.len() + 1 {
        return Err(crate::Error::invalid_moves(format!(
            "player 1 has {} moves but player 2 has {}",
            player_one.len(),
            player_two.len()
        )));
    }
    let mut merged = Vec::with_capacity(player_one.len() + player_two.len());
    for (i, &square) in player_one.iter().enumerate() {
        merged.push(square);
        if let Some(&reply) = player_two.get(i) {
            merged.push(reply);
        }
    }
    Ok(merged)
}

/// Check whether either player holds a winning triple.
pub fn has_any_win(moves: &[Move]) -> bool {
    let (player_one, player_two) = deinterlace(moves);
    has_winning_triple(&player_one) || has_winning_triple(&player_two)
}

/// Find player 1's last move and the history preceding it.
///
/// If the last move belongs to player 2 it is trimmed first.
///
/// # Errors
///
/// Returns [`crate::Error::EmptyHistory`] if no player-1 move remains.
pub fn last_player_one_decision(state: &BoardState) -> crate::Result<DecisionPoint> {
    let mut cursor = state.len();
    // Player 1 owns even indices, so the last move is theirs when the length is odd.
    if cursor % 2 == 0 {
        cursor = cursor.checked_sub(1).ok_or(crate::Error::EmptyHistory)?;
    }
    Ok(DecisionPoint {
        state: state.prefix(cursor - 1),
        chosen: state.as_slice()[cursor - 1],
    })
}

/// Player 1's decisions over one game, ordered from the opening move on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecisionPath {
    points: Vec<DecisionPoint>,
}

impl DecisionPath {
    /// Move chosen at `state`, if this game passed through it.
    pub fn get(&self, state: &BoardState) -> Option<Move> {
        self.points
            .iter()
            .find(|point| point.state == *state)
            .map(|point| point.chosen)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DecisionPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl IntoIterator for DecisionPath {
    type Item = DecisionPoint;
    type IntoIter = std::vec::IntoIter<DecisionPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a DecisionPath {
    type Item = &'a DecisionPoint;
    type IntoIter = std::slice::Iter<'a, DecisionPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Decompose a game into one decision point per player-1 move.
///
/// Peels the last player-1 decision off the remaining prefix until nothing
/// is left. Each recorded history is a distinct prefix of the game.
pub fn decision_path(moves: &BoardState) -> DecisionPath {
    let mut points = Vec::with_capacity(moves.len().div_ceil(2));
    let mut remaining = *moves;
    while let Ok(point) = last_player_one_decision(&remaining) {
        remaining = point.state;
        points.push(point);
    }
    points.reverse();
    DecisionPath { points }
}
