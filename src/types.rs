//! Domain types: moves, players, outcomes and board histories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::magic;

/// A magic-square encoded square (1-9).
pub type Move = u8;

/// Most moves a single game can hold.
pub const MAX_MOVES: usize = 9;

/// Deepest decision level: player 1 has made four moves and is about to make the fifth.
pub const MAX_DEPTH: usize = 4;

/// Player identity, in turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first; the learning player.
    One,
    /// Moves second.
    Two,
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Player who makes the move at `index` in a move list.
    pub fn at_index(index: usize) -> Self {
        if index % 2 == 0 { Player::One } else { Player::Two }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => f.write_str("player 1"),
            Player::Two => f.write_str("player 2"),
        }
    }
}

/// Result of a finished game, seen from player 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl Outcome {
    /// Decode the integer outcome code (1 = player 1 wins, 2 = player 2 wins, 0 = draw).
    pub fn from_code(code: u8) -> crate::Result<Self> {
        match code {
            0 => Ok(Outcome::Draw),
            1 => Ok(Outcome::PlayerOneWin),
            2 => Ok(Outcome::PlayerTwoWin),
            _ => Err(crate::Error::InvalidOutcomeCode { code }),
        }
    }

    /// Integer code of this outcome.
    pub fn code(self) -> u8 {
        match self {
            Outcome::Draw => 0,
            Outcome::PlayerOneWin => 1,
            Outcome::PlayerTwoWin => 2,
        }
    }

    /// Outcome in which `player` wins.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::One => Outcome::PlayerOneWin,
            Player::Two => Outcome::PlayerTwoWin,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::PlayerOneWin => Some(Player::One),
            Outcome::PlayerTwoWin => Some(Player::Two),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::PlayerOneWin => f.write_str("player 1 wins"),
            Outcome::PlayerTwoWin => f.write_str("player 2 wins"),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}

/// Ordered history of moves by both players, player 1 first.
///
/// Stored inline with a fixed capacity of nine moves so it can be copied and
/// hashed cheaply; unused slots are always zero, which keeps the derived
/// equality, hashing and ordering structural. Ordering compares length first,
/// so shallower histories sort before deeper ones.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<Move>", into = "Vec<Move>")]
pub struct BoardState {
    len: u8,
    moves: [Move; MAX_MOVES],
}

impl BoardState {
    /// The empty history.
    pub const fn empty() -> Self {
        Self {
            len: 0,
            moves: [0; MAX_MOVES],
        }
    }

    /// Build a history, validating length, range and uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMoveList`] if there are more than nine
    /// moves, a move outside 1-9, or a repeated move.
    pub fn from_moves(moves: &[Move]) -> crate::Result<Self> {
        if moves.len() > MAX_MOVES {
            return Err(crate::Error::invalid_moves(format!(
                "{} moves exceed the {MAX_MOVES} squares of the board",
                moves.len()
            )));
        }
        let mut state = Self::empty();
        for &square in moves {
            state = state.with_move(square)?;
        }
        Ok(state)
    }

    /// Append one move, returning the extended history.
    pub fn with_move(&self, square: Move) -> crate::Result<Self> {
        if !magic::is_square(square) {
            return Err(crate::Error::invalid_moves(format!(
                "move {square} is outside 1-9"
            )));
        }
        if self.contains(square) {
            return Err(crate::Error::invalid_moves(format!(
                "square {square} is played twice"
            )));
        }
        if self.len() == MAX_MOVES {
            return Err(crate::Error::invalid_moves("board is already full"));
        }
        Ok(self.push_unchecked(square))
    }

    /// Append a move already known to be legal for this history.
    pub(crate) fn push_unchecked(&self, square: Move) -> Self {
        debug_assert!(self.len() < MAX_MOVES && !self.contains(square));
        let mut next = *self;
        next.moves[self.len()] = square;
        next.len += 1;
        next
    }

    /// The first `len` moves (or all of them if `len` is larger).
    pub fn prefix(&self, len: usize) -> Self {
        let len = len.min(self.len());
        let mut prefix = Self::empty();
        prefix.moves[..len].copy_from_slice(&self.moves[..len]);
        prefix.len = len as u8;
        prefix
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len()]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of moves player 1 has already made.
    pub fn depth(&self) -> usize {
        self.len() / 2
    }

    pub fn contains(&self, square: Move) -> bool {
        self.as_slice().contains(&square)
    }

    /// Player whose turn it is after this history.
    pub fn to_move(&self) -> Player {
        Player::at_index(self.len())
    }

    /// Squares not yet played, ascending.
    pub fn free_squares(&self) -> impl Iterator<Item = Move> + '_ {
        (1..=9).filter(move |&square| !self.contains(square))
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardState{self}")
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, square) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{square}")?;
        }
        f.write_str(")")
    }
}

impl FromStr for BoardState {
    type Err = crate::Error;

    /// Parse a comma- or space-separated list such as `5,2,6` or `(5, 2, 6)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches(['(', '[']).trim_end_matches([')', ']']);
        let mut moves = Vec::new();
        for token in trimmed.split([',', ' ', '\t']).filter(|t| !t.is_empty()) {
            let square: Move = token
                .parse()
                .map_err(|_| crate::Error::invalid_moves(format!("'{token}' is not a square")))?;
            moves.push(square);
        }
        Self::from_moves(&moves)
    }
}

impl TryFrom<Vec<Move>> for BoardState {
    type Error = crate::Error;

    fn try_from(moves: Vec<Move>) -> Result<Self, Self::Error> {
        Self::from_moves(&moves)
    }
}

impl From<BoardState> for Vec<Move> {
    fn from(state: BoardState) -> Self {
        state.as_slice().to_vec()
    }
}

/// A finished (or in-progress) game's moves, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveList(BoardState);

impl MoveList {
    /// Validate a raw move list.
    ///
    /// Alternation is positional: even indices belong to player 1, odd
    /// indices to player 2, so a list is well formed when it has at most nine
    /// distinct squares in 1-9.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMoveList`] otherwise.
    pub fn new(moves: &[Move]) -> crate::Result<Self> {
        BoardState::from_moves(moves).map(MoveList)
    }

    pub fn as_slice(&self) -> &[Move] {
        self.0.as_slice()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The whole list as a board history.
    pub fn as_state(&self) -> BoardState {
        self.0
    }
}

impl From<BoardState> for MoveList {
    fn from(state: BoardState) -> Self {
        MoveList(state)
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player-1 decision: the history before the move, and the move made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecisionPoint {
    pub state: BoardState,
    pub chosen: Move,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_moves_accepts_full_game() {
        let state = BoardState::from_moves(&[5, 2, 6, 4, 9, 1, 7, 3, 8]).unwrap();
        assert_eq!(state.len(), 9);
        assert_eq!(state.depth(), 4);
        assert_eq!(state.free_squares().count(), 0);
    }

    #[test]
    fn test_from_moves_rejects_bad_input() {
        assert!(matches!(
            BoardState::from_moves(&[5, 5]),
            Err(crate::Error::InvalidMoveList { .. })
        ));
        assert!(matches!(
            BoardState::from_moves(&[0]),
            Err(crate::Error::InvalidMoveList { .. })
        ));
        assert!(matches!(
            BoardState::from_moves(&[10]),
            Err(crate::Error::InvalidMoveList { .. })
        ));
        assert!(matches!(
            BoardState::from_moves(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 1]),
            Err(crate::Error::InvalidMoveList { .. })
        ));
    }

    #[test]
    fn test_prefix_equals_direct_construction() {
        let full = BoardState::from_moves(&[5, 2, 6, 4, 9]).unwrap();
        let direct = BoardState::from_moves(&[5, 2]).unwrap();
        assert_eq!(full.prefix(2), direct);
        assert_eq!(full.prefix(0), BoardState::empty());
        assert_eq!(full.prefix(20), full);
    }

    #[test]
    fn test_order_matters_for_equality() {
        let a = BoardState::from_moves(&[5, 2, 6, 4]).unwrap();
        let b = BoardState::from_moves(&[6, 4, 5, 2]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_shallower_states_sort_first() {
        let shallow = BoardState::from_moves(&[9, 8]).unwrap();
        let deep = BoardState::from_moves(&[1, 2, 3, 4]).unwrap();
        assert!(shallow < deep);
        assert!(BoardState::empty() < shallow);
    }

    #[test]
    fn test_parse_and_display() {
        let state: BoardState = "(5, 2, 6)".parse().unwrap();
        assert_eq!(state.as_slice(), &[5, 2, 6]);
        assert_eq!(state.to_string(), "(5,2,6)");
        assert_eq!("".parse::<BoardState>().unwrap(), BoardState::empty());
        assert!("5,x".parse::<BoardState>().is_err());
    }

    #[test]
    fn test_serde_as_plain_sequence() {
        let state = BoardState::from_moves(&[5, 2, 6]).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "[5,2,6]");
        let back: BoardState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
        assert!(serde_json::from_str::<BoardState>("[5,5]").is_err());
    }

    #[test]
    fn test_outcome_codes() {
        assert_eq!(Outcome::from_code(0).unwrap(), Outcome::Draw);
        assert_eq!(Outcome::from_code(1).unwrap(), Outcome::PlayerOneWin);
        assert_eq!(Outcome::from_code(2).unwrap(), Outcome::PlayerTwoWin);
        assert!(matches!(
            Outcome::from_code(3),
            Err(crate::Error::InvalidOutcomeCode { code: 3 })
        ));
        for outcome in [Outcome::Draw, Outcome::PlayerOneWin, Outcome::PlayerTwoWin] {
            assert_eq!(Outcome::from_code(outcome.code()).unwrap(), outcome);
        }
    }
}
