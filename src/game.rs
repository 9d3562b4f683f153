//! Tic-tac-toe played on magic-square numbers
//!
//! A move claims one of the squares 1-9; a player wins on holding three
//! squares that sum to 15, and the game is drawn once all nine are taken.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    magic::{self, has_winning_triple},
    types::{BoardState, MAX_MOVES, Move, MoveList, Outcome, Player},
};

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// A game in progress or finished, tracked as its move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: BoardState,
    status: GameStatus,
}

impl Game {
    /// Start a new game with an empty board
    pub fn new() -> Self {
        Self {
            history: BoardState::empty(),
            status: GameStatus::InProgress,
        }
    }

    /// Replay a sequence of moves from the start.
    ///
    /// # Errors
    ///
    /// Fails on the first illegal move, or on a move after the game ended.
    pub fn from_moves(moves: &[Move]) -> crate::Result<Self> {
        let mut game = Self::new();
        for &square in moves {
            game.play(square)?;
        }
        Ok(game)
    }

    /// Claim `square` for the player to move.
    pub fn play(&mut self, square: Move) -> crate::Result<GameStatus> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }
        if !magic::is_square(square) || self.history.contains(square) {
            return Err(crate::Error::IllegalMove { square });
        }

        let mover = self.to_move();
        self.history = self.history.push_unchecked(square);

        let held: Vec<Move> = self.player_moves(mover).collect();
        if has_winning_triple(&held) {
            self.status = GameStatus::Won(mover);
        } else if self.history.len() == MAX_MOVES {
            self.status = GameStatus::Draw;
        }
        Ok(self.status)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Player whose turn it is
    pub fn to_move(&self) -> Player {
        self.history.to_move()
    }

    /// Moves so far, in play order.
    pub fn history(&self) -> BoardState {
        self.history
    }

    pub fn move_list(&self) -> MoveList {
        MoveList::from(self.history)
    }

    /// Final result, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(Outcome::win_for(player)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }

    /// Squares still free, ascending.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        self.history.free_squares().collect()
    }

    /// Squares held by `player`, in the order they were claimed.
    pub fn player_moves(&self, player: Player) -> impl Iterator<Item = Move> + '_ {
        self.history
            .as_slice()
            .iter()
            .enumerate()
            .filter(move |(i, _)| Player::at_index(*i) == player)
            .map(|(_, &square)| square)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Game {
    /// Render the board with `X` for player 1, `O` for player 2 and the
    /// magic number on free cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_board(&self.history))
    }
}

/// Draw a history as a 3x3 grid.
pub fn render_board(history: &BoardState) -> String {
    let mut cells: Vec<String> = magic::MAGIC_SQUARE.iter().map(|s| s.to_string()).collect();
    for (i, &square) in history.as_slice().iter().enumerate() {
        if let Some(position) = magic::position_of(square) {
            cells[position] = match Player::at_index(i) {
                Player::One => "X".to_string(),
                Player::Two => "O".to_string(),
            };
        }
    }
    cells
        .chunks(3)
        .map(|row| format!(" {} | {} | {} ", row[0], row[1], row[2]))
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}
