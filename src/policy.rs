//! Move-selection policies
//!
//! A policy picks the next square for the player to move. The learning
//! player draws beads from its matchboxes; opponents are simple baselines.

use std::{fmt, str::FromStr};

use rand::{Rng, SeedableRng, prelude::IndexedRandom, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    magic::{self, LINE_SUM},
    state_space::StateSpace,
    types::{BoardState, Move, Player},
};

/// Chooses moves for one side of a game.
pub trait Policy: Send {
    /// Select a free square for the player to move after `state`.
    ///
    /// `space` is the learned table; policies that do not learn ignore it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] if the board is full.
    fn select_move(&mut self, state: &BoardState, space: &StateSpace) -> crate::Result<Move>;

    /// Policy name, used in logs and summaries.
    fn name(&self) -> &str;
}

fn random_free_square(rng: &mut impl Rng, state: &BoardState) -> crate::Result<Move> {
    let free: Vec<Move> = state.free_squares().collect();
    free.choose(rng).copied().ok_or(crate::Error::NoValidMoves)
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Uniformly random free square.
#[derive(Debug)]
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn select_move(&mut self, state: &BoardState, _space: &StateSpace) -> crate::Result<Move> {
        random_free_square(&mut self.rng, state)
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Completes its own line when it can, blocks the opponent's otherwise,
/// and plays randomly when neither applies.
#[derive(Debug)]
pub struct DefensivePolicy {
    rng: StdRng,
}

impl DefensivePolicy {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed),
        }
    }
}

impl Policy for DefensivePolicy {
    fn select_move(&mut self, state: &BoardState, _space: &StateSpace) -> crate::Result<Move> {
        let me = state.to_move();
        let completing = completing_squares(state, me);
        if let Some(&square) = completing.first() {
            return Ok(square);
        }
        let threats = completing_squares(state, me.opponent());
        if let Some(&square) = threats.choose(&mut self.rng) {
            return Ok(square);
        }
        random_free_square(&mut self.rng, state)
    }

    fn name(&self) -> &str {
        "defensive"
    }
}

/// Free squares that would complete a line for `player`, ascending.
pub fn completing_squares(state: &BoardState, player: Player) -> Vec<Move> {
    let held: Vec<Move> = state
        .as_slice()
        .iter()
        .enumerate()
        .filter(|(i, _)| Player::at_index(*i) == player)
        .map(|(_, &square)| square)
        .collect();

    let mut squares = Vec::new();
    for (i, &a) in held.iter().enumerate() {
        for &b in &held[i + 1..] {
            let Some(needed) = LINE_SUM.checked_sub(a + b) else {
                continue;
            };
            if magic::is_square(needed)
                && needed != a
                && needed != b
                && !state.contains(needed)
                && !squares.contains(&needed)
            {
                squares.push(needed);
            }
        }
    }
    squares.sort_unstable();
    squares
}

/// Draws a bead from the matchbox of the current board state.
///
/// Falls back to a uniformly random free square when the matchbox is empty,
/// which is how every state starts.
#[derive(Debug)]
pub struct MatchboxPolicy {
    rng: StdRng,
}

impl MatchboxPolicy {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed),
        }
    }
}

impl Policy for MatchboxPolicy {
    fn select_move(&mut self, state: &BoardState, space: &StateSpace) -> crate::Result<Move> {
        if let Some(square) = space
            .matchbox(state)
            .and_then(|matchbox| matchbox.sample(&mut self.rng))
            .filter(|&square| !state.contains(square))
        {
            return Ok(square);
        }
        random_free_square(&mut self.rng, state)
    }

    fn name(&self) -> &str {
        "matchbox"
    }
}

/// Baseline opponents available for training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    #[default]
    Random,
    Defensive,
}

impl OpponentKind {
    /// Build the policy for this opponent.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Policy> {
        match self {
            OpponentKind::Random => Box::new(RandomPolicy::new(seed)),
            OpponentKind::Defensive => Box::new(DefensivePolicy::new(seed)),
        }
    }
}

impl fmt::Display for OpponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpponentKind::Random => f.write_str("random"),
            OpponentKind::Defensive => f.write_str("defensive"),
        }
    }
}

impl FromStr for OpponentKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(OpponentKind::Random),
            "defensive" | "blocker" => Ok(OpponentKind::Defensive),
            other => Err(crate::Error::InvalidConfiguration {
                message: format!("unknown opponent '{other}' (expected random or defensive)"),
            }),
        }
    }
}
