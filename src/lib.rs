//! MENACE (Matchbox Educable Noughts And Crosses Engine) over the magic square
//!
//! Tic-tac-toe squares are numbered 1-9 as a 3x3 magic square, so a player
//! wins by holding three squares that sum to 15. This crate provides:
//! - Win detection and move-list analysis on that encoding
//! - The enumerated table of every board history player 1 can face, each
//!   with a matchbox of reinforced candidate moves
//! - MENACE's outcome-driven reinforcement (+3 win, +1 draw, -1 loss)
//! - A self-play trainer, table persistence and a CLI around the engine
//!
//! ```
//! use magic_menace::{Outcome, ReinforcementEngine, StateSpace, types::BoardState};
//!
//! let mut space = StateSpace::new();
//! let mut engine = ReinforcementEngine::new();
//! engine.reinforce(&mut space, &[5, 2, 6, 4, 9], Outcome::PlayerOneWin)?;
//!
//! let opening = space.matchbox(&BoardState::empty()).expect("opening is a key");
//! assert_eq!(opening.count(5), 3);
//! # Ok::<(), magic_menace::Error>(())
//! ```

pub mod adapters;
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod magic;
pub mod matchbox;
pub mod policy;
pub mod ports;
pub mod reinforcement;
pub mod state_space;
pub mod training;
pub mod types;
pub mod utils;

pub use analyzer::{DecisionPath, decision_path, deinterlace, has_any_win, interleave};
pub use config::TrainingConfig;
pub use error::{Error, Result};
pub use game::{Game, GameStatus};
pub use magic::has_winning_triple;
pub use matchbox::Matchbox;
pub use policy::{OpponentKind, Policy};
pub use reinforcement::{ReinforcementEngine, ReinforcementValues};
pub use state_space::StateSpace;
pub use training::{TrainingResults, TrainingSession};
pub use types::{BoardState, DecisionPoint, Move, MoveList, Outcome, Player};
