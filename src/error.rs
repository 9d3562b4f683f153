//! Error types for the magic-square MENACE crate

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move list: {reason}")]
    InvalidMoveList { reason: String },

    #[error("history has no remaining player-1 move")]
    EmptyHistory,

    #[error("board state {state} is not part of the state space")]
    UnknownBoardState { state: String },

    #[error("invalid outcome code {code} (expected 0 = draw, 1 = player 1 wins, 2 = player 2 wins)")]
    InvalidOutcomeCode { code: u8 },

    #[error("illegal move: square {square} is taken or out of range")]
    IllegalMove { square: u8 },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },
}

impl Error {
    pub(crate) fn invalid_moves(reason: impl Into<String>) -> Self {
        Error::InvalidMoveList {
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
