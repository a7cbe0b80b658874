//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by parsing, move
//! validation, check detection and session orchestration. Every fallible
//! operation validates its input before touching game state, so receiving
//! an error always means the state is unchanged.
//!
//! Usage guidelines:
//! - Input-related variants (`InvalidSquare`, `FormatError`, `IllegalMove`)
//!   are recoverable and suitable for presenting to end users.
//! - `MissingKing` means a position was built without a king for one side.
//!   It is a broken invariant, not an ordinary "not in check" answer.
//! - The opponent variants describe the request/response gate kept by
//!   `GameSession` while a reply move is outstanding.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

/// Unified error type for the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Malformed coordinate text such as `"i9"` or `"e"`.
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),

    /// A FEN string, board mapping, or piece code could not be interpreted.
    #[error("format error: {0}")]
    FormatError(String),

    /// The requested move is not in the legal-move set of the selected piece.
    #[error("illegal move {from}-{to}: {reason}")]
    IllegalMove {
        from: Square,
        to: Square,
        reason: String,
    },

    /// No king of the given colour exists on the board.
    #[error("no {0} king on the board")]
    MissingKing(Color),

    /// A local move was submitted while an opponent reply is outstanding.
    #[error("waiting for the opponent's reply")]
    AwaitingOpponent,

    /// An opponent response arrived but no request was pending.
    #[error("no opponent request is pending")]
    NoPendingOpponentRequest,

    /// The opponent did not answer before the configured deadline.
    #[error("opponent did not reply within {0} seconds")]
    OpponentTimeout(i64),

    /// Engine configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A perft worker thread panicked.
    #[error("worker thread failed: {0}")]
    WorkerFailed(String),
}

/// Result alias for engine operations.
pub type ChessResult<T> = Result<T, ChessErrors>;
