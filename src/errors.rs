//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type returned by parsing, move
//! application, configuration and worker-pool setup. Search itself cannot
//! fail.

use thiserror::Error;

use crate::game_state::chess_types::Square;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A coordinate string such as `e2e4` could not be parsed.
    #[error("invalid move notation: {0}")]
    InvalidNotation(String),

    /// Row/column indices outside `0..=7`.
    #[error("square out of bounds: row {row}, col {col}")]
    InvalidSquare { row: i32, col: i32 },

    /// Tried to move a piece from a square that holds none.
    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// Unknown search option name or unparsable value.
    #[error("invalid option {name}: {value}")]
    InvalidOption { name: String, value: String },

    #[error("worker pool setup failed: {0}")]
    WorkerPool(String),
}
