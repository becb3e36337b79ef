//! Square conversions for coordinate notation.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! `(row, col)` square, with row 0 at rank 8.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert a coordinate (for example: "e4") to a square. Files may be upper case.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidNotation(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidNotation(square.to_owned()));
    }

    let col = file - b'a';
    let row = 8 - (rank - b'0');
    Square::new(row, col).ok_or_else(|| ChessError::InvalidNotation(square.to_owned()))
}

/// Convert a square to its coordinate (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}
