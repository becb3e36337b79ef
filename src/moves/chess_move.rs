//! Immutable move value and coordinate notation.
//!
//! A move is a start square, an end square and an optional promotion kind.
//! Text form is `<file><rank><file><rank>` (`e2e4`) with an optional fifth
//! promotion letter (`e7e8q`).

use std::fmt;
use std::str::FromStr;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::algebraic_to_square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(start: Square, end: Square) -> Self {
        Self {
            start,
            end,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(self, kind: PieceKind) -> Self {
        Self {
            promotion: Some(kind),
            ..self
        }
    }

    /// Parses coordinate notation. Same as `str::parse::<Move>()`.
    pub fn from_coords(coords: &str) -> ChessResult<Self> {
        coords.parse()
    }

    pub fn to_coords(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Move {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.is_ascii() || (trimmed.len() != 4 && trimmed.len() != 5) {
            return Err(ChessError::InvalidNotation(s.to_owned()));
        }

        let start = algebraic_to_square(&trimmed[0..2])
            .map_err(|_| ChessError::InvalidNotation(s.to_owned()))?;
        let end = algebraic_to_square(&trimmed[2..4])
            .map_err(|_| ChessError::InvalidNotation(s.to_owned()))?;

        let promotion = match trimmed.chars().nth(4) {
            None => None,
            Some(ch) => match PieceKind::from_char(ch) {
                Some(kind @ (PieceKind::Queen
                | PieceKind::Rook
                | PieceKind::Bishop
                | PieceKind::Knight)) => Some(kind),
                _ => return Err(ChessError::InvalidNotation(s.to_owned())),
            },
        };

        Ok(Self {
            start,
            end,
            promotion,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_from_the_top() {
        let mv: Move = "e2e4".parse().expect("e2e4 should parse");
        assert_eq!(mv.start, Square::new(6, 4).expect("e2"));
        assert_eq!(mv.end, Square::new(4, 4).expect("e4"));
        assert_eq!(mv.promotion, None);
        assert_eq!(mv.to_coords(), "e2e4");
    }

    #[test]
    fn accepts_uppercase_files_and_promotion_suffix() {
        let mv = Move::from_coords("A7a8q").expect("promotion should parse");
        assert_eq!(mv.start, Square::new(1, 0).expect("a7"));
        assert_eq!(mv.end, Square::new(0, 0).expect("a8"));
        assert_eq!(mv.promotion, Some(PieceKind::Queen));
        assert_eq!(mv.to_string(), "a7a8q");
    }

    #[test]
    fn rejects_malformed_notation() {
        for bad in ["", "e2", "e2e9", "i2e4", "e2e4k", "e2-e4", "ééé"] {
            assert!(
                matches!(bad.parse::<Move>(), Err(ChessError::InvalidNotation(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
