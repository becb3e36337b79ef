//! Primitive identifiers shared by every subsystem.
//!
//! Pieces are an explicit `(kind, color)` pair and board cells are
//! `Option<Piece>`, so color never depends on enumeration order.

use std::fmt;

use crate::errors::{ChessError, ChessResult};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this color's king and rooks at game start.
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row holding this color's pawns at game start.
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row a pawn of this color promotes on.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        self.opposite().back_row()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
    Pawn,
}

impl PieceKind {
    /// Lowercase letter used by coordinate notation and FEN.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
            PieceKind::Pawn => 'p',
        }
    }

    #[inline]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'r' => Some(PieceKind::Rook),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }
}

/// Kinds a pawn may promote to, in the order the search expands them.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    #[inline]
    pub const fn white(kind: PieceKind) -> Self {
        Self::new(kind, Color::White)
    }

    #[inline]
    pub const fn black(kind: PieceKind) -> Self {
        Self::new(kind, Color::Black)
    }

    /// FEN letter: uppercase for white, lowercase for black.
    pub fn to_fen_char(self) -> char {
        let ch = self.kind.to_char();
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };
        PieceKind::from_char(ch).map(|kind| Piece::new(kind, color))
    }
}

/// Board coordinate. Row 0 is rank 8, row 7 is rank 1, col 0 is file `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn try_new(row: i32, col: i32) -> ChessResult<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(ChessError::InvalidSquare { row, col })
        }
    }

    /// Square shifted by `(d_row, d_col)`, or `None` when it leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Iterates all 64 squares row by row from a8 to h1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..8).flat_map(|row| (0u8..8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.col),
            char::from(b'8' - self.row)
        )
    }
}

/// 8×8 mailbox, indexed `[row][col]`.
pub type Board = [[Option<Piece>; 8]; 8];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotion_row_is_opponent_back_row() {
        assert_eq!(Color::White.promotion_row(), 0);
        assert_eq!(Color::Black.promotion_row(), 7);
    }

    #[test]
    fn square_offset_stops_at_board_edge() {
        let h1 = Square::new(7, 7).expect("h1 should exist");
        assert_eq!(h1.offset(1, 0), None);
        assert_eq!(h1.offset(-1, -1), Square::new(6, 6));
        assert_eq!(h1.to_string(), "h1");
        assert!(Square::try_new(8, 0).is_err());
    }

    #[test]
    fn fen_chars_carry_color() {
        assert_eq!(
            Piece::from_fen_char('Q'),
            Some(Piece::white(PieceKind::Queen))
        );
        assert_eq!(Piece::from_fen_char('n'), Some(Piece::black(PieceKind::Knight)));
        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::black(PieceKind::Pawn).to_fen_char(), 'p');
    }

    #[test]
    fn all_squares_cover_the_board() {
        assert_eq!(Square::all().count(), 64);
    }
}
