//! Canonical chess-rule constants.
//!
//! Starting layout, castling geometry and the rights bookkeeping type used by
//! `Position`.

use crate::game_state::chess_types::PieceKind::{
    Bishop as B, King as K, Knight as N, Pawn as P, Queen as Q, Rook as R,
};
use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const fn w(kind: PieceKind) -> Option<Piece> {
    Some(Piece::white(kind))
}

const fn b(kind: PieceKind) -> Option<Piece> {
    Some(Piece::black(kind))
}

/// Standard starting array, row 0 = rank 8.
pub const STARTING_BOARD: Board = [
    [b(R), b(N), b(B), b(Q), b(K), b(B), b(N), b(R)],
    [b(P), b(P), b(P), b(P), b(P), b(P), b(P), b(P)],
    [None; 8],
    [None; 8],
    [None; 8],
    [None; 8],
    [w(P), w(P), w(P), w(P), w(P), w(P), w(P), w(P)],
    [w(R), w(N), w(B), w(Q), w(K), w(B), w(N), w(R)],
];

/// Column of both kings at game start.
pub const KING_HOME_COL: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    /// King side (`O-O`).
    Short,
    /// Queen side (`O-O-O`).
    Long,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Short, CastleSide::Long];

    #[inline]
    pub const fn rook_home_col(self) -> u8 {
        match self {
            CastleSide::Short => 7,
            CastleSide::Long => 0,
        }
    }

    #[inline]
    pub const fn king_target_col(self) -> u8 {
        match self {
            CastleSide::Short => 6,
            CastleSide::Long => 2,
        }
    }

    /// The square the king crosses, which is where the rook ends up.
    #[inline]
    pub const fn rook_target_col(self) -> u8 {
        match self {
            CastleSide::Short => 5,
            CastleSide::Long => 3,
        }
    }

    /// Columns strictly between king and rook; all must be empty.
    #[inline]
    pub const fn between_cols(self) -> &'static [u8] {
        match self {
            CastleSide::Short => &[5, 6],
            CastleSide::Long => &[1, 2, 3],
        }
    }

    /// Columns the king stands on or crosses, destination included.
    #[inline]
    pub const fn king_path_cols(self) -> &'static [u8] {
        match self {
            CastleSide::Short => &[4, 5, 6],
            CastleSide::Long => &[4, 3, 2],
        }
    }

    /// Side whose king destination column is `col`, if any.
    #[inline]
    pub const fn from_king_target_col(col: u8) -> Option<Self> {
        match col {
            6 => Some(CastleSide::Short),
            2 => Some(CastleSide::Long),
            _ => None,
        }
    }
}

/// Four castling-rights flags (white/black × short/long).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_short: bool,
    pub white_long: bool,
    pub black_short: bool,
    pub black_long: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_short: true,
        white_long: true,
        black_short: true,
        black_long: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_short: false,
        white_long: false,
        black_short: false,
        black_long: false,
    };

    #[inline]
    pub fn get(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::Short) => self.white_short,
            (Color::White, CastleSide::Long) => self.white_long,
            (Color::Black, CastleSide::Short) => self.black_short,
            (Color::Black, CastleSide::Long) => self.black_long,
        }
    }

    #[inline]
    pub fn set(&mut self, color: Color, side: CastleSide, allowed: bool) {
        let flag = match (color, side) {
            (Color::White, CastleSide::Short) => &mut self.white_short,
            (Color::White, CastleSide::Long) => &mut self.white_long,
            (Color::Black, CastleSide::Short) => &mut self.black_short,
            (Color::Black, CastleSide::Long) => &mut self.black_long,
        };
        *flag = allowed;
    }

    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        self.set(color, side, false);
    }

    #[inline]
    pub fn revoke_all(&mut self, color: Color) {
        self.revoke(color, CastleSide::Short);
        self.revoke(color, CastleSide::Long);
    }

    /// Revokes the right tied to a rook corner when `square` is one.
    pub fn revoke_corner(&mut self, square: Square) {
        for color in [Color::White, Color::Black] {
            if square.row != color.back_row() {
                continue;
            }
            for side in CastleSide::BOTH {
                if square.col == side.rook_home_col() {
                    self.revoke(color, side);
                }
            }
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}
