//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Scores are always from white's point of view: positive favours white.
//! Search delegates static scoring to `BoardScorer`, so alternate heuristics
//! can be swapped without altering search code.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;

pub type Score = f32;

/// Base magnitude of a checkmate score; the remaining depth is added so
/// quicker mates rank higher.
pub const MATE_SCORE: Score = 100_000.0;

/// Piece-square tables are scaled down by this factor before being added.
const SQUARE_SCORE_SCALE: Score = 0.1;

pub trait BoardScorer: Send + Sync {
    /// Score from white's perspective.
    fn score(&self, position: &Position) -> Score;
}

/// Material plus piece-square bonus; what `Position::evaluate` uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    #[inline]
    fn score(&self, position: &Position) -> Score {
        position.material()
    }
}

/// Material plus a weighted raw-move count difference.
#[derive(Debug, Clone, Copy)]
pub struct MaterialMobilityScorer {
    pub mobility_weight: Score,
}

impl Default for MaterialMobilityScorer {
    fn default() -> Self {
        Self {
            mobility_weight: 0.1,
        }
    }
}

impl BoardScorer for MaterialMobilityScorer {
    fn score(&self, position: &Position) -> Score {
        position.material() + self.mobility_weight * position.mobility()
    }
}

#[inline]
pub const fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => 1.0,
        PieceKind::Knight => 3.0,
        PieceKind::Bishop => 3.0,
        PieceKind::Rook => 5.0,
        PieceKind::Queen => 9.0,
        PieceKind::King => 90.0,
    }
}

/// Signed piece-square bonus. Tables are laid out for white with row 0 on
/// rank 8; black reads them rotated half a turn.
pub fn square_score(square: Square, piece: Piece) -> Score {
    let (row, col, sign) = match piece.color {
        Color::White => (square.row as usize, square.col as usize, 1.0),
        Color::Black => (7 - square.row as usize, 7 - square.col as usize, -1.0),
    };
    let table = match piece.kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    };
    table[row][col] * sign * SQUARE_SCORE_SCALE
}

impl Position {
    /// Signed material and piece-square sum over the board.
    pub fn material(&self) -> Score {
        let mut result = 0.0;
        for square in Square::all() {
            if let Some(piece) = self.piece_at(square) {
                let value = match piece.color {
                    Color::White => piece_value(piece.kind),
                    Color::Black => -piece_value(piece.kind),
                };
                result += value + square_score(square, piece);
            }
        }
        result
    }

    /// White raw move count minus black raw move count.
    pub fn mobility(&self) -> Score {
        let white = self.get_all_raw_moves(Color::White).len() as Score;
        let black = self.get_all_raw_moves(Color::Black).len() as Score;
        white - black
    }

    #[inline]
    pub fn evaluate(&self) -> Score {
        MaterialScorer.score(self)
    }

    /// Score of a node without legal moves: a mate scores against the side
    /// to move, anything else is a stalemate worth 0.
    pub fn score_end_result(&self, depth: u8) -> Score {
        let mover = self.side_to_move;
        if !self.is_king_in_check(mover) {
            return 0.0;
        }
        let magnitude = MATE_SCORE + Score::from(depth);
        match mover {
            Color::White => -magnitude,
            Color::Black => magnitude,
        }
    }
}

#[rustfmt::skip]
const PAWN_TABLE: [[Score; 8]; 8] = [
    [0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, 0.0],
    [5.0,  5.0,  5.0,  5.0,  5.0,  5.0,  5.0, 5.0],
    [1.0,  1.0,  2.0,  3.0,  3.0,  2.0,  1.0, 1.0],
    [0.5,  0.5,  1.0,  2.5,  2.5,  1.0,  0.5, 0.5],
    [0.0,  0.0,  0.0,  2.0,  2.0,  0.0,  0.0, 0.0],
    [0.5, -0.5, -1.0,  0.0,  0.0, -1.0, -0.5, 0.5],
    [0.5,  1.0,  1.0, -2.0, -2.0,  1.0,  1.0, 0.5],
    [0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, 0.0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: [[Score; 8]; 8] = [
    [-5.0, -4.0, -3.0, -3.0, -3.0, -3.0, -4.0, -5.0],
    [-4.0, -2.0,  0.0,  0.0,  0.0,  0.0, -2.0, -4.0],
    [-3.0,  0.0,  1.0,  1.5,  1.5,  1.0,  0.0, -3.0],
    [-3.0,  0.5,  1.5,  2.0,  2.0,  1.5,  0.5, -3.0],
    [-3.0,  0.0,  1.5,  2.0,  2.0,  1.5,  0.0, -3.0],
    [-3.0,  0.5,  1.0,  1.5,  1.5,  1.0,  0.5, -3.0],
    [-4.0, -2.0,  0.0,  0.5,  0.5,  0.0, -2.0, -4.0],
    [-5.0, -4.0, -3.0, -3.0, -3.0, -3.0, -4.0, -5.0],
];

#[rustfmt::skip]
const BISHOP_TABLE: [[Score; 8]; 8] = [
    [-2.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -2.0],
    [-1.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -1.0],
    [-1.0,  0.0,  0.5,  1.0,  1.0,  0.5,  0.0, -1.0],
    [-1.0,  0.5,  0.5,  1.0,  1.0,  0.5,  0.5, -1.0],
    [-1.0,  0.0,  1.0,  1.0,  1.0,  1.0,  0.0, -1.0],
    [-1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0, -1.0],
    [-1.0,  0.5,  0.0,  0.0,  0.0,  0.0,  0.5, -1.0],
    [-2.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -2.0],
];

#[rustfmt::skip]
const ROOK_TABLE: [[Score; 8]; 8] = [
    [ 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,  0.0],
    [ 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,  0.5],
    [-0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5],
    [-0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5],
    [-0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5],
    [-0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5],
    [-0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5],
    [ 0.0, 0.0, 0.0, 0.5, 0.5, 0.0, 0.0,  0.0],
];

#[rustfmt::skip]
const QUEEN_TABLE: [[Score; 8]; 8] = [
    [-2.0, -1.0, -1.0, -0.5, -0.5, -1.0, -1.0, -2.0],
    [-1.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -1.0],
    [-1.0,  0.0,  0.5,  0.5,  0.5,  0.5,  0.0, -1.0],
    [-0.5,  0.0,  0.5,  0.5,  0.5,  0.5,  0.0, -0.5],
    [ 0.0,  0.0,  0.5,  0.5,  0.5,  0.5,  0.0, -0.5],
    [-1.0,  0.5,  0.5,  0.5,  0.5,  0.5,  0.0, -1.0],
    [-1.0,  0.0,  0.5,  0.0,  0.0,  0.0,  0.0, -1.0],
    [-2.0, -1.0, -1.0, -0.5, -0.5, -1.0, -1.0, -2.0],
];

#[rustfmt::skip]
const KING_TABLE: [[Score; 8]; 8] = [
    [-3.0, -4.0, -4.0, -5.0, -5.0, -4.0, -4.0, -3.0],
    [-3.0, -4.0, -4.0, -5.0, -5.0, -4.0, -4.0, -3.0],
    [-3.0, -4.0, -4.0, -5.0, -5.0, -4.0, -4.0, -3.0],
    [-3.0, -4.0, -4.0, -5.0,  5.0, -4.0, -4.0, -3.0],
    [-2.0, -3.0, -3.0, -4.0, -4.0, -3.0, -3.0, -2.0],
    [-1.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -1.0],
    [ 2.0,  2.0,  0.0,  0.0,  0.0,  0.0,  2.0,  2.0],
    [ 2.0,  3.0,  1.0,  0.0,  0.0,  1.0,  3.0,  2.0],
];
