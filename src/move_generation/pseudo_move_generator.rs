//! Whole-side pseudo-legal generation.
//!
//! Scans the board row by row from a8 and dispatches each piece of the
//! requested color to its generator, so move order is deterministic.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::position::Position;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_sliders::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};
use crate::move_generation::pseudo_moves_steppers::{generate_king_moves, generate_knight_moves};
use crate::moves::chess_move::Move;

pub fn generate_piece_moves(position: &Position, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let color = piece.color;
    match piece.kind {
        PieceKind::Rook => generate_rook_moves(position, from, color, out),
        PieceKind::Knight => generate_knight_moves(position, from, color, out),
        PieceKind::Bishop => generate_bishop_moves(position, from, color, out),
        PieceKind::Queen => generate_queen_moves(position, from, color, out),
        PieceKind::King => generate_king_moves(position, from, color, out),
        PieceKind::Pawn => generate_pawn_moves(position, from, color, out),
    }
}

impl Position {
    /// Every pseudo-legal move of `color`, castling excluded.
    pub fn get_all_raw_moves(&self, color: Color) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        for from in Square::all() {
            match self.piece_at(from) {
                Some(piece) if piece.color == color => {
                    generate_piece_moves(self, from, piece, &mut out)
                }
                _ => {}
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_has_twenty_raw_moves_per_side() {
        let position = Position::new();
        assert_eq!(position.get_all_raw_moves(Color::White).len(), 20);
        assert_eq!(position.get_all_raw_moves(Color::Black).len(), 20);
    }

    #[test]
    fn raw_moves_ignore_king_safety() {
        // The e2 rook is pinned against the king, yet it may still slide sideways.
        let position =
            Position::from_fen("4r1k1/8/8/8/8/8/4R3/4K3 w - - 0 1").expect("FEN should parse");
        let sideways = position
            .get_all_raw_moves(Color::White)
            .into_iter()
            .filter(|m| m.start.to_string() == "e2" && m.end.row == m.start.row)
            .count();
        assert_eq!(sideways, 7);
    }
}
