//! Threat and check detection.
//!
//! A square is threatened by a color when one of its non-pawn pseudo-legal
//! moves lands there, or one of its pawns attacks it diagonally. Pawn pushes
//! never threaten.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::position::Position;
use crate::move_generation::pseudo_move_generator::generate_piece_moves;
use crate::move_generation::pseudo_moves_pawn::pawn_attack_squares;

impl Position {
    pub fn is_square_threatened(&self, square: Square, threatening: Color) -> bool {
        let mut scratch = Vec::with_capacity(32);
        for from in Square::all() {
            let Some(piece) = self.piece_at(from) else {
                continue;
            };
            if piece.color != threatening {
                continue;
            }

            if piece.kind == PieceKind::Pawn {
                if pawn_attack_squares(from, threatening).any(|target| target == square) {
                    return true;
                }
                continue;
            }

            scratch.clear();
            generate_piece_moves(self, from, piece, &mut scratch);
            if scratch.iter().any(|m| m.end == square) {
                return true;
            }
        }
        false
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.find_piece(Piece::new(PieceKind::King, color))
    }

    /// False when `color` has no king on the board.
    pub fn is_king_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_threatened(king, color.opposite()))
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::Color;
    use crate::game_state::position::Position;
    use crate::utils::algebraic::algebraic_to_square;

    fn threatened(fen: &str, coords: &str, by: Color) -> bool {
        let position = Position::from_fen(fen).expect("FEN should parse");
        position.is_square_threatened(algebraic_to_square(coords).expect("square"), by)
    }

    #[test]
    fn pawns_threaten_diagonals_not_pushes() {
        let fen = "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1";
        assert!(threatened(fen, "d3", Color::White));
        assert!(threatened(fen, "f3", Color::White));
        assert!(!threatened(fen, "e3", Color::White));
        assert!(!threatened(fen, "e4", Color::White));
    }

    #[test]
    fn sliders_are_blocked_by_pieces() {
        let fen = "4k3/8/8/8/8/8/4P3/4R1K1 w - - 0 1";
        assert!(!threatened(fen, "e2", Color::White));
        assert!(!threatened(fen, "e5", Color::White));
        assert!(threatened(fen, "a1", Color::White));
    }

    #[test]
    fn king_in_check_detection() {
        let checked = Position::from_fen("4k3/8/8/8/8/8/8/4K2r w - - 0 1").expect("FEN should parse");
        assert!(checked.is_king_in_check(Color::White));
        assert!(!checked.is_king_in_check(Color::Black));

        let kingless = Position::from_fen("8/8/8/8/8/8/8/7r w - - 0 1").expect("FEN should parse");
        assert!(!kingless.is_king_in_check(Color::White));
    }
}
