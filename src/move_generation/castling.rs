//! Castling availability.
//!
//! Only the king's two-square move is produced here. The rook hop and the
//! rights bookkeeping happen in `Position::move_piece`.

use crate::game_state::chess_rules::{CastleSide, KING_HOME_COL};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

impl Position {
    /// Short castle first, then long.
    pub fn get_castlings(&self, color: Color) -> Vec<Move> {
        CastleSide::BOTH
            .into_iter()
            .filter(|side| self.can_castle(color, *side))
            .map(|side| {
                let row = color.back_row();
                Move::new(
                    Square {
                        row,
                        col: KING_HOME_COL,
                    },
                    Square {
                        row,
                        col: side.king_target_col(),
                    },
                )
            })
            .collect()
    }

    fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        if !self.castling_rights.get(color, side) {
            return false;
        }

        let row = color.back_row();
        let at = |col: u8| self.piece_at(Square { row, col });

        if at(KING_HOME_COL) != Some(Piece::new(PieceKind::King, color))
            || at(side.rook_home_col()) != Some(Piece::new(PieceKind::Rook, color))
        {
            return false;
        }

        if side.between_cols().iter().any(|&col| at(col).is_some()) {
            return false;
        }

        let enemy = color.opposite();
        !side
            .king_path_cols()
            .iter()
            .any(|&col| self.is_square_threatened(Square { row, col }, enemy))
    }
}
