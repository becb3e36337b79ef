use crate::game_state::chess_rules::CastlingRights;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Single undo record for `make_move` / `unmake_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    /// The piece as it stood on `mv.start`, before any promotion.
    pub moved_piece: Piece,
    /// Captured piece and the square it was taken from (differs from
    /// `mv.end` for en passant).
    pub captured: Option<(Square, Piece)>,
    pub rook_relocation: Option<(Square, Square)>,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_files: [Option<u8>; 2],
    pub prev_side_to_move: Color,
}
