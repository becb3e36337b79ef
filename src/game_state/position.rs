//! Mailbox position: board, side to move, castling flags and en-passant record.
//!
//! `Position` is cheap to clone (a fixed 8×8 array plus a few flags), and both
//! the legality filter and the search rely on that: every hypothetical move is
//! tried on an owned copy.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{
    CastleSide, CastlingRights, KING_HOME_COL, STARTING_BOARD, STARTING_POSITION_FEN,
};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    /// Per color, the file of that color's pawn that advanced two squares on
    /// the previous ply. At most one entry is set.
    pub(crate) en_passant_files: [Option<u8>; 2],
}

/// What `apply_move_raw` changed besides the moved piece itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AppliedMove {
    pub moved: Piece,
    pub captured: Option<(Square, Piece)>,
    pub rook_relocation: Option<(Square, Square)>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Standard starting position, white to move.
    pub fn new() -> Self {
        Self {
            board: STARTING_BOARD,
            side_to_move: Color::White,
            castling_rights: CastlingRights::ALL,
            en_passant_files: [None, None],
        }
    }

    /// Empty board with no castling rights.
    pub fn empty(side_to_move: Color) -> Self {
        Self {
            board: [[None; 8]; 8],
            side_to_move,
            castling_rights: CastlingRights::NONE,
            en_passant_files: [None, None],
        }
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    pub fn starting_fen() -> &'static str {
        STARTING_POSITION_FEN
    }

    /// Removes every piece; flags are left untouched.
    pub fn clear(&mut self) {
        self.board = [[None; 8]; 8];
    }

    #[inline]
    pub fn get_moving_player(&self) -> Color {
        self.side_to_move
    }

    /// Snapshot of the grid.
    #[inline]
    pub fn get_board(&self) -> Board {
        self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.row as usize][square.col as usize] = piece;
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// File of `color`'s pawn that just advanced two squares, if any.
    #[inline]
    pub fn en_passant_file(&self, color: Color) -> Option<u8> {
        self.en_passant_files[color.index()]
    }

    /// First square holding `piece`, scanning from a8.
    pub fn find_piece(&self, piece: Piece) -> Option<Square> {
        Square::all().find(|sq| self.piece_at(*sq) == Some(piece))
    }

    /// Flips the side to move.
    #[inline]
    pub fn end_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Relocates the piece on `m.start` to `m.end` and applies the rule side
    /// effects (rook hop when castling, rights revocation, en-passant removal
    /// and record refresh). Legality, promotion and the turn flip are left to
    /// the caller.
    pub fn move_piece(&mut self, m: &Move) -> ChessResult<()> {
        self.apply_move_raw(m).map(|_| ())
    }

    pub(crate) fn apply_move_raw(&mut self, m: &Move) -> ChessResult<AppliedMove> {
        let moved = self
            .piece_at(m.start)
            .ok_or(ChessError::EmptySquare(m.start))?;

        let mut captured = self.piece_at(m.end).map(|piece| (m.end, piece));
        let mut rook_relocation = None;

        self.set_piece(m.start, None);

        if let Some(side) = castle_side(moved, m) {
            let row = moved.color.back_row();
            let rook_from = Square {
                row,
                col: side.rook_home_col(),
            };
            let rook_to = Square {
                row,
                col: side.rook_target_col(),
            };
            let rook = self.piece_at(rook_from);
            self.set_piece(rook_from, None);
            self.set_piece(rook_to, rook);
            rook_relocation = Some((rook_from, rook_to));
        }

        if moved.kind == PieceKind::King {
            self.castling_rights.revoke_all(moved.color);
        }
        self.castling_rights.revoke_corner(m.start);
        self.castling_rights.revoke_corner(m.end);

        if moved.kind == PieceKind::Pawn {
            if let Some(passed) = self.en_passant_victim(moved.color, m) {
                captured = self.piece_at(passed).map(|piece| (passed, piece));
                self.set_piece(passed, None);
            }
        }

        let is_double_step = moved.kind == PieceKind::Pawn && m.start.row.abs_diff(m.end.row) == 2;
        self.en_passant_files = [None, None];
        if is_double_step {
            self.en_passant_files[moved.color.index()] = Some(m.end.col);
        }

        self.set_piece(m.end, Some(moved));

        Ok(AppliedMove {
            moved,
            captured,
            rook_relocation,
        })
    }

    /// Square of the pawn removed when a `mover` pawn plays `m` en passant.
    fn en_passant_victim(&self, mover: Color, m: &Move) -> Option<Square> {
        let file = self.en_passant_file(mover.opposite())?;
        let landing_row = en_passant_landing_row(mover);
        if m.end.col != file || m.end.row != landing_row || m.start.col == m.end.col {
            return None;
        }
        m.end.offset(-mover.forward(), 0)
    }

    /// True iff the piece now on `m.end` is a pawn on its promotion row.
    pub fn can_promote(&self, m: &Move) -> bool {
        matches!(
            self.piece_at(m.end),
            Some(piece) if piece.kind == PieceKind::Pawn && m.end.row == piece.color.promotion_row()
        )
    }

    /// Overwrites `square` with `piece`; no validation.
    #[inline]
    pub fn promote(&mut self, square: Square, piece: Piece) {
        self.set_piece(square, Some(piece));
    }
}

/// Row a `mover` pawn lands on when capturing en passant.
#[inline]
pub(crate) const fn en_passant_landing_row(mover: Color) -> u8 {
    match mover {
        Color::White => 2,
        Color::Black => 5,
    }
}

/// Row a `mover` pawn must stand on to capture en passant.
#[inline]
pub(crate) const fn en_passant_capturing_row(mover: Color) -> u8 {
    match mover {
        Color::White => 3,
        Color::Black => 4,
    }
}

fn castle_side(moved: Piece, m: &Move) -> Option<CastleSide> {
    let row = moved.color.back_row();
    if moved.kind != PieceKind::King
        || m.start.row != row
        || m.start.col != KING_HOME_COL
        || m.end.row != row
        || m.start.col.abs_diff(m.end.col) != 2
    {
        return None;
    }
    CastleSide::from_king_target_col(m.end.col)
}
