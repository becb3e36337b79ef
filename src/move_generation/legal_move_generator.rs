//! Full legal move generation pipeline.
//!
//! Pseudo-legal moves for the side to move plus castling, each tried on a
//! cloned position and kept only when the mover's king is not attacked
//! afterwards.

use crate::game_state::chess_types::PROMOTION_KINDS;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

impl Position {
    /// Legal moves for the side to move, in generation order.
    ///
    /// With `expand_promotions`, a pawn reaching its last row yields four
    /// moves (queen, rook, bishop, knight). Without it a single move is
    /// returned and the caller asks `can_promote` after `move_piece`.
    pub fn generate_legal_moves(&self, expand_promotions: bool) -> Vec<Move> {
        let mover = self.side_to_move;
        let mut candidates = self.get_all_raw_moves(mover);
        candidates.extend(self.get_castlings(mover));

        let mut legal = Vec::with_capacity(candidates.len());
        for m in candidates {
            let mut next = self.clone();
            if next.move_piece(&m).is_err() {
                continue;
            }

            // Illegal if own king is in check after move.
            if next.is_king_in_check(mover) {
                continue;
            }

            if expand_promotions && next.can_promote(&m) {
                legal.extend(
                    PROMOTION_KINDS
                        .into_iter()
                        .map(|kind| m.with_promotion(kind)),
                );
            } else {
                legal.push(m);
            }
        }
        legal
    }

    /// True when the side to move has no legal move (mate or stalemate).
    pub fn is_terminal(&self) -> bool {
        self.generate_legal_moves(false).is_empty()
    }
}
