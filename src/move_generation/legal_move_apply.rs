//! Playing a whole move: relocation, promotion and the turn flip.
//!
//! `play` is the copy-and-apply path used by search. `make_move` and
//! `unmake_move` are its reversible twin, used by perft.

use crate::errors::ChessResult;
use crate::game_state::chess_types::{Color, Piece};
use crate::game_state::position::Position;
use crate::game_state::undo_state::UndoState;
use crate::moves::chess_move::Move;

impl Position {
    /// Applies `m`, promotes if it carries a promotion, and ends the turn.
    pub fn play(&mut self, m: &Move) -> ChessResult<()> {
        let mover = self.side_to_move;
        self.move_piece(m)?;
        self.apply_promotion(m, mover);
        self.end_turn();
        Ok(())
    }

    /// Same effect as `play`, returning what `unmake_move` needs.
    pub fn make_move(&mut self, m: &Move) -> ChessResult<UndoState> {
        let prev_castling_rights = self.castling_rights;
        let prev_en_passant_files = self.en_passant_files;
        let prev_side_to_move = self.side_to_move;

        let applied = self.apply_move_raw(m)?;
        self.apply_promotion(m, prev_side_to_move);
        self.end_turn();

        Ok(UndoState {
            mv: *m,
            moved_piece: applied.moved,
            captured: applied.captured,
            rook_relocation: applied.rook_relocation,
            prev_castling_rights,
            prev_en_passant_files,
            prev_side_to_move,
        })
    }

    pub fn unmake_move(&mut self, undo: UndoState) {
        let m = undo.mv;

        self.set_piece(m.end, None);
        self.set_piece(m.start, Some(undo.moved_piece));

        if let Some((rook_from, rook_to)) = undo.rook_relocation {
            let rook = self.piece_at(rook_to);
            self.set_piece(rook_to, None);
            self.set_piece(rook_from, rook);
        }

        if let Some((square, piece)) = undo.captured {
            self.set_piece(square, Some(piece));
        }

        self.castling_rights = undo.prev_castling_rights;
        self.en_passant_files = undo.prev_en_passant_files;
        self.side_to_move = undo.prev_side_to_move;
    }

    fn apply_promotion(&mut self, m: &Move, mover: Color) {
        if let Some(kind) = m.promotion {
            if self.can_promote(m) {
                self.promote(m.end, Piece::new(kind, mover));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::game_state::position::Position;
    use crate::moves::chess_move::Move;
    use crate::utils::algebraic::algebraic_to_square;

    fn mv(coords: &str) -> Move {
        coords.parse().expect("move should parse")
    }

    #[test]
    fn play_promotes_and_flips_turn() {
        let mut position = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        position.play(&mv("a7a8n")).expect("promotion should apply");
        assert_eq!(
            position.piece_at(algebraic_to_square("a8").expect("a8")),
            Some(Piece::new(PieceKind::Knight, Color::White))
        );
        assert_eq!(position.get_moving_player(), Color::Black);
    }

    #[test]
    fn make_unmake_round_trips_special_moves() {
        let fixtures = [
            ("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1c1"),
            ("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", "e8g8"),
            ("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1", "e5d6"),
            ("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1", "a7b8q"),
            ("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "a1a8"),
        ];
        for (fen, coords) in fixtures {
            let original = Position::from_fen(fen).expect("FEN should parse");
            let mut position = original.clone();

            let mut played = original.clone();
            played.play(&mv(coords)).expect("move should apply");

            let undo = position.make_move(&mv(coords)).expect("move should apply");
            assert_eq!(position, played, "make_move differs from play for {coords}");
            position.unmake_move(undo);
            assert_eq!(position, original, "unmake_move did not restore {fen}");
        }
    }

    #[test]
    fn make_unmake_round_trips_random_games() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut position = Position::new();
        let mut history = Vec::new();
        let mut snapshots = Vec::new();

        for _ in 0..80 {
            let moves = position.generate_legal_moves(true);
            if moves.is_empty() {
                break;
            }
            let m = moves[rng.random_range(0..moves.len())];
            snapshots.push(position.clone());
            history.push(position.make_move(&m).expect("legal move should apply"));
        }

        while let Some(undo) = history.pop() {
            position.unmake_move(undo);
            assert_eq!(Some(&position), snapshots.last());
            snapshots.pop();
        }
        assert_eq!(position, Position::new());
    }
}
