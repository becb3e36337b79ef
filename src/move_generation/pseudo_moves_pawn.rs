//! Pawn pseudo-legal moves.
//!
//! Pushes never capture, diagonals only capture, and en passant is offered
//! from the capturing row next to the opponent's recorded double-step file.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::{en_passant_capturing_row, en_passant_landing_row, Position};
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let forward = color.forward();

    let reach = if from.row == color.pawn_row() { 2 } else { 1 };
    let mut current = from;
    for _ in 0..reach {
        let Some(next) = current.offset(forward, 0) else {
            break;
        };
        if position.piece_at(next).is_some() {
            break;
        }
        out.push(Move::new(from, next));
        current = next;
    }

    for target in pawn_attack_squares(from, color) {
        if matches!(position.piece_at(target), Some(piece) if piece.color != color) {
            out.push(Move::new(from, target));
        }
    }

    if from.row == en_passant_capturing_row(color) {
        if let Some(file) = position.en_passant_file(color.opposite()) {
            if from.col.abs_diff(file) == 1 {
                if let Some(landing) = Square::new(en_passant_landing_row(color), file) {
                    out.push(Move::new(from, landing));
                }
            }
        }
    }
}

/// The two forward diagonals, whatever occupies them.
pub fn pawn_attack_squares(from: Square, color: Color) -> impl Iterator<Item = Square> {
    let forward = color.forward();
    [1, -1]
        .into_iter()
        .filter_map(move |d_col| from.offset(forward, d_col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn pawn_targets(fen: &str, coords: &str) -> Vec<String> {
        let position = Position::from_fen(fen).expect("FEN should parse");
        let from = algebraic_to_square(coords).expect("square");
        let color = position.piece_at(from).expect("pawn expected").color;
        let mut out = Vec::new();
        generate_pawn_moves(&position, from, color, &mut out);
        let mut targets: Vec<String> = out.iter().map(|m| m.end.to_string()).collect();
        targets.sort();
        targets
    }

    #[test]
    fn double_step_only_from_start_row_and_through_empty_square() {
        assert_eq!(pawn_targets("8/8/8/8/8/8/4P3/8 w - - 0 1", "e2"), ["e3", "e4"]);
        assert_eq!(pawn_targets("8/8/8/8/8/4n3/4P3/8 w - - 0 1", "e2"), Vec::<String>::new());
        assert_eq!(pawn_targets("8/8/8/8/4n3/8/4P3/8 w - - 0 1", "e2"), ["e3"]);
        assert_eq!(pawn_targets("8/8/8/8/8/4P3/8/8 w - - 0 1", "e3"), ["e4"]);
        assert_eq!(pawn_targets("8/4p3/8/8/8/8/8/8 b - - 0 1", "e7"), ["e5", "e6"]);
    }

    #[test]
    fn diagonals_need_an_enemy() {
        assert_eq!(
            pawn_targets("8/8/8/3n1N2/4P3/8/8/8 w - - 0 1", "e4"),
            ["d5", "e5"]
        );
    }

    #[test]
    fn en_passant_offered_from_adjacent_file_on_capturing_row() {
        assert_eq!(
            pawn_targets("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1", "e5"),
            ["d6", "e6"]
        );
        // Not adjacent.
        assert_eq!(pawn_targets("4k3/8/8/p3P3/8/8/8/4K3 w - a6 0 1", "e5"), ["e6"]);
        // Black capturing a white double step.
        assert_eq!(
            pawn_targets("4k3/8/8/8/5pP1/8/8/4K3 b - g3 0 1", "f4"),
            ["f3", "g3"]
        );
    }

    #[test]
    fn attack_squares_respect_board_edges() {
        let a2 = algebraic_to_square("a2").expect("a2");
        let attacks: Vec<Square> = pawn_attack_squares(a2, Color::White).collect();
        assert_eq!(attacks, vec![algebraic_to_square("b3").expect("b3")]);
    }
}
