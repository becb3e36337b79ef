//! Direction tables and the ray-walking primitive shared by every piece.
//!
//! Sliders walk up to seven steps, knight and king exactly one. The king
//! reuses the queen's eight directions; the step cap is the only difference.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

/// `(d_row, d_col)` steps.
pub type Direction = (i8, i8);

pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [(-1, 1), (-1, -1), (1, -1), (1, 1)];

pub const ALL_DIRECTIONS: [Direction; 8] = [
    (-1, 1),
    (-1, -1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];

pub const SLIDER_REACH: u8 = 7;
pub const STEP_REACH: u8 = 1;

/// Walks each direction from `from` for at most `max_steps` squares.
///
/// Empty squares are added and the walk continues; an enemy piece is added
/// and ends the ray; a friendly piece ends the ray without a move.
pub fn walk_directions(
    position: &Position,
    from: Square,
    color: Color,
    directions: &[Direction],
    max_steps: u8,
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        for _ in 0..max_steps {
            let Some(next) = current.offset(d_row, d_col) else {
                break;
            };
            match position.piece_at(next) {
                None => {
                    out.push(Move::new(from, next));
                    current = next;
                }
                Some(piece) if piece.color != color => {
                    out.push(Move::new(from, next));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}
