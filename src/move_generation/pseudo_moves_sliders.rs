//! Rook, bishop and queen pseudo-legal moves.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::{
    walk_directions, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS, SLIDER_REACH,
};
use crate::moves::chess_move::Move;

pub fn generate_rook_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    walk_directions(position, from, color, &ORTHOGONAL_DIRECTIONS, SLIDER_REACH, out);
}

pub fn generate_bishop_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    walk_directions(position, from, color, &DIAGONAL_DIRECTIONS, SLIDER_REACH, out);
}

/// Bishop rays followed by rook rays.
pub fn generate_queen_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    generate_bishop_moves(position, from, color, out);
    generate_rook_moves(position, from, color, out);
}
