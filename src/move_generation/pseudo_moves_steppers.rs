//! Knight and king pseudo-legal moves: one-step walks.
//!
//! Castling is not generated here; see `castling`.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::{
    walk_directions, ALL_DIRECTIONS, KNIGHT_OFFSETS, STEP_REACH,
};
use crate::moves::chess_move::Move;

pub fn generate_knight_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    walk_directions(position, from, color, &KNIGHT_OFFSETS, STEP_REACH, out);
}

/// Queen directions capped at one step.
pub fn generate_king_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    walk_directions(position, from, color, &ALL_DIRECTIONS, STEP_REACH, out);
}
