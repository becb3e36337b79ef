//! Crate root module declarations for the mailbox chess engine.
//!
//! This file exposes all top-level subsystems (position state, move
//! generation, search, and notation helpers) so binaries, benches, and
//! external tooling can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
    pub mod undo_state;
}

pub mod moves {
    pub mod chess_move;
}

pub mod move_generation {
    pub mod castling;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod perft;
    pub mod pseudo_move_generator;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_sliders;
    pub mod pseudo_moves_steppers;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod searcher;
    pub mod threading;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
}

pub use errors::{ChessError, ChessResult};
pub use game_state::chess_types::{Board, Color, Piece, PieceKind, Square};
pub use game_state::position::Position;
pub use moves::chess_move::Move;
pub use search::searcher::{SearchConfig, Searcher};
