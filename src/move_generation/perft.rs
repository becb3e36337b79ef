//! Move-path enumeration for validating move generation.
//!
//! Walks the legal move tree with `make_move` / `unmake_move` on a single
//! scratch position; promotions are expanded so counts match published
//! reference tables.

use crate::errors::ChessResult;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Number of leaf nodes `depth` plies below `position`.
pub fn perft(position: &Position, depth: u8) -> ChessResult<u64> {
    let mut scratch = position.clone();
    perft_nodes(&mut scratch, depth)
}

/// Leaf count below each root move, in generation order.
pub fn perft_divide(position: &Position, depth: u8) -> ChessResult<Vec<(Move, u64)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    let mut scratch = position.clone();
    let mut divided = Vec::new();
    for m in position.generate_legal_moves(true) {
        let undo = scratch.make_move(&m)?;
        let nodes = perft_nodes(&mut scratch, depth - 1)?;
        scratch.unmake_move(undo);
        divided.push((m, nodes));
    }
    Ok(divided)
}

/// Leaf count plus per-leaf move statistics.
pub fn perft_counts(position: &Position, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut scratch = position.clone();
    let mut total = PerftCounts::default();
    perft_counts_recurse(&mut scratch, depth, &mut total)?;
    Ok(total)
}

fn perft_nodes(position: &mut Position, depth: u8) -> ChessResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = position.generate_legal_moves(true);
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0;
    for m in moves {
        let undo = position.make_move(&m)?;
        nodes += perft_nodes(position, depth - 1)?;
        position.unmake_move(undo);
    }
    Ok(nodes)
}

fn perft_counts_recurse(position: &mut Position, depth: u8, counts: &mut PerftCounts) -> ChessResult<()> {
    for m in position.generate_legal_moves(true) {
        let undo = position.make_move(&m)?;

        if depth > 1 {
            perft_counts_recurse(position, depth - 1, counts)?;
        } else {
            let mut leaf = PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            };
            if let Some((square, _)) = undo.captured {
                leaf.captures += 1;
                if square != m.end {
                    leaf.en_passant += 1;
                }
            }
            if undo.rook_relocation.is_some() {
                leaf.castles += 1;
            }
            if m.promotion.is_some() {
                leaf.promotions += 1;
            }
            if position.is_king_in_check(position.get_moving_player()) {
                leaf.checks += 1;
                if position.is_terminal() {
                    leaf.checkmates += 1;
                }
            }
            counts.merge(leaf);
        }

        position.unmake_move(undo);
    }
    Ok(())
}
