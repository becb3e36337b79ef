//! Depth-limited minimax and alpha-beta over cloned positions.
//!
//! White maximizes and black minimizes. A node with no legal moves is scored
//! by `score_end_result` before the depth limit is looked at, so a mate found
//! on the horizon is still reported as a mate.

use log::warn;

use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardScorer, Score};

pub const SCORE_MIN: Score = Score::MIN;
pub const SCORE_MAX: Score = Score::MAX;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinmaxValue {
    pub value: Score,
    /// `None` at leaves.
    pub best_move: Option<Move>,
}

impl MinmaxValue {
    #[inline]
    pub const fn leaf(value: Score) -> Self {
        Self {
            value,
            best_move: None,
        }
    }

    /// Starting value for a node whose side maximizes or minimizes.
    #[inline]
    pub(crate) const fn worst_for(maximizing: bool) -> Self {
        Self::leaf(if maximizing { SCORE_MIN } else { SCORE_MAX })
    }

    /// True when `value` is strictly better than `self` for the node's side.
    #[inline]
    pub(crate) fn improved_by(&self, value: Score, maximizing: bool) -> bool {
        if maximizing {
            value > self.value
        } else {
            value < self.value
        }
    }
}

/// A node is a leaf when it has no legal moves or no remaining depth.
pub(crate) enum Node {
    Leaf(MinmaxValue),
    Internal(Vec<Move>),
}

pub(crate) fn classify<S: BoardScorer + ?Sized>(position: &Position, depth: u8, scorer: &S) -> Node {
    let moves = position.generate_legal_moves(true);
    if moves.is_empty() {
        return Node::Leaf(MinmaxValue::leaf(position.score_end_result(depth)));
    }
    if depth == 0 {
        return Node::Leaf(MinmaxValue::leaf(scorer.score(position)));
    }
    Node::Internal(moves)
}

#[inline]
pub(crate) fn is_maximizing(position: &Position) -> bool {
    position.get_moving_player() == Color::White
}

fn child_position(position: &Position, m: &Move) -> Option<Position> {
    let mut child = position.clone();
    match child.play(m) {
        Ok(()) => Some(child),
        Err(err) => {
            warn!("skipping unplayable move {m}: {err}");
            None
        }
    }
}

/// Plain minimax; the first strictly better move wins ties.
pub fn minmax<S: BoardScorer + ?Sized>(position: &Position, depth: u8, scorer: &S) -> MinmaxValue {
    let moves = match classify(position, depth, scorer) {
        Node::Leaf(value) => return value,
        Node::Internal(moves) => moves,
    };

    let maximizing = is_maximizing(position);
    let mut best = MinmaxValue::worst_for(maximizing);
    for m in moves {
        let Some(child) = child_position(position, &m) else {
            continue;
        };
        let value = minmax(&child, depth - 1, scorer).value;
        if best.improved_by(value, maximizing) {
            best = MinmaxValue {
                value,
                best_move: Some(m),
            };
        }
    }
    best
}

/// Fail-soft alpha-beta in generation order.
pub fn alpha_beta<S: BoardScorer + ?Sized>(
    position: &Position,
    depth: u8,
    alpha: Score,
    beta: Score,
    scorer: &S,
) -> MinmaxValue {
    match classify(position, depth, scorer) {
        Node::Leaf(value) => value,
        Node::Internal(moves) => search_moves(position, &moves, depth, alpha, beta, scorer),
    }
}

/// Alpha-beta loop over an explicit move list of an internal node. Root
/// chunks enter here, each with its own copy of the window.
pub(crate) fn search_moves<S: BoardScorer + ?Sized>(
    position: &Position,
    moves: &[Move],
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    scorer: &S,
) -> MinmaxValue {
    let maximizing = is_maximizing(position);
    let child_depth = depth.saturating_sub(1);
    let mut best = MinmaxValue::worst_for(maximizing);

    for m in moves {
        let Some(child) = child_position(position, m) else {
            continue;
        };
        let value = alpha_beta(&child, child_depth, alpha, beta, scorer).value;

        if best.improved_by(value, maximizing) {
            best = MinmaxValue {
                value,
                best_move: Some(*m),
            };
        }
        if maximizing {
            alpha = alpha.max(value);
        } else {
            beta = beta.min(value);
        }
        if beta <= alpha {
            break;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::board_scoring::{MaterialScorer, MATE_SCORE};

    const FIXTURES: [&str; 4] = [
        crate::game_state::chess_rules::STARTING_POSITION_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "4k3/1P6/8/8/8/8/6p1/4K3 b - - 0 1",
    ];

    fn position(fen: &str) -> Position {
        Position::from_fen(fen).expect("FEN should parse")
    }

    #[test]
    fn depth_zero_returns_static_evaluation() {
        for fen in FIXTURES {
            let position = position(fen);
            let result = alpha_beta(&position, 0, SCORE_MIN, SCORE_MAX, &MaterialScorer);
            assert_eq!(result.value, position.evaluate());
            assert_eq!(result.best_move, None);
            assert_eq!(minmax(&position, 0, &MaterialScorer).value, position.evaluate());
        }
    }

    #[test]
    fn terminal_nodes_are_scored_before_the_depth_limit() {
        let mut mated = Position::new();
        for coords in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            let m: Move = coords.parse().expect("move should parse");
            mated.play(&m).expect("move should apply");
        }
        let result = alpha_beta(&mated, 0, SCORE_MIN, SCORE_MAX, &MaterialScorer);
        assert_eq!(result.value, -MATE_SCORE);
    }

    #[test]
    fn alpha_beta_matches_minimax() {
        for fen in FIXTURES {
            let position = position(fen);
            for depth in 1..=2 {
                let plain = minmax(&position, depth, &MaterialScorer);
                let pruned = alpha_beta(&position, depth, SCORE_MIN, SCORE_MAX, &MaterialScorer);
                assert_eq!(plain.value, pruned.value, "{fen} at depth {depth}");
                assert_eq!(plain.best_move, pruned.best_move, "{fen} at depth {depth}");
            }
        }
    }

    #[test]
    fn alpha_beta_matches_minimax_at_depth_three_from_start() {
        let start = Position::new();
        let plain = minmax(&start, 3, &MaterialScorer);
        let pruned = alpha_beta(&start, 3, SCORE_MIN, SCORE_MAX, &MaterialScorer);
        assert_eq!(plain.value, pruned.value);
    }

    #[test]
    fn finds_back_rank_mate_in_one() {
        let white = position("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        let result = alpha_beta(&white, 2, SCORE_MIN, SCORE_MAX, &MaterialScorer);
        assert_eq!(result.best_move.map(|m| m.to_string()).as_deref(), Some("a1a8"));
        assert_eq!(result.value, MATE_SCORE + 1.0);

        let black = position("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1");
        let result = minmax(&black, 2, &MaterialScorer);
        assert_eq!(result.best_move.map(|m| m.to_string()).as_deref(), Some("a8a1"));
        assert_eq!(result.value, -(MATE_SCORE + 1.0));
    }

    #[test]
    fn search_prefers_promoting_to_a_queen() {
        let position = position("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let result = alpha_beta(&position, 1, SCORE_MIN, SCORE_MAX, &MaterialScorer);
        assert_eq!(result.best_move.map(|m| m.to_string()).as_deref(), Some("a7a8q"));
    }
}
