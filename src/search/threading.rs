//! Root-level parallel search on an owned worker pool.
//!
//! The root's legal moves are cut into contiguous chunks, one per worker at
//! most, and every chunk runs the sequential alpha-beta loop with its own
//! copy of the window. All chunks are launched before any is joined; results
//! come back in chunk order and are reduced with the node's max/min rule, so
//! the earliest best move wins as in the sequential search.

use log::{debug, info, trace};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardScorer, Score};
use crate::search::minimax::{is_maximizing, search_moves, MinmaxValue};

/// Logical cores reserved for the caller and the rest of the system.
const RESERVED_CORES: usize = 2;

/// `available_parallelism - 2`, at least 1.
pub fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .saturating_sub(RESERVED_CORES)
        .max(1)
}

/// Contiguous, ceil-sized chunks; never more than `workers`, never empty.
pub fn split_root_moves(moves: &[Move], workers: usize) -> Vec<&[Move]> {
    if moves.is_empty() {
        return Vec::new();
    }
    let chunk_size = moves.len().div_ceil(workers.max(1));
    moves.chunks(chunk_size).collect()
}

#[derive(Debug)]
pub struct SearchPool {
    pool: ThreadPool,
    workers: usize,
}

impl SearchPool {
    pub fn new(workers: usize) -> ChessResult<Self> {
        let workers = workers.max(1);
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("search-worker-{index}"))
            .build()
            .map_err(|err| ChessError::WorkerPool(err.to_string()))?;
        info!("search pool ready with {workers} worker(s)");
        Ok(Self { pool, workers })
    }

    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Searches the root `moves` of `position` across the pool.
    pub fn search_root<S: BoardScorer + ?Sized>(
        &self,
        position: &Position,
        moves: &[Move],
        depth: u8,
        alpha: Score,
        beta: Score,
        scorer: &S,
    ) -> MinmaxValue {
        let maximizing = is_maximizing(position);
        let chunks = split_root_moves(moves, self.workers);

        let results: Vec<MinmaxValue> = self.pool.install(|| {
            chunks
                .par_iter()
                .map(|chunk| search_moves(position, chunk, depth, alpha, beta, scorer))
                .collect()
        });

        let mut best = MinmaxValue::worst_for(maximizing);
        for (index, result) in results.into_iter().enumerate() {
            trace!(
                "chunk {index}: value {} move {:?}",
                result.value,
                result.best_move.map(|m| m.to_string())
            );
            if result.best_move.is_some() && best.improved_by(result.value, maximizing) {
                best = result;
            }
        }

        debug!(
            "root search depth {depth}: {} moves in {} chunks -> {} ({:?})",
            moves.len(),
            chunks.len(),
            best.value,
            best.best_move.map(|m| m.to_string())
        );
        best
    }
}
