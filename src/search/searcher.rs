//! Search entry point: configuration, scorer and the owned worker pool.

use log::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::position::Position;
use crate::search::board_scoring::{BoardScorer, MaterialScorer, Score};
use crate::search::minimax::{self, classify, MinmaxValue, Node, SCORE_MAX, SCORE_MIN};
use crate::search::threading::{default_worker_count, SearchPool};

pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub threaded: bool,
    /// `None` sizes the pool from the machine.
    pub worker_threads: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            threaded: true,
            worker_threads: None,
        }
    }
}

impl SearchConfig {
    /// Sets `Depth`, `Threaded` or `Threads` by name. `Threads` 0 means auto.
    pub fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        let invalid = || ChessError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        };

        if name.eq_ignore_ascii_case("Depth") {
            self.depth = value.trim().parse::<u8>().map_err(|_| invalid())?;
            return Ok(());
        }
        if name.eq_ignore_ascii_case("Threaded") {
            let v = value.trim().to_ascii_lowercase();
            self.threaded = match v.as_str() {
                "true" | "1" | "yes" | "on" => true,
                "false" | "0" | "no" | "off" => false,
                _ => return Err(invalid()),
            };
            return Ok(());
        }
        if name.eq_ignore_ascii_case("Threads") {
            let parsed = value.trim().parse::<usize>().map_err(|_| invalid())?;
            self.worker_threads = (parsed > 0).then_some(parsed);
            return Ok(());
        }
        Err(invalid())
    }

    #[inline]
    pub fn worker_count(&self) -> usize {
        self.worker_threads.unwrap_or_else(default_worker_count).max(1)
    }
}

/// Owns the search configuration, the static scorer and, when threaded, the
/// worker pool. Separate searchers never share a pool.
#[derive(Debug)]
pub struct Searcher<S: BoardScorer = MaterialScorer> {
    config: SearchConfig,
    scorer: S,
    pool: Option<SearchPool>,
}

impl Searcher<MaterialScorer> {
    pub fn new(config: SearchConfig) -> ChessResult<Self> {
        Self::with_scorer(config, MaterialScorer)
    }
}

impl<S: BoardScorer> Searcher<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S) -> ChessResult<Self> {
        let pool = build_pool(&config)?;
        Ok(Self {
            config,
            scorer,
            pool,
        })
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[inline]
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Workers in the owned pool; 0 when searching sequentially.
    pub fn workers(&self) -> usize {
        self.pool.as_ref().map_or(0, SearchPool::workers)
    }

    /// Applies a named option and rebuilds the pool when its size or presence
    /// changes.
    pub fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        let mut next = self.config;
        next.set_option(name, value)?;
        let pool_changed =
            next.threaded != self.config.threaded || next.worker_count() != self.config.worker_count();
        if pool_changed {
            self.pool = build_pool(&next)?;
        }
        self.config = next;
        Ok(())
    }

    pub fn minmax(&self, position: &Position, depth: u8) -> MinmaxValue {
        minimax::minmax(position, depth, &self.scorer)
    }

    /// Alpha-beta from `position`. With `threaded` and a pool available the
    /// root moves are split across workers; otherwise the search is
    /// sequential.
    pub fn minmax_alphabeta(
        &self,
        position: &Position,
        depth: u8,
        alpha: Score,
        beta: Score,
        threaded: bool,
    ) -> MinmaxValue {
        match (&self.pool, threaded) {
            (Some(pool), true) => match classify(position, depth, &self.scorer) {
                Node::Leaf(value) => value,
                Node::Internal(moves) => {
                    pool.search_root(position, &moves, depth, alpha, beta, &self.scorer)
                }
            },
            _ => minimax::alpha_beta(position, depth, alpha, beta, &self.scorer),
        }
    }

    /// Full-window search at the configured depth.
    pub fn best_move(&self, position: &Position) -> MinmaxValue {
        let result = self.minmax_alphabeta(
            position,
            self.config.depth,
            SCORE_MIN,
            SCORE_MAX,
            self.config.threaded,
        );
        debug!(
            "best move at depth {}: {:?} ({})",
            self.config.depth,
            result.best_move.map(|m| m.to_string()),
            result.value
        );
        result
    }
}

fn build_pool(config: &SearchConfig) -> ChessResult<Option<SearchPool>> {
    if !config.threaded {
        return Ok(None);
    }
    SearchPool::new(config.worker_count()).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::board_scoring::MaterialMobilityScorer;

    const FIXTURES: [&str; 3] = [
        crate::game_state::chess_rules::STARTING_POSITION_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    ];

    fn config(threaded: bool, workers: usize) -> SearchConfig {
        SearchConfig {
            depth: 2,
            threaded,
            worker_threads: Some(workers),
        }
    }

    #[test]
    fn default_config_is_threaded_depth_three() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, 3);
        assert!(config.threaded);
        assert_eq!(config.worker_threads, None);
        assert!(config.worker_count() >= 1);
    }

    #[test]
    fn options_parse_by_name() {
        let mut config = SearchConfig::default();
        config.set_option("depth", " 5 ").expect("depth should parse");
        config.set_option("THREADED", "off").expect("flag should parse");
        config.set_option("Threads", "6").expect("threads should parse");
        assert_eq!(
            config,
            SearchConfig {
                depth: 5,
                threaded: false,
                worker_threads: Some(6),
            }
        );

        config.set_option("Threads", "0").expect("threads should parse");
        assert_eq!(config.worker_threads, None);

        assert_eq!(
            config.set_option("Depth", "deep"),
            Err(ChessError::InvalidOption {
                name: "Depth".to_owned(),
                value: "deep".to_owned(),
            })
        );
        assert!(config.set_option("Threaded", "maybe").is_err());
        assert!(config.set_option("Hash", "64").is_err());
    }

    #[test]
    fn sequential_searcher_owns_no_pool() {
        let searcher = Searcher::new(config(false, 4)).expect("searcher should build");
        assert_eq!(searcher.workers(), 0);

        let threaded = Searcher::new(config(true, 3)).expect("searcher should build");
        assert_eq!(threaded.workers(), 3);
    }

    #[test]
    fn threaded_and_sequential_alphabeta_match_minimax() {
        let searcher = Searcher::new(config(true, 4)).expect("searcher should build");
        for fen in FIXTURES {
            let position = Position::from_fen(fen).expect("FEN should parse");
            let plain = searcher.minmax(&position, 2);
            let sequential = searcher.minmax_alphabeta(&position, 2, SCORE_MIN, SCORE_MAX, false);
            let threaded = searcher.minmax_alphabeta(&position, 2, SCORE_MIN, SCORE_MAX, true);
            assert_eq!(plain.value, sequential.value, "{fen}");
            assert_eq!(plain.value, threaded.value, "{fen}");
            assert_eq!(sequential.best_move, threaded.best_move, "{fen}");
        }
    }

    #[test]
    fn threaded_depth_zero_returns_static_evaluation() {
        let searcher = Searcher::new(config(true, 2)).expect("searcher should build");
        let position = Position::from_fen(FIXTURES[1]).expect("FEN should parse");
        let result = searcher.minmax_alphabeta(&position, 0, SCORE_MIN, SCORE_MAX, true);
        assert_eq!(result.value, position.evaluate());
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn best_move_uses_configured_depth() {
        let mut searcher = Searcher::new(config(true, 2)).expect("searcher should build");
        searcher.set_option("Depth", "1").expect("depth should parse");
        let position = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN should parse");
        let result = searcher.best_move(&position);
        assert_eq!(result.best_move.map(|m| m.to_string()).as_deref(), Some("a1a8"));
        assert_eq!(result.value, crate::search::board_scoring::MATE_SCORE);
    }

    #[test]
    fn set_option_rebuilds_the_pool() {
        let mut searcher = Searcher::new(config(true, 2)).expect("searcher should build");
        searcher.set_option("Threads", "3").expect("threads should parse");
        assert_eq!(searcher.workers(), 3);
        searcher.set_option("Threaded", "false").expect("flag should parse");
        assert_eq!(searcher.workers(), 0);
    }

    #[test]
    fn custom_scorer_is_used_at_the_leaves() {
        let searcher = Searcher::with_scorer(config(false, 1), MaterialMobilityScorer::default())
            .expect("searcher should build");
        let position = Position::new();
        let result = searcher.minmax_alphabeta(&position, 0, SCORE_MIN, SCORE_MAX, false);
        assert_eq!(result.value, searcher.scorer().score(&position));
    }
}
