use std::time::Instant;

use clap::Parser;
use env_logger::{Env, Target};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mailbox_chess::search::searcher::{SearchConfig, Searcher};
use mailbox_chess::Position;

/// Times root-parallel alpha-beta for an increasing number of workers.
#[derive(Debug, Parser)]
#[command(name = "search_bench", version)]
struct Cli {
    /// Search depth in plies.
    #[arg(long, default_value_t = 3)]
    depth: u8,

    /// Largest worker count to try; every count from 1 up is measured.
    #[arg(long, default_value_t = 4)]
    max_threads: usize,

    /// Random plies played from the start position before searching.
    #[arg(long, default_value_t = 6)]
    random_plies: usize,

    /// Seed for the random opening.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Timed runs per worker count.
    #[arg(long, default_value_t = 3)]
    runs: usize,
}

fn random_opening(plies: usize, seed: u64) -> Position {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut position = Position::new();
    for _ in 0..plies {
        let moves = position.generate_legal_moves(true);
        if moves.is_empty() {
            break;
        }
        let m = moves[rng.random_range(0..moves.len())];
        if let Err(err) = position.play(&m) {
            warn!("random opening stopped at {m}: {err}");
            break;
        }
    }
    position
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stderr)
        .init();

    let cli = Cli::parse();
    let position = random_opening(cli.random_plies, cli.seed);
    info!("benchmark position: {}", position.to_fen());

    println!(
        "Search scaling benchmark: max_threads={} depth={} runs={}",
        cli.max_threads, cli.depth, cli.runs
    );
    println!("threads,total_ms,avg_ms,value,best_move");

    for threads in 1..=cli.max_threads.max(1) {
        let searcher = Searcher::new(SearchConfig {
            depth: cli.depth,
            threaded: true,
            worker_threads: Some(threads),
        })?;

        let mut total_ms: u128 = 0;
        let mut last = None;
        for _ in 0..cli.runs.max(1) {
            let start = Instant::now();
            last = Some(searcher.best_move(&position));
            total_ms += start.elapsed().as_millis();
        }

        let avg_ms = total_ms as f64 / cli.runs.max(1) as f64;
        let (value, best_move) = match last {
            Some(result) => (
                result.value,
                result.best_move.map(|m| m.to_string()).unwrap_or_else(|| "-".to_owned()),
            ),
            None => (0.0, "-".to_owned()),
        };
        println!("{threads},{total_ms},{avg_ms:.2},{value},{best_move}");
    }

    Ok(())
}
