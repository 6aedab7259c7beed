//! Benchmark command
//!
//! Tests engine performance across randomly drawn secrets.

use super::solve::solve_secret;
use crate::core::Code;
use anyhow::Result;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub total_turns: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    /// Turns taken by solved games
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run the engine against `count` random secrets
///
/// Passing a `seed` makes the drawn secrets reproducible. Averages and
/// extremes cover solved games only.
///
/// # Errors
///
/// Returns an error if the engine reports an inconsistent clue state.
pub fn run_benchmark(count: usize, seed: Option<u64>, max_turns: usize) -> Result<BenchmarkResult> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let secrets: Vec<Code> = (0..count).map(|_| Code::random(&mut rng)).collect();

    run_benchmark_on(&secrets, max_turns)
}

/// Run the engine against a fixed list of secrets
///
/// # Errors
///
/// Returns an error if the engine reports an inconsistent clue state.
pub fn run_benchmark_on(secrets: &[Code], max_turns: usize) -> Result<BenchmarkResult> {
    let start = Instant::now();
    let mut solved = 0;
    let mut total_turns = 0;
    let mut min_turns = usize::MAX;
    let mut max_seen = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for (idx, &secret) in secrets.iter().enumerate() {
        let result = solve_secret(secret, max_turns)?;
        let turns = result.steps.len();

        if result.success {
            solved += 1;
            total_turns += turns;
            min_turns = min_turns.min(turns);
            max_seen = max_seen.max(turns);
            *distribution.entry(turns).or_insert(0) += 1;
        } else {
            info!("{secret} not solved within {max_turns} turns");
        }

        if (idx + 1) % 100 == 0 {
            info!("Benchmarked {}/{} secrets", idx + 1, secrets.len());
        }
    }

    let duration = start.elapsed();
    let total_games = secrets.len();

    Ok(BenchmarkResult {
        total_games,
        solved,
        total_turns,
        average_turns: if solved > 0 {
            total_turns as f64 / solved as f64
        } else {
            0.0
        },
        min_turns: if solved > 0 { min_turns } else { 0 },
        max_turns: max_seen,
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
