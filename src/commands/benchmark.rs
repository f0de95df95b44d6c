//! Benchmark command
//!
//! Plays the solver against every possible secret (or the first `limit` of them)
//! and aggregates how many guesses it needed.

use crate::core::{CODE_SPACE_SIZE, Code};
use crate::game::GameState;
use crate::solver::{Solver, SolverError};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Options for a benchmark run
pub struct BenchmarkConfig {
    /// Only test the first `limit` codes in lexicographic order
    pub limit: Option<usize>,
    /// Base seed; game `i` uses `seed + i`
    pub seed: u64,
    pub show_progress: bool,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: Vec<Code>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

struct GameRecord {
    secret: Code,
    guesses: usize,
    won: bool,
}

/// Run the benchmark in parallel, one independent game per secret
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid or any game hits an
/// empty candidate set.
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkResult> {
    let secrets: Vec<Code> = Code::all()
        .into_iter()
        .take(config.limit.unwrap_or(CODE_SPACE_SIZE))
        .collect();

    let pb = if config.show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let records = secrets
        .par_iter()
        .enumerate()
        .map(|(index, &secret)| -> Result<GameRecord, SolverError> {
            let rng = StdRng::seed_from_u64(config.seed.wrapping_add(index as u64));
            let mut game = GameState::with_secret(secret);
            let guesses = Solver::new(rng).play_with(&mut game, |_| {})?;
            pb.inc(1);
            Ok(GameRecord {
                secret,
                guesses,
                won: game.has_won(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    Ok(summarize(&records, duration))
}

fn summarize(records: &[GameRecord], duration: Duration) -> BenchmarkResult {
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failed = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;

    for record in records {
        if record.won {
            *distribution.entry(record.guesses).or_insert(0) += 1;
            total_guesses += record.guesses;
            min_guesses = min_guesses.min(record.guesses);
            max_guesses = max_guesses.max(record.guesses);
        } else {
            failed.push(record.secret);
        }
    }

    let solved = records.len() - failed.len();
    let total_codes = records.len();

    BenchmarkResult {
        total_codes,
        solved,
        failed,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        codes_per_second: total_codes as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
