//! Mastermind - CLI
//!
//! Play Mastermind in a TUI or plain text, or watch the solver crack codes.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use mastermind::{
    commands::{
        BenchmarkConfig, DEFAULT_PLAYER, ask_name, run_benchmark, run_breaker, run_maker,
        solve_code,
    },
    core::CODE_SPACE_SIZE,
    logging,
    output::{print_benchmark_result, print_session_summary, print_solve_result},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code breaking game with a candidate-elimination solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the random number generator (default: OS entropy)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Player name used in session messages
    #[arg(short, long, global = true)]
    name: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI code breaker (default)
    Play,

    /// Break the computer's secret code in plain text
    Breaker,

    /// Pick a secret code and let the computer break it
    Maker,

    /// Run the solver against a specific secret
    Solve {
        /// The secret code to solve, e.g. CDEF
        secret: String,

        /// Show candidate counts for each turn
        #[arg(short = 'c', long)]
        candidates: bool,
    },

    /// Run the solver against every possible secret
    Benchmark {
        /// Limit number of codes to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let mut rng = make_rng(cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.name, rng),
        Commands::Breaker => run_breaker_command(cli.name, &mut rng),
        Commands::Maker => run_maker_command(cli.name, &mut rng),
        Commands::Solve { secret, candidates } => {
            let result = solve_code(&secret, rng)?;
            print_solve_result(&result, candidates);
            Ok(())
        }
        Commands::Benchmark { limit } => run_benchmark_command(limit, cli.seed),
    }
}

fn run_play_command(name: Option<String>, rng: StdRng) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(name.unwrap_or_else(|| DEFAULT_PLAYER.to_string()), rng);
    run_tui(app)
}

fn run_breaker_command(name: Option<String>, rng: &mut StdRng) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let player = match name {
        Some(name) => name,
        None => ask_name(&mut input, &mut output)?,
    };

    let summary = run_breaker(&mut input, &mut output, rng, &player)?;
    print_session_summary(&summary, &player, "wins");
    Ok(())
}

fn run_maker_command(name: Option<String>, rng: &mut StdRng) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let player = name.unwrap_or_else(|| DEFAULT_PLAYER.to_string());
    let summary = run_maker(&mut input, &mut output, rng, &player)?;
    print_session_summary(&summary, &player, "codes cracked by the computer");
    Ok(())
}

fn run_benchmark_command(limit: Option<usize>, seed: Option<u64>) -> Result<()> {
    let config = BenchmarkConfig {
        limit,
        seed: seed.unwrap_or_else(rand::random),
        show_progress: true,
    };

    let count = limit.map_or(CODE_SPACE_SIZE, |l| l.min(CODE_SPACE_SIZE));
    println!("Running solver against {count} codes (seed {})...", config.seed);

    let result = run_benchmark(&config)?;
    print_benchmark_result(&result);
    Ok(())
}
