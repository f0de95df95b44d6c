//! Command implementations

pub mod benchmark;
pub mod breaker;
pub mod maker;
pub mod session;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use breaker::run_breaker;
pub use maker::run_maker;
pub use session::{DEFAULT_PLAYER, SessionSummary, ask_name};
pub use solve::{SolveResult, solve_code};
