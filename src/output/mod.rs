//! Terminal output formatting
//!
//! Board rendering and pretty-printing of command results.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_session_summary, print_solve_result};
