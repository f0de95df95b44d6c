//! Mastermind solving algorithm
//!
//! Candidate-set filtering with random selection among consistent codes.

mod engine;

pub use engine::{Solver, SolverError, SolverPhase, Turn};
