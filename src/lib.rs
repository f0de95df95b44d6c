//! Mastermind
//!
//! A Mastermind engine with a candidate-elimination solver, text sessions and a TUI.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Feedback};
//! use mastermind::game::GameState;
//! use mastermind::solver::Solver;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! // Score a guess against a secret
//! let guess = Code::new("AABB").unwrap();
//! let secret = Code::new("ABAB").unwrap();
//! assert_eq!(Feedback::compare(&guess, &secret), Feedback::new(2, 2).unwrap());
//!
//! // Let the solver crack a secret
//! let mut game = GameState::with_secret(Code::new("CDEF").unwrap());
//! let turns = Solver::new(StdRng::seed_from_u64(1)).play(&mut game).unwrap();
//! println!("Solved: {} in {} guesses", game.has_won(), turns.len());
//! ```

// Codes and scoring
pub mod core;

// Secret, attempt history and outcome
pub mod game;

// Candidate-elimination solver
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
