//! Game state for a single round of Mastermind
//!
//! Owns the secret and the append-only attempt history.

mod state;

pub use state::{Attempt, GameState, NUMBER_OF_ATTEMPTS, Outcome};
