//! Code solving command
//!
//! Runs the solver against a given secret and returns the solution path.

use crate::core::Code;
use crate::game::GameState;
use crate::solver::{Solver, Turn};
use anyhow::{Context, Result};
use rand::Rng;

/// Result of solving a code
pub struct SolveResult {
    pub secret: Code,
    pub success: bool,
    pub turns: Vec<Turn>,
}

/// Solve `secret` with a solver driven by `rng`
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid code
/// - The solver runs out of consistent candidates
pub fn solve_code<R: Rng>(secret: &str, rng: R) -> Result<SolveResult> {
    let secret = Code::new(secret).with_context(|| format!("Invalid secret code {secret:?}"))?;

    let mut game = GameState::with_secret(secret);
    let turns = Solver::new(rng).play(&mut game)?;

    Ok(SolveResult {
        secret,
        success: game.has_won(),
        turns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CODE_SPACE_SIZE;
    use crate::game::NUMBER_OF_ATTEMPTS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn solve_code_succeeds() {
        let result = solve_code("cdef", StdRng::seed_from_u64(1)).unwrap();

        assert!(result.success);
        assert_eq!(result.secret.to_string(), "CDEF");
        assert!(!result.turns.is_empty());
        assert!(result.turns.len() <= NUMBER_OF_ATTEMPTS);
        assert!(result.turns.last().unwrap().feedback.is_perfect());
    }

    #[test]
    fn solve_records_history() {
        let result = solve_code("BCAF", StdRng::seed_from_u64(2)).unwrap();

        assert_eq!(result.turns[0].candidates_before, CODE_SPACE_SIZE);
        for step in &result.turns {
            assert!(step.candidates_after <= step.candidates_before);
        }
        for pair in result.turns.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        assert!(solve_code("ZZZZ", StdRng::seed_from_u64(3)).is_err());
        assert!(solve_code("ABC", StdRng::seed_from_u64(3)).is_err());
    }

    #[test]
    fn solve_opener_in_one() {
        let result = solve_code("AABB", StdRng::seed_from_u64(4)).unwrap();
        assert!(result.success);
        assert_eq!(result.turns.len(), 1);
    }
}
