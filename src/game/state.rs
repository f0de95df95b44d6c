//! Secret, attempt history and win/exhaustion queries

use crate::core::{Code, Feedback};
use log::{debug, info, warn};
use rand::Rng;

/// Guesses allowed per game
pub const NUMBER_OF_ATTEMPTS: usize = 8;

/// One scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Code,
    pub feedback: Feedback,
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Secret found on the given attempt (1-based)
    Won { attempts: usize },
    /// Attempts exhausted without finding the secret
    Lost,
}

/// State of one game: the secret plus every attempt in play order
#[derive(Debug, Clone)]
pub struct GameState {
    secret: Code,
    attempts: Vec<Attempt>,
}

impl GameState {
    /// Start a game, see [`GameState::new_game`] for how `secret` is handled
    #[must_use]
    pub fn new<R: Rng + ?Sized>(secret: Option<&str>, rng: &mut R) -> Self {
        let game = Self::with_secret(resolve_secret(secret, rng));
        info!("New game started, {NUMBER_OF_ATTEMPTS} attempts allowed");
        game
    }

    /// Start a game with an already validated secret
    #[must_use]
    pub const fn with_secret(secret: Code) -> Self {
        Self {
            secret,
            attempts: Vec::new(),
        }
    }

    /// Reset to a fresh game
    ///
    /// A valid `secret` is used after normalization. A missing one is drawn from `rng`.
    /// An invalid one is *not* an error: it is logged and replaced by a random code,
    /// so callers that need to reject bad input must check [`Code::validate`] first.
    pub fn new_game<R: Rng + ?Sized>(&mut self, secret: Option<&str>, rng: &mut R) {
        self.secret = resolve_secret(secret, rng);
        self.attempts.clear();
        info!("New game started, {NUMBER_OF_ATTEMPTS} attempts allowed");
    }

    /// Score a raw guess and record it
    ///
    /// Returns `false` and leaves the history untouched if `raw_guess` is not a valid code.
    pub fn submit(&mut self, raw_guess: &str) -> bool {
        match Code::new(raw_guess) {
            Ok(guess) => {
                self.submit_code(guess);
                true
            }
            Err(err) => {
                debug!("Rejected guess {raw_guess:?}: {err}");
                false
            }
        }
    }

    /// Score a validated guess and record it
    pub fn submit_code(&mut self, guess: Code) -> Feedback {
        let feedback = Feedback::compare(&guess, &self.secret);
        self.attempts.push(Attempt { guess, feedback });
        debug!(
            "Attempt {}: {guess} scored {feedback}",
            self.attempts.len()
        );
        feedback
    }

    /// True once any attempt matched the secret exactly
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.attempts.iter().any(|a| a.feedback.is_perfect())
    }

    /// True once `NUMBER_OF_ATTEMPTS` guesses have been recorded, won or not
    #[must_use]
    pub fn exhausted(&self) -> bool {
        self.attempts.len() >= NUMBER_OF_ATTEMPTS
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.has_won() || self.exhausted()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        NUMBER_OF_ATTEMPTS.saturating_sub(self.attempts.len())
    }

    /// Attempts in play order
    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn last_attempt(&self) -> Option<&Attempt> {
        self.attempts.last()
    }

    /// The secret. Front-ends only reveal it once the game is over.
    #[must_use]
    pub const fn secret(&self) -> Code {
        self.secret
    }

    /// `None` while the game is still running
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(index) = self
            .attempts
            .iter()
            .position(|a| a.feedback.is_perfect())
        {
            Some(Outcome::Won {
                attempts: index + 1,
            })
        } else if self.exhausted() {
            Some(Outcome::Lost)
        } else {
            None
        }
    }
}

fn resolve_secret<R: Rng + ?Sized>(secret: Option<&str>, rng: &mut R) -> Code {
    match secret.map(Code::new) {
        Some(Ok(code)) => code,
        Some(Err(err)) => {
            warn!("Provided secret rejected ({err}); using a random code instead");
            Code::random(rng)
        }
        None => Code::random(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game(secret: &str) -> GameState {
        GameState::with_secret(Code::new(secret).unwrap())
    }

    #[test]
    fn new_game_uses_valid_secret() {
        let mut rng = StdRng::seed_from_u64(1);
        let game = GameState::new(Some("abcd"), &mut rng);
        assert_eq!(game.secret(), Code::new("ABCD").unwrap());
        assert!(game.history().is_empty());
    }

    #[test]
    fn new_game_falls_back_to_random_secret() {
        let mut rng = StdRng::seed_from_u64(1);
        let game = GameState::new(Some("ZZZZZ"), &mut rng);
        assert!(Code::validate(&game.secret().to_string()));

        let game = GameState::new(None, &mut rng);
        assert!(Code::validate(&game.secret().to_string()));
    }

    #[test]
    fn new_game_resets_history() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = game("ABCD");
        assert!(state.submit("AAAA"));
        assert!(state.submit("BBBB"));

        state.new_game(Some("FFFF"), &mut rng);
        assert!(state.history().is_empty());
        assert_eq!(state.secret().to_string(), "FFFF");
        assert!(!state.has_won());
    }

    #[test]
    fn submit_rejects_invalid_guess_without_mutation() {
        let mut state = game("ABCD");
        assert!(state.submit("ABCE"));

        for raw in ["", "ABC", "ABCDE", "ABCZ", "12 4"] {
            assert!(!state.submit(raw));
        }
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn submit_accepts_lowercase() {
        let mut state = game("ABCD");
        assert!(state.submit("abcd"));
        assert!(state.has_won());
    }

    #[test]
    fn code_breaker_scenario() {
        let mut state = game("ABCD");

        assert!(state.submit("ABCE"));
        let feedback = state.last_attempt().unwrap().feedback;
        assert_eq!(
            (feedback.exact(), feedback.color_only(), feedback.miss()),
            (3, 0, 1)
        );
        assert!(!state.has_won());

        assert!(state.submit("DCBA"));
        let feedback = state.last_attempt().unwrap().feedback;
        assert_eq!(
            (feedback.exact(), feedback.color_only(), feedback.miss()),
            (0, 4, 0)
        );
        assert!(!state.has_won());

        assert!(state.submit("ABCD"));
        assert!(state.has_won());
        assert_eq!(state.outcome(), Some(Outcome::Won { attempts: 3 }));
    }

    #[test]
    fn history_preserves_play_order() {
        let mut state = game("ABCD");
        for raw in ["AAAA", "BBBB", "CCCC"] {
            assert!(state.submit(raw));
        }
        let guesses: Vec<String> = state
            .history()
            .iter()
            .map(|a| a.guess.to_string())
            .collect();
        assert_eq!(guesses, ["AAAA", "BBBB", "CCCC"]);
    }

    #[test]
    fn exhausted_exactly_at_attempt_limit() {
        let mut state = game("ABCD");
        for n in 1..=NUMBER_OF_ATTEMPTS {
            assert!(!state.exhausted());
            assert_eq!(state.attempts_remaining(), NUMBER_OF_ATTEMPTS - n + 1);
            assert!(state.submit("FFFF"));
        }
        assert!(state.exhausted());
        assert!(!state.has_won());
        assert_eq!(state.outcome(), Some(Outcome::Lost));
    }

    #[test]
    fn exhausted_regardless_of_win() {
        let mut state = game("ABCD");
        for _ in 1..NUMBER_OF_ATTEMPTS {
            assert!(state.submit("FFFF"));
        }
        assert!(state.submit("ABCD"));
        assert!(state.has_won());
        assert!(state.exhausted());
        assert_eq!(
            state.outcome(),
            Some(Outcome::Won {
                attempts: NUMBER_OF_ATTEMPTS
            })
        );
    }

    #[test]
    fn outcome_none_while_running() {
        let mut state = game("ABCD");
        assert_eq!(state.outcome(), None);
        assert!(state.submit("AAAA"));
        assert_eq!(state.outcome(), None);
        assert!(!state.is_over());
    }
}
