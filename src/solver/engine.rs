//! Candidate-filtering Mastermind solver
//!
//! Keeps every code that is still consistent with all feedback seen so far and
//! guesses one of them uniformly at random. This is Knuth's five-guess algorithm
//! minus the minimax step.

use crate::core::{ALPHABET, CODE_LENGTH, Code, Feedback};
use crate::game::{Attempt, GameState};
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Lifecycle of a solver over one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverPhase {
    /// Created, candidate set not built yet
    Initialized,
    /// Candidate set built and a current guess chosen
    Guessing,
    /// Secret found, attempts exhausted, or filtering failed
    Done,
}

/// Errors surfaced by the solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Filtering removed every candidate. The true secret always survives its own
    /// feedback, so this means the feedback did not come from a real secret.
    EmptyCandidateSet { guess: Code, feedback: Feedback },
    /// Operation needs the `Guessing` phase
    NotGuessing(SolverPhase),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCandidateSet { guess, feedback } => write!(
                f,
                "No candidate codes remain after {guess} scored {feedback}; feedback is inconsistent"
            ),
            Self::NotGuessing(phase) => write!(f, "Solver is not guessing (phase: {phase:?})"),
        }
    }
}

impl std::error::Error for SolverError {}

/// Record of one solver turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Mastermind solver
///
/// Owns the candidate set for a single game. Randomness comes from the injected `rng`,
/// so a seeded generator gives a reproducible sequence of guesses.
pub struct Solver<R: Rng> {
    rng: R,
    candidates: Vec<Code>,
    current_guess: Option<Code>,
    phase: SolverPhase,
}

impl<R: Rng> Solver<R> {
    pub const fn new(rng: R) -> Self {
        Self {
            rng,
            candidates: Vec::new(),
            current_guess: None,
            phase: SolverPhase::Initialized,
        }
    }

    /// The fixed first guess: two of the first symbol, then the second symbol (`AABB`)
    #[must_use]
    pub fn opener() -> Code {
        let first = ALPHABET[0] as u8;
        let second = ALPHABET[1] as u8;
        Code::from_symbols(std::array::from_fn(|i| if i < 2 { first } else { second }))
    }

    /// Begin a game: every code is a candidate and the opener is the current guess
    ///
    /// Calling `start` again discards the previous game's state.
    pub fn start(&mut self) -> Code {
        self.candidates = Code::all();
        let opener = Self::opener();
        self.current_guess = Some(opener);
        self.phase = SolverPhase::Guessing;
        debug!(
            "Solver started with {} candidates, opening with {opener}",
            self.candidates.len()
        );
        opener
    }

    /// Drop every candidate that would not have produced `feedback` for the current guess
    ///
    /// Returns the number of candidates left.
    ///
    /// # Errors
    /// - `NotGuessing` if `start` has not been called or the game is done
    /// - `EmptyCandidateSet` if nothing survives; the solver is then `Done`
    pub fn observe(&mut self, feedback: Feedback) -> Result<usize, SolverError> {
        let guess = match (self.phase, self.current_guess) {
            (SolverPhase::Guessing, Some(guess)) => guess,
            (phase, _) => return Err(SolverError::NotGuessing(phase)),
        };

        let before = self.candidates.len();
        self.candidates
            .retain(|candidate| Feedback::compare(candidate, &guess) == feedback);
        debug!(
            "{guess} scored {feedback}: {before} -> {} candidates",
            self.candidates.len()
        );

        if self.candidates.is_empty() {
            self.phase = SolverPhase::Done;
            return Err(SolverError::EmptyCandidateSet { guess, feedback });
        }
        if feedback.is_perfect() {
            self.phase = SolverPhase::Done;
        }

        Ok(self.candidates.len())
    }

    /// Narrow the candidates with attempts made before the solver took over
    ///
    /// Returns the number of candidates left.
    ///
    /// # Errors
    /// Same as [`Solver::observe`], for the first attempt that fails.
    pub fn replay(&mut self, history: &[Attempt]) -> Result<usize, SolverError> {
        let mut remaining = self.candidates.len();
        for attempt in history {
            if self.phase == SolverPhase::Done {
                break;
            }
            self.current_guess = Some(attempt.guess);
            remaining = self.observe(attempt.feedback)?;
        }
        Ok(remaining)
    }

    /// Pick the next guess uniformly at random from the candidates
    ///
    /// # Errors
    /// Returns `NotGuessing` outside the `Guessing` phase.
    pub fn next_guess(&mut self) -> Result<Code, SolverError> {
        if self.phase != SolverPhase::Guessing {
            return Err(SolverError::NotGuessing(self.phase));
        }

        let guess = *self
            .candidates
            .choose(&mut self.rng)
            .ok_or(SolverError::NotGuessing(self.phase))?;
        self.current_guess = Some(guess);
        Ok(guess)
    }

    /// Play `game` until it is won or out of attempts, reporting each turn
    ///
    /// Attempts already in `game` narrow the candidates before the first guess.
    /// Returns the number of guesses this solver submitted.
    ///
    /// # Errors
    /// Returns `EmptyCandidateSet` if the game's feedback contradicts itself.
    pub fn play_with<F>(
        &mut self,
        game: &mut GameState,
        mut on_turn: F,
    ) -> Result<usize, SolverError>
    where
        F: FnMut(&Turn),
    {
        let mut guess = self.start();
        if !game.history().is_empty() {
            self.replay(game.history())?;
            if !game.is_over() {
                guess = self.next_guess()?;
            }
        }
        let mut submitted = 0;

        while !game.is_over() {
            let candidates_before = self.candidates.len();
            let feedback = game.submit_code(guess);
            submitted += 1;

            let candidates_after = self.observe(feedback)?;
            on_turn(&Turn {
                guess,
                feedback,
                candidates_before,
                candidates_after,
            });

            if game.is_over() {
                break;
            }
            guess = self.next_guess()?;
        }

        self.phase = SolverPhase::Done;
        Ok(submitted)
    }

    /// Play `game` to the end and collect every turn
    ///
    /// # Errors
    /// See [`Solver::play_with`].
    pub fn play(&mut self, game: &mut GameState) -> Result<Vec<Turn>, SolverError> {
        let mut turns = Vec::new();
        self.play_with(game, |turn| turns.push(*turn))?;
        Ok(turns)
    }

    /// Codes still consistent with every observed feedback
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    #[must_use]
    pub const fn current_guess(&self) -> Option<Code> {
        self.current_guess
    }

    #[must_use]
    pub const fn phase(&self) -> SolverPhase {
        self.phase
    }
}
