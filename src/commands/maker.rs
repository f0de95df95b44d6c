//! Code-maker session
//!
//! The player picks a secret and the solver tries to crack it.

use super::session::{SessionSummary, ask_play_again, prompt};
use crate::core::Code;
use crate::game::{GameState, NUMBER_OF_ATTEMPTS};
use crate::output::formatters::{code_cell, count_noun, feedback_pegs, render_board};
use crate::solver::Solver;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run code-maker games until the player declines another one or input ends
///
/// `SessionSummary::wins` counts games the solver cracked.
///
/// # Errors
///
/// Returns an error on I/O failure, or if the solver reports inconsistent feedback.
pub fn run_maker<I, O, R>(
    input: &mut I,
    output: &mut O,
    rng: &mut R,
    player: &str,
) -> Result<SessionSummary>
where
    I: BufRead,
    O: Write,
    R: Rng,
{
    let mut summary = SessionSummary::default();

    loop {
        let request = format!(
            "\n{player}, enter a secret code for the computer to break (Enter for a random one):"
        );
        let Some(raw) = prompt(input, output, &request)? else {
            return Ok(summary);
        };

        if !raw.is_empty() && !Code::validate(&raw) {
            writeln!(output, "Selection entered is not valid.")?;
            continue;
        }
        let secret = (!raw.is_empty()).then_some(raw.as_str());

        let mut game = GameState::new(secret, rng);
        writeln!(
            output,
            "\nSecret locked in: {}",
            code_cell(game.secret()).bold()
        )?;

        let mut number = 0;
        let mut written: io::Result<()> = Ok(());
        let guesses = Solver::new(&mut *rng)
            .play_with(&mut game, |turn| {
                number += 1;
                if written.is_ok() {
                    written = writeln!(
                        output,
                        "Computer guess {number}: {}  {}  ({} -> {} candidates)",
                        code_cell(turn.guess),
                        feedback_pegs(turn.feedback),
                        turn.candidates_before,
                        turn.candidates_after
                    );
                }
            })
            .context("solver gave up on the secret")?;
        written?;
        writeln!(output, "{}", render_board(game.history()))?;

        let cracked = game.has_won();
        if cracked {
            writeln!(
                output,
                "\n{}",
                format!(
                    "The computer cracked your code in {}.",
                    count_noun(guesses, "attempt")
                )
                .yellow()
                .bold()
            )?;
        } else {
            writeln!(
                output,
                "\n{}",
                format!(
                    "Well played, {player}! The computer failed to crack your code in {NUMBER_OF_ATTEMPTS} attempts."
                )
                .green()
                .bold()
            )?;
        }
        summary.record(cracked);

        if !ask_play_again(input, output)? {
            return Ok(summary);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn run(script: &str, seed: u64) -> (SessionSummary, String) {
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let summary = run_maker(&mut input, &mut output, &mut rng, "Ada").unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn solver_cracks_opener_immediately() {
        let (summary, text) = run("aabb\nn\n", 31);

        assert_eq!(summary, SessionSummary { games: 1, wins: 1 });
        assert!(text.contains("cracked your code in 1 attempt."));
        assert_eq!(text.matches("Computer guess").count(), 1);
    }

    #[test]
    fn each_guess_is_reported_in_order() {
        let (summary, text) = run("CDEF\nn\n", 36);

        let reported = text.matches("Computer guess").count();
        assert!(reported >= 1);
        let mut last = 0;
        for number in 1..=reported {
            let at = text
                .find(&format!("Computer guess {number}:"))
                .unwrap_or_else(|| panic!("guess {number} missing"));
            assert!(at > last);
            last = at;
        }
        // Board follows the last guess
        assert!(last < text.rfind("+----").unwrap());
        assert_eq!(summary.games, 1);
    }

    #[test]
    fn invalid_secret_reprompts() {
        let (summary, text) = run("GGGG\nABC\nCDEF\nn\n", 32);

        assert_eq!(text.matches("Selection entered is not valid.").count(), 2);
        assert_eq!(summary.games, 1);
        assert!(text.contains("Secret locked in"));
    }

    #[test]
    fn empty_line_uses_random_secret() {
        let (summary, text) = run("\nn\n", 33);
        assert_eq!(summary.games, 1);
        assert!(text.contains("Computer guess 1:"));
    }

    #[test]
    fn multiple_games() {
        let (summary, _) = run("ABCD\ny\nFFFF\nn\n", 34);
        assert_eq!(summary.games, 2);
    }

    #[test]
    fn end_of_input_before_secret() {
        let (summary, _) = run("", 35);
        assert_eq!(summary, SessionSummary::default());
    }
}
