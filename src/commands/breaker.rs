//! Code-breaker session
//!
//! The computer picks a secret, the player guesses it from the terminal.

use super::session::{SessionSummary, ask_play_again, prompt, write_instructions};
use crate::game::{GameState, Outcome};
use crate::output::formatters::{count_noun, render_board};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

enum RoundEnd {
    Finished(Outcome),
    Quit,
}

/// Run code-breaker games until the player declines another one or input ends
///
/// # Errors
///
/// Returns an error if reading from `input` or writing to `output` fails.
pub fn run_breaker<I, O, R>(
    input: &mut I,
    output: &mut O,
    rng: &mut R,
    player: &str,
) -> Result<SessionSummary>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    write_instructions(output)?;

    let mut summary = SessionSummary::default();
    let mut game = GameState::new(None, rng);

    loop {
        match play_round(input, output, &mut game, player)? {
            RoundEnd::Finished(outcome) => {
                summary.record(matches!(outcome, Outcome::Won { .. }));
            }
            RoundEnd::Quit => return Ok(summary),
        }

        if !ask_play_again(input, output)? {
            return Ok(summary);
        }
        game.new_game(None, rng);
    }
}

fn play_round<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    game: &mut GameState,
    player: &str,
) -> Result<RoundEnd> {
    writeln!(output, "{}", render_board(game.history()))?;

    while !game.is_over() {
        let request = format!(
            "\n{player} enter your next guess ({} left):",
            game.attempts_remaining()
        );
        let Some(guess) = prompt(input, output, &request)? else {
            return Ok(RoundEnd::Quit);
        };

        if !game.submit(&guess) {
            writeln!(output, "Selection entered is not valid.")?;
            continue;
        }

        writeln!(output, "{}", render_board(game.history()))?;
    }

    let secret = game.secret();
    match game.outcome() {
        Some(Outcome::Won { attempts }) => {
            writeln!(
                output,
                "\n{}",
                format!(
                    "Game over, {player}, you won the game in {}!",
                    count_noun(attempts, "attempt")
                )
                .green()
                .bold()
            )?;
            Ok(RoundEnd::Finished(Outcome::Won { attempts }))
        }
        _ => {
            writeln!(
                output,
                "\n{}",
                format!("Game over, {player}, you lost the game. The code was {secret}.")
                    .red()
                    .bold()
            )?;
            Ok(RoundEnd::Finished(Outcome::Lost))
        }
    }
}
