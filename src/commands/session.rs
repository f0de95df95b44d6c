//! Shared pieces of the text sessions: prompts, instructions and the running tally

use crate::core::{ALPHABET, CODE_LENGTH, COLOR_MARKER, EXACT_MARKER, MISS_MARKER};
use crate::game::NUMBER_OF_ATTEMPTS;
use std::io::{self, BufRead, Write};

/// Name used when the player gives none
pub const DEFAULT_PLAYER: &str = "Player 1";

/// Games played and won during one session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub games: usize,
    pub wins: usize,
}

impl SessionSummary {
    pub const fn record(&mut self, won: bool) {
        self.games += 1;
        if won {
            self.wins += 1;
        }
    }
}

/// Read one line, trimmed. `None` at end of input.
///
/// # Errors
///
/// Returns any I/O error from the reader.
pub fn read_trimmed<I: BufRead>(input: &mut I) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Print `prompt` and read the answer
///
/// # Errors
///
/// Returns any I/O error from either stream.
pub fn prompt<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    prompt: &str,
) -> io::Result<Option<String>> {
    writeln!(output, "{prompt}")?;
    output.flush()?;
    read_trimmed(input)
}

/// Ask for the player's name, falling back to [`DEFAULT_PLAYER`]
///
/// # Errors
///
/// Returns any I/O error from either stream.
pub fn ask_name<I: BufRead, O: Write>(input: &mut I, output: &mut O) -> io::Result<String> {
    let name = prompt(input, output, "What is your name?")?
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_PLAYER.to_string());
    Ok(name)
}

/// Keep asking until the answer is `y` or `n`; end of input counts as `n`
///
/// # Errors
///
/// Returns any I/O error from either stream.
pub fn ask_play_again<I: BufRead, O: Write>(input: &mut I, output: &mut O) -> io::Result<bool> {
    let mut answer = prompt(
        input,
        output,
        "\nWould you like to play another game of Mastermind? Enter 'y' or 'n':",
    )?;

    loop {
        match answer.as_deref().map(str::to_lowercase).as_deref() {
            None | Some("n") => return Ok(false),
            Some("y") => return Ok(true),
            Some(_) => {
                answer = prompt(
                    input,
                    output,
                    "Your response is not valid, enter either 'y' or 'n':",
                )?;
            }
        }
    }
}

/// Rules and marker legend shown at the start of a session
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_instructions<O: Write>(output: &mut O) -> io::Result<()> {
    let symbols = ALPHABET
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join("  ");

    writeln!(output, "\nWelcome to Mastermind!\n")?;
    writeln!(output, "A secret code is made from the following symbols:\n")?;
    writeln!(output, "  {symbols}\n")?;
    writeln!(
        output,
        "The code is {CODE_LENGTH} symbols long and duplicates are allowed."
    )?;
    writeln!(
        output,
        "The guessing side gets {NUMBER_OF_ATTEMPTS} chances.\n"
    )?;
    writeln!(
        output,
        "After each guess the result has {CODE_LENGTH} markers:\n"
    )?;
    writeln!(
        output,
        "  {EXACT_MARKER}: one symbol is correct and in the correct position"
    )?;
    writeln!(
        output,
        "  {COLOR_MARKER}: one symbol is correct but in the wrong position"
    )?;
    writeln!(output, "  {MISS_MARKER}: one symbol is not in the code\n")?;
    writeln!(
        output,
        "Markers are sorted, so they say nothing about which symbol scored.\n"
    )?;
    Ok(())
}
