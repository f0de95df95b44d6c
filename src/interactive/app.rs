//! TUI application state and logic

use crate::core::{ALPHABET, CODE_LENGTH, Code};
use crate::game::{GameState, NUMBER_OF_ATTEMPTS, Outcome};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub game: GameState,
    rng: StdRng,
    pub player: String,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Running tally across games in one TUI session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts games won on attempt `n`
    pub attempt_distribution: [usize; NUMBER_OF_ATTEMPTS + 1],
}

impl Statistics {
    fn record(&mut self, outcome: Outcome) {
        self.total_games += 1;
        if let Outcome::Won { attempts } = outcome {
            self.games_won += 1;
            if let Some(slot) = self.attempt_distribution.get_mut(attempts) {
                *slot += 1;
            }
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(player: impl Into<String>, mut rng: StdRng) -> Self {
        let game = GameState::new(None, &mut rng);
        let player = player.into();
        let symbols: String = ALPHABET.iter().collect();
        let welcome = format!(
            "Welcome {player}! Crack the {CODE_LENGTH}-symbol code in {NUMBER_OF_ATTEMPTS} attempts."
        );

        let mut app = Self {
            game,
            rng,
            player,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.add_message(&welcome, MessageStyle::Info);
        app.add_message(
            &format!("Symbols: {symbols}. B = right place, W = wrong place."),
            MessageStyle::Info,
        );
        app
    }

    /// Append a symbol to the pending guess
    ///
    /// Returns `false` if `c` is not a code symbol or the guess is already full.
    pub fn push_symbol(&mut self, c: char) -> bool {
        let c = c.to_ascii_uppercase();
        if self.input_buffer.len() >= CODE_LENGTH || !ALPHABET.contains(&c) {
            return false;
        }
        self.input_buffer.push(c);
        true
    }

    pub fn pop_symbol(&mut self) {
        self.input_buffer.pop();
    }

    pub fn submit_guess(&mut self) {
        let guess = match Code::new(&self.input_buffer) {
            Ok(guess) => guess,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };
        self.input_buffer.clear();

        let feedback = self.game.submit_code(guess);

        match self.game.outcome() {
            Some(outcome @ Outcome::Won { attempts }) => {
                self.stats.record(outcome);
                self.input_mode = InputMode::GameOver;
                let celebration = match attempts {
                    1 => "🎯 First try! Extraordinary!".to_string(),
                    2 | 3 => format!("🔥 Brilliant! Cracked in {attempts} attempts!"),
                    n if n == NUMBER_OF_ATTEMPTS => "😅 Phew! Got it on the last attempt!".to_string(),
                    n => format!("🎉 You won the game in {n} attempts!"),
                };
                self.add_message(&celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Some(outcome @ Outcome::Lost) => {
                self.stats.record(outcome);
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    &format!("You lost the game. The code was {}.", self.game.secret()),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            None => {
                self.add_message(
                    &format!(
                        "{guess}: {feedback}, {} attempts left",
                        self.game.attempts_remaining()
                    ),
                    MessageStyle::Info,
                );
            }
        }
    }

    pub fn new_game(&mut self) {
        self.game.new_game(None, &mut self.rng);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        info!("TUI game {} started", self.stats.total_games + 1);
        self.add_message("New game started! A fresh secret is set.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press to the application state
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match (self.input_mode, key.code) {
            (_, KeyCode::Char('c')) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            (_, KeyCode::Esc) | (InputMode::GameOver, KeyCode::Char('q')) => {
                self.should_quit = true;
            }
            (InputMode::GameOver, KeyCode::Char('n')) => self.new_game(),
            (InputMode::Guessing, KeyCode::Char(c)) => {
                if !self.push_symbol(c) && self.input_buffer.len() < CODE_LENGTH {
                    self.add_message(
                        &format!("'{c}' is not one of the code symbols"),
                        MessageStyle::Error,
                    );
                }
            }
            (InputMode::Guessing, KeyCode::Backspace) => self.pop_symbol(),
            (InputMode::Guessing, KeyCode::Enter) => self.submit_guess(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn new_app(seed: u64) -> App {
        App::new("Ada", StdRng::seed_from_u64(seed))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_guess(app: &mut App, guess: &str) {
        for c in guess.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn wrong_guess(app: &App) -> String {
        if app.game.secret().to_string() == "AAAA" {
            "BBBB".to_string()
        } else {
            "AAAA".to_string()
        }
    }

    #[test]
    fn push_symbol_filters_and_caps() {
        let mut app = new_app(1);

        assert!(app.push_symbol('a'));
        assert!(!app.push_symbol('z'));
        assert!(app.push_symbol('F'));
        assert!(app.push_symbol('c'));
        assert!(app.push_symbol('D'));
        assert!(!app.push_symbol('E'));
        assert_eq!(app.input_buffer, "AFCD");

        app.pop_symbol();
        assert_eq!(app.input_buffer, "AFC");
    }

    #[test]
    fn short_guess_is_rejected_without_using_an_attempt() {
        let mut app = new_app(2);
        type_guess(&mut app, "AB");

        assert!(app.game.history().is_empty());
        assert_eq!(app.input_buffer, "AB");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn winning_guess_ends_game_and_records_stats() {
        let mut app = new_app(3);
        let secret = app.game.secret().to_string();
        type_guess(&mut app, &secret.to_lowercase());

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.attempt_distribution[1], 1);
        assert!(app.messages.iter().any(|m| m.style == MessageStyle::Success));
    }

    #[test]
    fn running_out_of_attempts_loses() {
        let mut app = new_app(4);
        let guess = wrong_guess(&app);
        for _ in 0..NUMBER_OF_ATTEMPTS {
            type_guess(&mut app, &guess);
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        let secret = app.game.secret().to_string();
        assert!(app.messages.iter().any(|m| m.text.contains(&secret)));
    }

    #[test]
    fn symbols_are_ignored_after_game_over() {
        let mut app = new_app(5);
        let secret = app.game.secret().to_string();
        type_guess(&mut app, &secret);

        press(&mut app, KeyCode::Char('a'));
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.game.history().len(), 1);
    }

    #[test]
    fn new_game_resets_board_but_keeps_stats() {
        let mut app = new_app(6);
        let secret = app.game.secret().to_string();
        type_guess(&mut app, &secret);
        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.game.history().is_empty());
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn quit_keys() {
        let mut app = new_app(7);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit, "'q' is a symbol key while guessing");

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = new_app(8);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_bounded() {
        let mut app = new_app(9);
        for i in 0..20 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "message 19");
    }

    #[test]
    fn win_rate() {
        let mut stats = Statistics::default();
        assert!(stats.win_rate().abs() < f64::EPSILON);
        stats.record(Outcome::Won { attempts: 3 });
        stats.record(Outcome::Lost);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }
}
