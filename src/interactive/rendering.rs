//! TUI rendering with ratatui
//!
//! Board, messages and input panels for the code-breaker game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{CODE_LENGTH, COLOR_MARKER, EXACT_MARKER, Feedback, MISS_MARKER};
use crate::game::NUMBER_OF_ATTEMPTS;
use crate::output::formatters::create_progress_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(NUMBER_OF_ATTEMPTS as u16 + 2),
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Break the Code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn symbol_color(symbol: char) -> Color {
    match symbol {
        'A' => Color::Red,
        'B' => Color::Green,
        'C' => Color::Yellow,
        'D' => Color::Blue,
        'E' => Color::Magenta,
        'F' => Color::Cyan,
        _ => Color::DarkGray,
    }
}

fn peg_spans(feedback: Feedback) -> Vec<Span<'static>> {
    feedback
        .markers()
        .chars()
        .map(|marker| {
            let color = match marker {
                EXACT_MARKER => Color::Green,
                COLOR_MARKER => Color::Yellow,
                _ => Color::DarkGray,
            };
            Span::styled(format!("{marker} "), Style::default().fg(color))
        })
        .collect()
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history = app.game.history();
    let mut lines = Vec::with_capacity(NUMBER_OF_ATTEMPTS);

    for row in 0..NUMBER_OF_ATTEMPTS {
        let mut spans = vec![Span::styled(
            format!("{:>2}  ", row + 1),
            Style::default().fg(Color::DarkGray),
        )];

        if let Some(attempt) = history.get(row) {
            for symbol in attempt.guess.to_string().chars() {
                spans.push(Span::styled(
                    format!("{symbol} "),
                    Style::default()
                        .fg(symbol_color(symbol))
                        .add_modifier(Modifier::BOLD),
                ));
            }
            spans.push(Span::raw("  "));
            spans.extend(peg_spans(attempt.feedback));
        } else if row == history.len() && app.input_mode == InputMode::Guessing {
            for symbol in app.input_buffer.chars() {
                spans.push(Span::styled(
                    format!("{symbol} "),
                    Style::default().fg(symbol_color(symbol)),
                ));
            }
            spans.push(Span::styled(
                "_ ".repeat(CODE_LENGTH - app.input_buffer.len()),
                Style::default().fg(Color::Yellow),
            ));
        } else {
            spans.push(Span::styled(
                ". ".repeat(CODE_LENGTH),
                Style::default().fg(Color::DarkGray),
            ));
        }

        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(NUMBER_OF_ATTEMPTS as u16 + 2),
        ])
        .split(area);

    render_attempts_gauge(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_distribution(f, app, chunks[2]);
}

fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let distribution = &app.stats.attempt_distribution;
    let most = distribution.iter().copied().max().unwrap_or(0);

    let lines: Vec<Line> = (1..=NUMBER_OF_ATTEMPTS)
        .map(|attempts| {
            let count = distribution[attempts];
            let bar = create_progress_bar(count as f64, most as f64, 10);
            Line::from(vec![
                Span::raw(format!("{attempts} ")),
                Span::styled(bar, Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Wins by attempt ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_attempts_gauge(f: &mut Frame, app: &App, area: Rect) {
    let used = app.game.history().len();
    let percent = (used * 100 / NUMBER_OF_ATTEMPTS).min(100) as u16;
    let color = if app.game.attempts_remaining() <= 2 {
        Color::Red
    } else {
        Color::Cyan
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{used}/{NUMBER_OF_ATTEMPTS} used"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            if app.game.has_won() {
                Color::Green
            } else {
                Color::Red
            },
        ),
        InputMode::Guessing => (
            format!(
                " {}, enter your guess ({} left) | Enter to submit ",
                app.player,
                app.game.attempts_remaining()
            ),
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let legend = Line::from(vec![
        Span::styled(format!("{EXACT_MARKER}"), Style::default().fg(Color::Green)),
        Span::raw(" place  "),
        Span::styled(format!("{COLOR_MARKER}"), Style::default().fg(Color::Yellow)),
        Span::raw(" color  "),
        Span::styled(format!("{MISS_MARKER}"), Style::default().fg(Color::DarkGray)),
        Span::raw(" miss"),
    ]);
    f.render_widget(
        Paragraph::new(legend).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("A-F: Symbol | Backspace | Enter | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_board_and_pending_guess() {
        let mut app = App::new("Ada", StdRng::seed_from_u64(11));
        app.push_symbol('c');
        app.push_symbol('d');

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("MASTERMIND"));
        assert!(text.contains("Board"));
        assert!(text.contains("0/8 used"));
        assert!(text.contains("C D _ _"));
    }

    #[test]
    fn draws_game_over_prompt() {
        let mut app = App::new("Ada", StdRng::seed_from_u64(12));
        let secret = app.game.secret().to_string();
        for c in secret.chars() {
            app.push_symbol(c);
        }
        app.submit_guess();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Game over"));
        assert!(text.contains("1/8 used"));
        assert!(text.contains("Wins by attempt"));
        assert!(text.contains("1 ██████████ 1"));
        assert!(text.contains("2 ░░░░░░░░░░ 0"));
    }
}
