//! TUI rendering with ratatui
//!
//! Gallows, word and status panels for the hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::GameStatus;
use crate::output::formatters::gallows;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Gallows and word
            Constraint::Percentage(45), // Attempts and messages
        ])
        .split(chunks[1]);

    let status = app.game.status();
    render_main_panel(f, status.as_ref(), main_chunks[0]);
    render_info_panel(f, app, status.as_ref(), main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
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

fn render_main_panel(f: &mut Frame, status: Option<&GameStatus>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Gallows
            Constraint::Min(5),    // Word
        ])
        .split(area);

    let wrong = status.map_or(0, |s| s.max_attempts.saturating_sub(s.attempts_left));
    let gallows_color = match wrong {
        0..=2 => Color::White,
        3..=4 => Color::Yellow,
        _ => Color::Red,
    };
    let drawing: Vec<Line> = gallows(wrong).into_iter().map(Line::from).collect();
    let gallows_widget = Paragraph::new(drawing)
        .style(Style::default().fg(gallows_color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(gallows_widget, chunks[0]);

    let content = if let Some(status) = status {
        let word_style = if status.won {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        };
        vec![
            Line::from(Span::styled(status.masked_word.to_uppercase(), word_style)),
            Line::from(""),
            Line::from(vec![
                Span::raw("Hint:    "),
                Span::styled(status.hint.clone(), Style::default().fg(Color::Cyan)),
            ]),
            Line::from(format!("Letters: {}", status.word_length)),
        ]
    } else {
        vec![Line::from("No round in progress")]
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, chunks[1]);
}

fn render_info_panel(f: &mut Frame, app: &App, status: Option<&GameStatus>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(3), // Guessed letters
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_attempts(f, status, chunks[0]);
    render_guessed(f, status, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, status: Option<&GameStatus>, area: Rect) {
    let (left, max) = status.map_or((0, 1), |s| (s.attempts_left, s.max_attempts.max(1)));
    let percent = u16::from(left) * 100 / u16::from(max);
    let color = if percent > 50 {
        Color::Green
    } else if percent > 20 {
        Color::Yellow
    } else {
        Color::Red
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{left}/{max}"));

    f.render_widget(gauge, area);
}

fn render_guessed(f: &mut Frame, status: Option<&GameStatus>, area: Rect) {
    let letters = status.map_or_else(String::new, |s| s.guessed_display.clone());
    let paragraph = Paragraph::new(letters).block(
        Block::default()
            .title(" Guessed ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
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
    let hidden;
    let (title, content, color) = match app.input_mode {
        InputMode::Letter => (
            " Press a letter to guess | TAB: whole word | ESC: quit ",
            "",
            Color::Yellow,
        ),
        InputMode::WholeWord => (
            " Guess the whole word | ENTER: submit | ESC: cancel ",
            app.input_buffer.as_str(),
            Color::Cyan,
        ),
        InputMode::RoundOver => (
            " Round over | n: new word | r: reset score | q: quit ",
            "",
            Color::Green,
        ),
        InputMode::NewWord => {
            hidden = "*".repeat(app.input_buffer.chars().count());
            (
                " Next secret word (hidden) | ENTER: next | ESC: cancel ",
                hidden.as_str(),
                Color::Magenta,
            )
        }
        InputMode::NewHint => (
            " Hint for the word | ENTER: start | ESC: cancel ",
            app.input_buffer.as_str(),
            Color::Magenta,
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
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let player = app.game.player();
    let player_text = format!("Player: {} | Score: {}", player.name(), player.score());
    f.render_widget(
        Paragraph::new(player_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats = app.game.statistics();
    let stats_text = format!(
        "Rounds: {} | Win Rate: {:.0}%",
        stats.rounds_played,
        stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::RoundOver => "n: New Word | r: Reset Score | q: Quit",
        _ => "Ctrl-C: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
