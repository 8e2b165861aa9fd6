//! TUI application state and logic

use crate::core::{GameController, RoundStatus, SecretWord};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Messages kept on screen
const MESSAGE_LIMIT: usize = 6;

/// Application state
pub struct App {
    pub game: GameController,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub pending_word: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Each key press guesses a letter
    Letter,
    /// Typing a whole-word guess
    WholeWord,
    /// The round has ended
    RoundOver,
    /// Typing the next secret word
    NewWord,
    /// Typing the hint for the next secret word
    NewHint,
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

impl App {
    /// Wrap a controller whose first round has already been started
    #[must_use]
    pub fn new(game: GameController) -> Self {
        let mut app = Self {
            game,
            input_mode: InputMode::Letter,
            input_buffer: String::new(),
            pending_word: String::new(),
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Type a letter to guess it, or TAB to guess the whole word.",
            MessageStyle::Info,
        );
        if app.game.status().is_some_and(|s| s.is_over) {
            app.input_mode = InputMode::RoundOver;
        }
        app
    }

    /// React to a single key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Letter => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => {
                    self.input_mode = InputMode::WholeWord;
                    self.input_buffer.clear();
                    self.add_message("Enter the whole word | ESC to cancel", MessageStyle::Info);
                }
                KeyCode::Char(c) => self.guess_letter(c),
                _ => {}
            },
            InputMode::WholeWord => match key.code {
                KeyCode::Esc | KeyCode::Tab => {
                    self.input_mode = InputMode::Letter;
                    self.input_buffer.clear();
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_word(),
                _ => {}
            },
            InputMode::RoundOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => {
                    self.input_mode = InputMode::NewWord;
                    self.input_buffer.clear();
                    self.add_message(
                        "Enter the next secret word (hidden) | ESC to cancel",
                        MessageStyle::Info,
                    );
                }
                KeyCode::Char('r') => {
                    self.game.reset_score();
                    self.add_message("Score reset to 0", MessageStyle::Info);
                }
                _ => {}
            },
            InputMode::NewWord | InputMode::NewHint => match key.code {
                KeyCode::Esc => {
                    self.input_mode = InputMode::RoundOver;
                    self.input_buffer.clear();
                    self.pending_word.clear();
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_new_round_input(),
                _ => {}
            },
        }
    }

    pub fn guess_letter(&mut self, letter: char) {
        let status = self.game.guess_letter(&letter.to_string());
        self.apply_status(&status);
    }

    pub fn submit_word(&mut self) {
        let candidate = std::mem::take(&mut self.input_buffer);
        let status = self.game.guess_word(&candidate);
        if let RoundStatus::InProgress(_) = status {
            self.add_message(
                &format!("'{}' is not the word (no attempt lost)", candidate.trim()),
                MessageStyle::Error,
            );
            self.input_mode = InputMode::Letter;
            return;
        }
        if !matches!(status, RoundStatus::InvalidInput(_)) {
            self.input_mode = InputMode::Letter;
        }
        self.apply_status(&status);
    }

    fn submit_new_round_input(&mut self) {
        let entered = std::mem::take(&mut self.input_buffer);
        if self.input_mode == InputMode::NewWord {
            if let Err(err) = SecretWord::new(entered.as_str()) {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
            self.pending_word = entered;
            self.input_mode = InputMode::NewHint;
            self.add_message("Enter a hint for the word", MessageStyle::Info);
            return;
        }

        let word = std::mem::take(&mut self.pending_word);
        match self.game.start_new_game(&word, entered.trim()) {
            Ok(()) => {
                self.input_mode = InputMode::Letter;
                self.messages.clear();
                self.add_message("New round started! Good luck.", MessageStyle::Info);
            }
            Err(err) => {
                self.input_mode = InputMode::NewWord;
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    fn apply_status(&mut self, status: &RoundStatus) {
        debug!(?status, "round status");
        match status {
            RoundStatus::InProgress(progress) => {
                self.add_message(
                    &format!("{} attempts left", progress.attempts_left),
                    MessageStyle::Info,
                );
            }
            RoundStatus::Won(progress) => {
                self.input_mode = InputMode::RoundOver;
                self.add_message(
                    &format!("🎉 You got it! Score: {}", progress.score),
                    MessageStyle::Success,
                );
                self.add_message(
                    "Press 'n' for a new word, 'r' to reset score or 'q' to quit.",
                    MessageStyle::Info,
                );
            }
            RoundStatus::Lost { word, .. } => {
                self.input_mode = InputMode::RoundOver;
                self.add_message(
                    &format!("💀 You lost! The word was: {}", word.to_uppercase()),
                    MessageStyle::Error,
                );
                self.add_message(
                    "Press 'n' for a new word, 'r' to reset score or 'q' to quit.",
                    MessageStyle::Info,
                );
            }
            RoundStatus::InvalidInput(reason) => {
                self.add_message(&reason.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
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
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(app) => {
            let stats = app.game.statistics();
            println!(
                "Thanks for playing, {}! Score: {} | Rounds: {} won, {} lost",
                app.game.player().name(),
                app.game.player().score(),
                stats.rounds_won,
                stats.rounds_lost
            );
        }
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<App> {
    info!("TUI started");

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    info!("TUI closed");
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
    }

    fn app_with(word: &str) -> App {
        let mut game = GameController::new("tester");
        game.start_new_game(word, "hint").unwrap();
        App::new(game)
    }

    #[test]
    fn letter_keys_guess() {
        let mut app = app_with("cat");
        type_text(&mut app, "cz");
        let status = app.game.status().unwrap();
        assert_eq!(status.masked_word, "c _ _");
        assert_eq!(status.attempts_left, 5);
        assert_eq!(app.input_mode, InputMode::Letter);
    }

    #[test]
    fn winning_letter_ends_round() {
        let mut app = app_with("ab");
        type_text(&mut app, "AB");
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.game.player().score(), 10);
    }

    #[test]
    fn whole_word_entry() {
        let mut app = app_with("dog");
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.input_mode, InputMode::WholeWord);

        type_text(&mut app, "cat");
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.input_mode, InputMode::Letter);
        assert_eq!(app.game.status().unwrap().attempts_left, 6);

        app.handle_key(press(KeyCode::Tab));
        type_text(&mut app, "dgo");
        app.handle_key(press(KeyCode::Backspace));
        app.handle_key(press(KeyCode::Backspace));
        type_text(&mut app, "og");
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert!(app.game.status().unwrap().won);
    }

    #[test]
    fn escape_cancels_whole_word() {
        let mut app = app_with("dog");
        app.handle_key(press(KeyCode::Tab));
        type_text(&mut app, "do");
        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.input_mode, InputMode::Letter);
        assert!(app.input_buffer.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn new_round_flow() {
        let mut app = app_with("dog");
        app.handle_key(press(KeyCode::Tab));
        type_text(&mut app, "dog");
        app.handle_key(press(KeyCode::Enter));

        app.handle_key(press(KeyCode::Char('n')));
        assert_eq!(app.input_mode, InputMode::NewWord);

        // blank word is refused
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.input_mode, InputMode::NewWord);

        type_text(&mut app, "Bird");
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.input_mode, InputMode::NewHint);
        type_text(&mut app, "flies");
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.input_mode, InputMode::Letter);
        let status = app.game.status().unwrap();
        assert_eq!(status.masked_word, "_ _ _ _");
        assert_eq!(status.hint, "flies");
        assert_eq!(status.score, 10);
    }

    #[test]
    fn trailing_space_in_new_word_is_winnable() {
        let mut app = app_with("a");
        type_text(&mut app, "a");
        app.handle_key(press(KeyCode::Char('n')));
        type_text(&mut app, "dog ");
        app.handle_key(press(KeyCode::Enter));
        type_text(&mut app, "pet");
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.game.status().unwrap().word_length, 3);

        app.handle_key(press(KeyCode::Tab));
        type_text(&mut app, "dog ");
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert!(app.game.status().unwrap().won);
        assert_eq!(app.game.player().score(), 20);
    }

    #[test]
    fn two_word_round_won_by_letter_keys() {
        let mut app = app_with("ice cream");
        type_text(&mut app, " ");
        assert_eq!(app.game.status().unwrap().attempts_left, 6);

        type_text(&mut app, "icera");
        assert_eq!(app.input_mode, InputMode::Letter);
        type_text(&mut app, "m");
        assert_eq!(app.input_mode, InputMode::RoundOver);
        let status = app.game.status().unwrap();
        assert_eq!(status.masked_word, "i c e   c r e a m");
        assert!(status.won);
    }

    #[test]
    fn reset_score_after_round() {
        let mut app = app_with("a");
        type_text(&mut app, "a");
        assert_eq!(app.game.player().score(), 10);
        app.handle_key(press(KeyCode::Char('r')));
        assert_eq!(app.game.player().score(), 0);
    }

    #[test]
    fn quit_keys() {
        let mut app = app_with("dog");
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(app.game.status().unwrap().guessed_letters.is_empty());

        let mut app = app_with("dog");
        app.handle_key(press(KeyCode::Char('q')));
        assert!(!app.should_quit);
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app_with("dog");
        for i in 0..20 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MESSAGE_LIMIT);
        assert_eq!(app.messages.last().unwrap().text, "message 19");
    }
}
