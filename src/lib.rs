//! Hangman
//!
//! A terminal word-guessing game: guess the secret word one letter at a time, or all at
//! once, before six wrong letters hang you. Every won round is worth ten points.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameController, RoundStatus};
//!
//! let mut game = GameController::new("Player1");
//! game.start_new_game("cat", "animal").unwrap();
//!
//! game.guess_letter("c");
//! let status = game.guess_word("cat");
//! assert!(matches!(status, RoundStatus::Won(_)));
//! assert_eq!(game.player().score(), 10);
//! ```

// Core game state
pub mod core;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
