//! Core game state for hangman
//!
//! This module contains the round state machine, the player, and the controller that
//! ties them together. Nothing here performs I/O; front ends render the values it returns.

mod controller;
mod player;
mod round;
mod word;

pub use controller::{
    Action, GameController, GameStatus, Progress, Rejection, RoundStatus, Statistics, WIN_REWARD,
};
pub use player::Player;
pub use round::{BLANK, GuessOutcome, MAX_ATTEMPTS, Match, RoundState};
pub use word::{SecretWord, WordError, fold_case};
