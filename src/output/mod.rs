//! Terminal output formatting
//!
//! Display utilities for the line-oriented shell and shared drawing helpers.

pub mod display;
pub mod formatters;

pub use display::{print_game_status, print_round_status, print_statistics};
