//! Formatting utilities for terminal output

use crate::core::MAX_ATTEMPTS;

/// Draw the gallows for a number of wrong guesses (0-6)
///
/// Each wrong guess adds one body part: head, torso, left arm, right arm, left leg,
/// right leg.
#[must_use]
pub fn gallows(wrong_guesses: u8) -> Vec<String> {
    let stage = wrong_guesses.min(MAX_ATTEMPTS);
    let part = |at: u8, drawn: char| if stage >= at { drawn } else { ' ' };

    vec![
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {}   |", part(1, 'O')),
        format!(" {}{}{}  |", part(3, '/'), part(2, '|'), part(4, '\\')),
        format!(" {} {}  |", part(5, '/'), part(6, '\\')),
        "      |".to_string(),
        "=========".to_string(),
    ]
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format the remaining attempts as a bar
#[must_use]
pub fn attempts_bar(attempts_left: u8, width: usize) -> String {
    create_progress_bar(f64::from(attempts_left), f64::from(MAX_ATTEMPTS), width)
}
