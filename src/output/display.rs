//! Display functions for game state and round results

use super::formatters::{attempts_bar, gallows};
use crate::core::{GameStatus, MAX_ATTEMPTS, RoundStatus, Statistics};
use colored::Colorize;

/// Print the status block shown before every prompt
pub fn print_game_status(status: &GameStatus) {
    println!("\n{}", "─".repeat(50).cyan());
    for line in gallows(status.max_attempts.saturating_sub(status.attempts_left)) {
        println!("   {line}");
    }
    println!();
    println!(
        "Word:      {}",
        status.masked_word.to_uppercase().bright_yellow().bold()
    );
    println!("Letters:   {}", status.word_length);
    println!("Hint:      {}", status.hint.bright_white());
    println!(
        "Attempts:  [{}] {}/{}",
        attempts_bar(status.attempts_left, usize::from(status.max_attempts)).red(),
        status.attempts_left,
        status.max_attempts
    );
    if status.guessed_display.is_empty() {
        println!("Guessed:   (none)");
    } else {
        println!("Guessed:   {}", status.guessed_display);
    }
    println!("Score:     {}", status.score.to_string().bright_cyan());
    println!("{}", "─".repeat(50).cyan());
}

/// Print the outcome of a guess
pub fn print_round_status(status: &RoundStatus) {
    match status {
        RoundStatus::InProgress(progress) => {
            println!(
                "{} {} attempts left",
                progress.masked_word.to_uppercase().bright_yellow(),
                progress.attempts_left
            );
        }
        RoundStatus::Won(progress) => {
            println!("\n{}", "═".repeat(50).bright_cyan());
            println!(
                "{}",
                format!("    🎉  You got it: {}  🎉", progress.masked_word.to_uppercase())
                    .bright_green()
                    .bold()
            );
            println!(
                "    Score: {}",
                progress.score.to_string().bright_cyan().bold()
            );
            println!("{}", "═".repeat(50).bright_cyan());
        }
        RoundStatus::Lost { progress, word } => {
            println!("\n{}", "═".repeat(50).red());
            for line in gallows(MAX_ATTEMPTS.saturating_sub(progress.attempts_left)) {
                println!("   {line}");
            }
            println!(
                "{}",
                format!("    💀  You lost! The word was: {}", word.to_uppercase())
                    .red()
                    .bold()
            );
            println!("    Score: {}", progress.score);
            println!("{}", "═".repeat(50).red());
        }
        RoundStatus::InvalidInput(reason) => {
            println!("{}", format!("❌ {reason}").red());
        }
    }
}

/// Print session statistics
pub fn print_statistics(stats: &Statistics, score: u32) {
    println!("\n📊 {}", "Session:".bright_cyan().bold());
    println!("   Rounds played: {}", stats.rounds_played);
    println!("   Rounds won:    {}", stats.rounds_won.to_string().green());
    println!("   Rounds lost:   {}", stats.rounds_lost.to_string().red());
    println!("   Win rate:      {:.0}%", stats.win_rate());
    println!(
        "   Final score:   {}",
        score.to_string().bright_yellow().bold()
    );
}
