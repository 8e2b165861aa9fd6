//! Simple interactive CLI mode
//!
//! Text-based prompt loop without TUI

use crate::core::{Action, GameController};
use crate::output::{print_game_status, print_round_status, print_statistics};
use anyhow::{Result, bail};
use std::io::{self, Write};
use tracing::debug;

/// Run the simple interactive CLI mode
///
/// Plays the round already started on `game`, then offers further rounds until the
/// player declines or quits.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input, or if no round has been
/// started on `game`.
pub fn run_simple(game: &mut GameController) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║                  H A N G M A N                   ║");
    println!("╚══════════════════════════════════════════════════╝\n");

    println!("Welcome, {}!", game.player().name());
    println!("Guess one letter at a time, or the whole word at once.");
    println!("Six wrong letters and you're hanged. Wrong word guesses are free.");
    println!("Type 'quit' at the l/w prompt to leave.\n");

    loop {
        if !play_round(game)? {
            break;
        }

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => {
                start_next_round(game)?;
                println!("\n🔄 New round started!\n");
            }
            _ => break,
        }
    }

    print_statistics(&game.statistics(), game.player().score());
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Prompt until the current round ends
///
/// Returns `false` if the player asked to quit.
fn play_round(game: &mut GameController) -> Result<bool> {
    loop {
        let Some(status) = game.status() else {
            bail!("no round has been started");
        };
        if status.is_over {
            return Ok(true);
        }
        print_game_status(&status);

        let choice = get_user_input("Guess a letter or the whole word? (l/w)")?;
        let result = match Action::parse(&choice) {
            Some(Action::Letter) => game.guess_letter(&get_user_input("Letter")?),
            Some(Action::Word) => game.guess_word(&get_user_input("Word")?),
            None if matches!(choice.to_lowercase().as_str(), "quit" | "q" | "exit") => {
                return Ok(false);
            }
            None => game.handle(&choice, ""),
        };
        print_round_status(&result);
    }
}

/// Ask for the next secret word and hint, and whether to keep the score
fn start_next_round(game: &mut GameController) -> Result<()> {
    println!("\nHave someone else enter the next word while you look away.");
    loop {
        let word = get_user_input("Secret word")?;
        let hint = get_user_input("Hint")?;
        match game.start_new_game(&word, &hint) {
            Ok(()) => break,
            Err(err) => println!("❌ {err}"),
        }
    }
    // Push the secret word off screen
    println!("{}", "\n".repeat(40));

    if matches!(
        get_user_input("Reset score? (yes/no)")?.to_lowercase().as_str(),
        "yes" | "y"
    ) {
        game.reset_score();
        debug!("score reset between rounds");
    }
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed",
        ));
    }

    Ok(input.trim().to_string())
}
