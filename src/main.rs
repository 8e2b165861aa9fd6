//! Hangman - CLI
//!
//! Word-guessing game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{commands::run_simple, core::GameController};
use std::fs::File;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Log file used while the TUI owns the terminal
const TUI_LOG_FILE: &str = "hangman.log";

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Player name shown next to the score
    #[arg(short, long, global = true, default_value = "Player1")]
    name: String,

    /// Secret word for the first round
    #[arg(short, long, global = true, default_value = "javascript")]
    word: String,

    /// Hint shown for the first round's word
    #[arg(long, global = true, default_value = "Programming language")]
    hint: String,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-by-line prompts without TUI)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_tracing(command)?;

    let mut game = GameController::new(cli.name);
    game.start_new_game(&cli.word, &cli.hint)
        .context("invalid --word")?;
    info!(player = game.player().name(), "game created");

    match command {
        Commands::Play => run_play_command(game),
        Commands::Simple => run_simple(&mut game),
    }
}

/// Install the tracing subscriber, filtered by `RUST_LOG`
///
/// The TUI owns the terminal, so its logs go to a file instead of stderr.
fn init_tracing(command: Commands) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match command {
        Commands::Play => {
            let log_file = File::create(TUI_LOG_FILE)
                .with_context(|| format!("cannot create {TUI_LOG_FILE}"))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .init();
        }
        Commands::Simple => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn run_play_command(game: GameController) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(game);
    run_tui(app)
}
