//! Round orchestration and scoring
//!
//! `GameController` is what a front end talks to. It forwards guesses to the current
//! `Match`, awards points to the `Player` when a round is won, and answers every call
//! with a `RoundStatus` the caller can render. It never prints.

use super::player::Player;
use super::round::{Match, RoundState};
use super::word::WordError;
use tracing::{debug, info};

/// Points awarded for winning a round
pub const WIN_REWARD: u32 = 10;

/// The two kinds of guess a player can choose between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Letter,
    Word,
}

impl Action {
    /// Parse the player's choice of action
    ///
    /// Accepts `l`/`letter` and `w`/`word`, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim().to_lowercase().as_str() {
            "l" | "letter" => Some(Self::Letter),
            "w" | "word" => Some(Self::Word),
            _ => None,
        }
    }
}

/// Why a call was turned away without touching the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The action was neither a letter guess nor a word guess
    UnknownAction,
    /// A letter guess that was not exactly one character
    NotALetter,
    /// A word guess with nothing in it
    EmptyGuess,
    /// No round has been started yet
    NoActiveRound,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::UnknownAction => "Choose 'l' to guess a letter or 'w' to guess the whole word",
            Self::NotALetter => "Enter exactly one letter",
            Self::EmptyGuess => "Enter a word to guess",
            Self::NoActiveRound => "No round in progress",
        };
        f.write_str(text)
    }
}

/// What a presentation layer needs to describe the round after a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub masked_word: String,
    pub attempts_left: u8,
    pub score: u32,
}

/// Result of a controller call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress(Progress),
    Won(Progress),
    /// The round is lost; `word` is the revealed secret
    Lost { progress: Progress, word: String },
    InvalidInput(Rejection),
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self, Self::Won(_) | Self::Lost { .. })
    }

    #[must_use]
    pub const fn progress(&self) -> Option<&Progress> {
        match self {
            Self::InProgress(progress) | Self::Won(progress) | Self::Lost { progress, .. } => {
                Some(progress)
            }
            Self::InvalidInput(_) => None,
        }
    }
}

/// Read-only snapshot of the current round for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStatus {
    pub masked_word: String,
    pub hint: String,
    pub word_length: usize,
    pub attempts_left: u8,
    pub max_attempts: u8,
    pub guessed_letters: Vec<char>,
    /// Guessed letters as the round renders them, e.g. `c, z`
    pub guessed_display: String,
    pub score: u32,
    pub is_over: bool,
    pub won: bool,
}

/// Round tallies for the session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub rounds_lost: usize,
}

impl Statistics {
    /// Percentage of finished rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}

/// Sequences rounds for one player
#[derive(Debug, Clone)]
pub struct GameController {
    player: Player,
    current: Option<Match>,
    /// Set once the current round's terminal outcome has been scored
    settled: bool,
    stats: Statistics,
}

impl GameController {
    #[must_use]
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player: Player::new(player_name),
            current: None,
            settled: false,
            stats: Statistics::default(),
        }
    }

    /// Start a round on a new word, keeping the player's score
    ///
    /// # Errors
    /// Returns `WordError::Empty` for a blank word; the previous round, if any, is kept.
    pub fn start_new_game(&mut self, word: &str, hint: &str) -> Result<(), WordError> {
        match self.current.as_mut() {
            Some(round) => round.reset(word, hint)?,
            None => self.current = Some(Match::new(word, hint)?),
        }
        self.settled = false;
        info!(
            player = self.player.name(),
            letters = word.chars().count(),
            "new round started"
        );
        Ok(())
    }

    /// Dispatch a raw action choice and its input
    pub fn handle(&mut self, action: &str, input: &str) -> RoundStatus {
        match Action::parse(action) {
            Some(Action::Letter) => self.guess_letter(input),
            Some(Action::Word) => self.guess_word(input),
            None => reject(Rejection::UnknownAction),
        }
    }

    /// Guess one letter
    pub fn guess_letter(&mut self, input: &str) -> RoundStatus {
        let mut chars = input.trim().chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(letter), None) => letter,
            _ => return reject(Rejection::NotALetter),
        };
        let Some(round) = self.current.as_mut() else {
            return reject(Rejection::NoActiveRound);
        };

        let outcome = round.guess(letter);
        debug!(%letter, ?outcome, attempts_left = round.attempts_left(), "letter guessed");
        self.evaluate()
    }

    /// Guess the whole word; a wrong guess costs nothing
    pub fn guess_word(&mut self, input: &str) -> RoundStatus {
        let candidate = input.trim();
        if candidate.is_empty() {
            return reject(Rejection::EmptyGuess);
        }
        let Some(round) = self.current.as_mut() else {
            return reject(Rejection::NoActiveRound);
        };

        let outcome = round.guess_word(candidate);
        debug!(?outcome, attempts_left = round.attempts_left(), "word guessed");
        self.evaluate()
    }

    /// Report the current round's status, scoring it if it has just ended
    ///
    /// Safe to call any number of times: a won round pays out once.
    pub fn evaluate(&mut self) -> RoundStatus {
        let Some(round) = self.current.as_ref() else {
            return reject(Rejection::NoActiveRound);
        };
        let state = round.state();

        if state.is_terminal() && !self.settled {
            self.settled = true;
            self.stats.rounds_played += 1;
            if state == RoundState::Won {
                self.stats.rounds_won += 1;
                self.player.update_score(WIN_REWARD);
                info!(score = self.player.score(), "round won");
            } else {
                self.stats.rounds_lost += 1;
                info!(word = round.word(), "round lost");
            }
        }

        let progress = Progress {
            masked_word: round.display_progress(),
            attempts_left: round.attempts_left(),
            score: self.player.score(),
        };
        match state {
            RoundState::Active => RoundStatus::InProgress(progress),
            RoundState::Won => RoundStatus::Won(progress),
            RoundState::Lost => RoundStatus::Lost {
                progress,
                word: round.word().to_string(),
            },
        }
    }

    /// Snapshot of the current round, if one has been started
    #[must_use]
    pub fn status(&self) -> Option<GameStatus> {
        self.current.as_ref().map(|round| GameStatus {
            masked_word: round.display_progress(),
            hint: round.hint().to_string(),
            word_length: round.word_length(),
            attempts_left: round.attempts_left(),
            max_attempts: round.max_attempts(),
            guessed_letters: round.guessed_letters().to_vec(),
            guessed_display: round.display_guessed_letters(),
            score: self.player.score(),
            is_over: round.is_game_over(),
            won: round.is_word_guessed(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Start the score over at zero; rounds already played still count in statistics
    pub fn reset_score(&mut self) {
        self.player.reset_score();
        info!("score reset");
    }

    #[inline]
    #[must_use]
    pub const fn statistics(&self) -> Statistics {
        self.stats
    }

    #[inline]
    #[must_use]
    pub const fn current_match(&self) -> Option<&Match> {
        self.current.as_ref()
    }
}

fn reject(reason: Rejection) -> RoundStatus {
    debug!(?reason, "input rejected");
    RoundStatus::InvalidInput(reason)
}
