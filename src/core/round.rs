//! A single round of hangman
//!
//! `Match` owns the secret word, the hint, the guessed letters and the attempt budget.
//! It is pure state: nothing here prints or reads input.

use super::word::{SecretWord, WordError, fold_case};
use rustc_hash::FxHashSet;

/// Number of wrong letters a player may guess before losing the round
pub const MAX_ATTEMPTS: u8 = 6;

/// Placeholder rendered for letters not yet guessed
pub const BLANK: char = '_';

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Active,
    Won,
    Lost,
}

impl RoundState {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// What a single guess did to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs in the word this many times
    Hit { occurrences: usize },
    /// The letter is not in the word; one attempt was consumed
    Miss,
    /// The letter was already known (guessed before, or whitespace); nothing changed
    Repeated,
    /// The whole word was guessed correctly
    Solved,
    /// A wrong whole-word guess; free of charge
    WrongWord,
    /// The round had already ended; nothing changed
    RoundOver,
}

/// One round: a secret word under an attempt budget
#[derive(Debug, Clone)]
pub struct Match {
    word: SecretWord,
    hint: String,
    guessed: FxHashSet<char>,
    guess_order: Vec<char>,
    attempts_left: u8,
}

impl Match {
    /// Start a round on `word` with the given hint
    ///
    /// # Errors
    /// Returns `WordError::Empty` if the word is blank.
    pub fn new(word: &str, hint: impl Into<String>) -> Result<Self, WordError> {
        Ok(Self {
            word: SecretWord::new(word)?,
            hint: hint.into(),
            guessed: FxHashSet::default(),
            guess_order: Vec::new(),
            attempts_left: MAX_ATTEMPTS,
        })
    }

    /// Reuse this round for a new word and hint
    ///
    /// Clears the guessed letters and restores the full attempt budget. On error the
    /// round is left untouched.
    ///
    /// # Errors
    /// Returns `WordError::Empty` if the word is blank.
    pub fn reset(&mut self, word: &str, hint: impl Into<String>) -> Result<(), WordError> {
        *self = Self::new(word, hint)?;
        Ok(())
    }

    /// Render the word with unguessed positions blanked out
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Match;
    ///
    /// let mut round = Match::new("cat", "animal").unwrap();
    /// round.guess('c');
    /// assert_eq!(round.display_progress(), "c _ _");
    /// ```
    #[must_use]
    pub fn display_progress(&self) -> String {
        let mut shown = String::with_capacity(self.word.letter_count() * 2);
        for &ch in self.word.chars() {
            let known = SecretWord::is_revealed(ch) || self.guessed.contains(&ch);
            shown.push(if known { ch } else { BLANK });
            shown.push(' ');
        }
        shown.trim().to_string()
    }

    /// Guess a single letter
    ///
    /// Once the round is over, or if the letter is already known (guessed before, or
    /// whitespace), this changes nothing. A letter that does not occur in the word costs
    /// one attempt.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let letter = fold_case(letter);

        if self.is_game_over() {
            return GuessOutcome::RoundOver;
        }
        if SecretWord::is_revealed(letter) || !self.guessed.insert(letter) {
            return GuessOutcome::Repeated;
        }
        self.guess_order.push(letter);

        match self.word.positions_of(letter).len() {
            0 => {
                // game-over short-circuit above keeps this from underflowing
                self.attempts_left -= 1;
                GuessOutcome::Miss
            }
            occurrences => GuessOutcome::Hit { occurrences },
        }
    }

    /// Guess the whole word
    ///
    /// A correct guess reveals every letter. A wrong guess costs nothing.
    pub fn guess_word(&mut self, candidate: &str) -> GuessOutcome {
        if self.is_game_over() {
            return GuessOutcome::RoundOver;
        }
        if !self.word.matches(candidate) {
            return GuessOutcome::WrongWord;
        }

        for ch in self.word.hidden_letters() {
            if self.guessed.insert(ch) {
                self.guess_order.push(ch);
            }
        }
        GuessOutcome::Solved
    }

    /// True once every hidden character of the word has been guessed
    #[must_use]
    pub fn is_word_guessed(&self) -> bool {
        self.word
            .hidden_letters()
            .all(|ch| self.guessed.contains(&ch))
    }

    /// True once the word is guessed or the attempts are used up
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.is_word_guessed() || self.attempts_left == 0
    }

    #[must_use]
    pub fn state(&self) -> RoundState {
        if self.is_word_guessed() {
            RoundState::Won
        } else if self.attempts_left == 0 {
            RoundState::Lost
        } else {
            RoundState::Active
        }
    }

    #[inline]
    #[must_use]
    pub const fn attempts_left(&self) -> u8 {
        self.attempts_left
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> u8 {
        MAX_ATTEMPTS
    }

    /// The secret word, lowercased
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        self.word.text()
    }

    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word.letter_count()
    }

    /// Distinct guessed letters, in the order they were first guessed
    #[inline]
    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        &self.guess_order
    }

    /// Guessed letters joined for display, e.g. `"c, z, a"`
    #[must_use]
    pub fn display_guessed_letters(&self) -> String {
        self.guess_order
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(word: &str) -> Match {
        Match::new(word, "hint").unwrap()
    }

    #[test]
    fn new_round_starts_active() {
        let m = Match::new("Cat", "animal").unwrap();
        assert_eq!(m.word(), "cat");
        assert_eq!(m.hint(), "animal");
        assert_eq!(m.attempts_left(), MAX_ATTEMPTS);
        assert_eq!(m.max_attempts(), 6);
        assert!(m.guessed_letters().is_empty());
        assert_eq!(m.state(), RoundState::Active);
        assert_eq!(m.display_progress(), "_ _ _");
    }

    #[test]
    fn empty_word_rejected() {
        assert!(matches!(Match::new("", "nothing"), Err(WordError::Empty)));
    }

    #[test]
    fn hit_reveals_every_occurrence() {
        let mut m = round("javascript");
        assert_eq!(m.guess('a'), GuessOutcome::Hit { occurrences: 2 });
        assert_eq!(m.display_progress(), "_ a _ a _ _ _ _ _ _");
        assert_eq!(m.attempts_left(), MAX_ATTEMPTS);
    }

    #[test]
    fn uppercase_letter_is_normalized() {
        let mut m = round("cat");
        assert_eq!(m.guess('C'), GuessOutcome::Hit { occurrences: 1 });
        assert_eq!(m.guessed_letters(), &['c']);
        assert_eq!(m.guess('c'), GuessOutcome::Repeated);
    }

    #[test]
    fn miss_costs_one_attempt() {
        let mut m = round("cat");
        assert_eq!(m.guess('z'), GuessOutcome::Miss);
        assert_eq!(m.attempts_left(), MAX_ATTEMPTS - 1);
    }

    #[test]
    fn repeated_miss_is_free() {
        let mut m = round("cat");
        m.guess('z');
        assert_eq!(m.guess('z'), GuessOutcome::Repeated);
        assert_eq!(m.guess('Z'), GuessOutcome::Repeated);
        assert_eq!(m.attempts_left(), MAX_ATTEMPTS - 1);
        assert_eq!(m.guessed_letters(), &['z']);
    }

    #[test]
    fn six_misses_lose_and_seventh_is_ignored() {
        let mut m = round("dog");
        for letter in ['x', 'y', 'z', 'q', 'w', 'e'] {
            assert_eq!(m.guess(letter), GuessOutcome::Miss);
        }
        assert_eq!(m.attempts_left(), 0);
        assert_eq!(m.state(), RoundState::Lost);
        assert!(m.is_game_over());

        assert_eq!(m.guess('r'), GuessOutcome::RoundOver);
        assert_eq!(m.guess('d'), GuessOutcome::RoundOver);
        assert_eq!(m.attempts_left(), 0);
        assert_eq!(m.guessed_letters().len(), 6);
    }

    #[test]
    fn won_round_ignores_further_guesses() {
        let mut m = round("ab");
        m.guess('a');
        m.guess('b');
        assert_eq!(m.state(), RoundState::Won);

        assert_eq!(m.guess('z'), GuessOutcome::RoundOver);
        assert_eq!(m.guess_word("zz"), GuessOutcome::RoundOver);
        assert_eq!(m.attempts_left(), MAX_ATTEMPTS);
        assert_eq!(m.guessed_letters(), &['a', 'b']);
    }

    #[test]
    fn correct_word_guess_reveals_everything() {
        let mut m = round("dog");
        assert_eq!(m.guess_word("DOG"), GuessOutcome::Solved);
        assert!(m.is_word_guessed());
        assert_eq!(m.display_progress(), "d o g");
        assert_eq!(m.attempts_left(), MAX_ATTEMPTS);
        assert_eq!(m.state(), RoundState::Won);
    }

    #[test]
    fn word_guess_keeps_earlier_letter_order() {
        let mut m = round("cat");
        m.guess('t');
        m.guess_word("cat");
        assert_eq!(m.guessed_letters(), &['t', 'c', 'a']);
    }

    #[test]
    fn wrong_word_guess_is_free() {
        let mut m = round("dog");
        m.guess('x');
        for _ in 0..10 {
            assert_eq!(m.guess_word("cat"), GuessOutcome::WrongWord);
        }
        assert_eq!(m.attempts_left(), MAX_ATTEMPTS - 1);
        assert_eq!(m.guessed_letters(), &['x']);
        assert_eq!(m.state(), RoundState::Active);
    }

    #[test]
    fn word_guess_after_loss_does_not_win() {
        let mut m = round("dog");
        for letter in ['x', 'y', 'z', 'q', 'w', 'e'] {
            m.guess(letter);
        }
        assert_eq!(m.guess_word("dog"), GuessOutcome::RoundOver);
        assert_eq!(m.state(), RoundState::Lost);
        assert!(!m.is_word_guessed());
    }

    #[test]
    fn reset_restores_fresh_round() {
        let mut m = round("dog");
        m.guess('x');
        m.guess('d');
        m.reset("Bird", "flies").unwrap();

        assert_eq!(m.word(), "bird");
        assert_eq!(m.hint(), "flies");
        assert_eq!(m.attempts_left(), MAX_ATTEMPTS);
        assert!(m.guessed_letters().is_empty());
        assert_eq!(m.display_progress(), "_ _ _ _");
    }

    #[test]
    fn failed_reset_keeps_round() {
        let mut m = round("dog");
        m.guess('d');
        assert_eq!(m.reset("", "nothing"), Err(WordError::Empty));
        assert_eq!(m.word(), "dog");
        assert_eq!(m.guessed_letters(), &['d']);
    }

    #[test]
    fn guessed_letters_display_in_insertion_order() {
        let mut m = round("cat");
        m.guess('c');
        m.guess('z');
        m.guess('a');
        m.guess('c');
        assert_eq!(m.display_guessed_letters(), "c, z, a");
    }

    #[test]
    fn inner_spaces_start_revealed() {
        let mut m = round("ab c");
        assert_eq!(m.display_progress(), "_ _   _");
        assert_eq!(m.guess(' '), GuessOutcome::Repeated);
        assert!(m.guessed_letters().is_empty());

        for letter in ['a', 'b', 'c'] {
            m.guess(letter);
        }
        assert!(m.is_word_guessed());
        assert_eq!(m.display_progress(), "a b   c");
        assert_eq!(m.attempts_left(), MAX_ATTEMPTS);
    }

    #[test]
    fn word_guess_with_inner_space() {
        let mut m = round("ice cream");
        assert_eq!(m.guess_word("ICE CREAM"), GuessOutcome::Solved);
        assert_eq!(m.guessed_letters(), &['i', 'c', 'e', 'r', 'a', 'm']);
        assert_eq!(m.state(), RoundState::Won);
    }

    #[test]
    fn outer_whitespace_is_not_part_of_word() {
        let mut m = round("dog ");
        assert_eq!(m.word(), "dog");
        assert_eq!(m.display_progress(), "_ _ _");
        for letter in ['d', 'o', 'g'] {
            m.guess(letter);
        }
        assert_eq!(m.state(), RoundState::Won);
    }

    #[test]
    fn dotted_capital_is_guessable() {
        let mut m = round("İzmir");
        for letter in ['İ', 'z', 'm', 'r'] {
            m.guess(letter);
        }
        assert!(m.is_word_guessed());
        assert_eq!(m.attempts_left(), MAX_ATTEMPTS);
    }
}
