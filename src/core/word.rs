//! Secret word representation
//!
//! A `SecretWord` stores the lowercased word along with letter position indices for
//! reveal and hit counting.

use rustc_hash::FxHashMap;
use std::fmt;

/// The word a round is played on, with letter position tracking
///
/// Stores the word as characters and maintains a map of letter positions so repeated
/// letters are revealed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    chars: Vec<char>,
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// The word is empty or contains only whitespace
    Empty,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Secret word must contain at least one character"),
        }
    }
}

impl std::error::Error for WordError {}

/// Lowercase a single character
///
/// Characters whose lowercase form expands to several characters keep only the first
/// (`'İ'` folds to `'i'`). Secret words and guesses both go through this.
#[inline]
#[must_use]
pub fn fold_case(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}

impl SecretWord {
    /// Create a new `SecretWord` from a string
    ///
    /// Leading and trailing whitespace is dropped; inner whitespace is kept and starts
    /// out revealed.
    ///
    /// # Errors
    /// Returns `WordError::Empty` if the word is empty or whitespace only. A blank word
    /// would count as guessed before the first letter is played.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new(" JavaScript ").unwrap();
    /// assert_eq!(word.text(), "javascript");
    ///
    /// assert!(SecretWord::new("   ").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let raw: String = text.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        // Same folding as guessed letters, so every stored character can be guessed
        let chars: Vec<char> = trimmed.chars().map(fold_case).collect();
        let text: String = chars.iter().collect();

        // Build position map for fast lookup
        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's characters in order
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.chars.len()
    }

    /// Characters that are shown from the start and never need guessing
    #[inline]
    #[must_use]
    pub fn is_revealed(ch: char) -> bool {
        ch.is_whitespace()
    }

    /// Distinct characters the player has to find, in word order
    pub fn hidden_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.chars
            .iter()
            .enumerate()
            .filter(|&(i, &ch)| !Self::is_revealed(ch) && self.char_positions[&ch][0] == i)
            .map(|(_, &ch)| ch)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Check a whole-word guess, ignoring case and surrounding whitespace
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        candidate
            .trim()
            .chars()
            .map(fold_case)
            .eq(self.chars.iter().copied())
    }
}
