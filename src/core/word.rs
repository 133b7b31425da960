//! Five-letter word representation
//!
//! A `Word` is stored as lowercase ASCII bytes so it can be hashed and copied
//! cheaply; it is displayed uppercase the way tiles show it.

use std::fmt;

/// Number of letters in every word of the game
pub const WORD_LEN: usize = 5;

/// A validated five-letter word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LEN} letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string, ignoring case
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordy::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.to_string(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = text.trim();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let bytes = text.as_bytes();
        let letters: [u8; WORD_LEN] = bytes
            .try_into()
            .map_err(|_| WordError::InvalidLength(bytes.len()))?;

        if !letters.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            letters: letters.map(|b| b.to_ascii_lowercase()),
        })
    }

    /// Build a word from already-collected letters, e.g. the cells of a row
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacters` if any letter is not A-Z.
    pub fn from_letters(letters: [char; WORD_LEN]) -> Result<Self, WordError> {
        let mut bytes = [0u8; WORD_LEN];
        for (slot, ch) in bytes.iter_mut().zip(letters) {
            if !ch.is_ascii_alphabetic() {
                return Err(WordError::InvalidCharacters);
            }
            *slot = (ch as u8).to_ascii_lowercase();
        }
        Ok(Self { letters: bytes })
    }

    /// The word in lowercase, as stored in the vocabulary
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|&b| char::from(b)).collect()
    }

    /// Lowercase letter bytes
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// Uppercase letter at `position`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        char::from(self.letters[position].to_ascii_uppercase())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.letters {
            write!(f, "{}", char::from(b.to_ascii_uppercase()))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
