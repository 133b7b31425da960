//! Guess feedback calculation and representation
//!
//! Each letter of an evaluated guess receives one color:
//! - `Correct`: right letter, right position
//! - `Present`: letter is in the secret, but elsewhere
//! - `Absent`: letter is not in the secret, or every occurrence is already accounted for
//!
//! `Unset` only exists on cells that have not been submitted yet.

use super::word::{WORD_LEN, Word};

/// Color of a single tile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellColor {
    #[default]
    Unset,
    Correct,
    Present,
    Absent,
}

impl CellColor {
    /// Ranking used when several guesses reveal the same letter:
    /// `Correct` beats `Present` beats `Absent` beats `Unset`.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Unset => 0,
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }

    /// Emoji square for sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Unset => '⬜',
        }
    }
}

/// Feedback for one evaluated guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([CellColor; WORD_LEN]);

impl Feedback {
    /// All letters in the right place
    pub const SOLVED: Self = Self([CellColor::Correct; WORD_LEN]);

    /// Wrap an explicit color array
    #[must_use]
    pub const fn new(colors: [CellColor; WORD_LEN]) -> Self {
        Self(colors)
    }

    /// Evaluate `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Every position starts out `Absent`
    /// 2. First pass: exact matches become `Correct` and their secret letter is consumed
    /// 3. Second pass: each remaining position becomes `Present` if its letter is still
    ///    unconsumed in the secret; the leftmost unconsumed occurrence is consumed
    ///
    /// # Examples
    /// ```
    /// use wordy::core::{CellColor::*, Feedback, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("trace").unwrap();
    ///
    /// let feedback = Feedback::evaluate(&guess, &secret);
    /// assert_eq!(feedback.colors(), &[Absent, Correct, Correct, Present, Correct]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        let guess = guess.letters();
        let mut pool: [Option<u8>; WORD_LEN] = secret.letters().map(Some);
        let mut colors = [CellColor::Absent; WORD_LEN];

        for (i, color) in colors.iter_mut().enumerate() {
            if pool[i] == Some(guess[i]) {
                *color = CellColor::Correct;
                pool[i] = None;
            }
        }

        for (i, color) in colors.iter_mut().enumerate() {
            if *color != CellColor::Absent {
                continue;
            }
            if let Some(slot) = pool.iter_mut().find(|slot| **slot == Some(guess[i])) {
                *color = CellColor::Present;
                *slot = None;
            }
        }

        Self(colors)
    }

    /// Per-letter colors, left to right
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[CellColor; WORD_LEN] {
        &self.0
    }

    /// Check if every letter is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Number of tiles with the given color
    #[must_use]
    pub fn count(&self, color: CellColor) -> usize {
        self.0.iter().filter(|&&c| c == color).count()
    }

    /// Emoji string like "⬛🟩🟩🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}
