//! Word list loading utilities
//!
//! Provides functions to load word lists from files, downloaded text, or
//! embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Parse newline-separated words
///
/// Blank lines and entries that are not five ASCII letters are skipped.
///
/// # Examples
/// ```
/// use wordy::wordlists::loader::parse_words;
///
/// let words = parse_words("crane\n\nSLATE\nnope\n");
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            let word = Word::new(trimmed).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    if skipped > 0 {
        tracing::debug!(skipped, kept = words.len(), "skipped malformed word list entries");
    }
    words
}

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordy::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordy::wordlists::loader::words_from_slice;
/// use wordy::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
