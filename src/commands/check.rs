//! Feedback check command
//!
//! Evaluates one guess against a given secret without playing a game.

use crate::core::{Feedback, Word, WordError};

/// Result of checking a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `secret`
///
/// Neither word has to be in a word list; both must be 5 ASCII letters.
///
/// # Errors
///
/// Returns a `WordError` if either word is malformed.
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    let feedback = Feedback::evaluate(&guess, &secret);

    tracing::debug!(%secret, %guess, feedback = %feedback.to_emoji(), "checked guess");
    Ok(CheckResult {
        secret,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellColor::{Absent, Correct, Present};

    #[test]
    fn test_check_duplicate_letters() {
        let result = check_guess("SPEED", "erase").unwrap();
        assert_eq!(
            result.feedback.colors(),
            &[Present, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn test_check_mixed() {
        let result = check_guess("crane", "trace").unwrap();
        assert_eq!(
            result.feedback.colors(),
            &[Absent, Correct, Correct, Present, Correct]
        );
        assert_eq!(result.secret.to_string(), "CRANE");
    }

    #[test]
    fn test_check_solved() {
        let result = check_guess("about", "ABOUT").unwrap();
        assert!(result.feedback.is_solved());
    }

    #[test]
    fn test_check_invalid_words() {
        assert!(matches!(
            check_guess("toolong", "crane"),
            Err(WordError::InvalidLength(7))
        ));
        assert!(check_guess("crane", "cr4ne").is_err());
    }
}
