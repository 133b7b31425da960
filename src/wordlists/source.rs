//! Word sources
//!
//! A word source answers two questions for the engine: is this guess an
//! accepted word, and which word should be the secret.

use crate::core::Word;
use rand::RngCore;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Supplies the vocabulary and the secret word
pub trait WordSource {
    /// Whether `word` is an accepted guess
    fn contains(&self, word: &Word) -> bool;

    /// Draw a secret word from the vocabulary
    ///
    /// Returns `None` when the source has no words.
    fn pick_secret(&self, rng: &mut dyn RngCore) -> Option<Word>;

    /// Number of accepted words
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Deduplicated set of accepted words
///
/// Keeps insertion order for secret selection and a hash set for lookups.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl Vocabulary {
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut vocabulary = Self::default();
        for word in words {
            if vocabulary.lookup.insert(word) {
                vocabulary.words.push(word);
            }
        }
        vocabulary
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl FromIterator<Word> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl WordSource for Vocabulary {
    fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    fn pick_secret(&self, rng: &mut dyn RngCore) -> Option<Word> {
        self.words.choose(rng).copied()
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn vocab(words: &[&str]) -> Vocabulary {
        words.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn vocabulary_deduplicates() {
        let v = vocab(&["crane", "CRANE", "slate"]);
        assert_eq!(v.len(), 2);
        assert_eq!(v.words()[0].text(), "crane");
        assert_eq!(v.words()[1].text(), "slate");
    }

    #[test]
    fn vocabulary_lookup_ignores_case() {
        let v = vocab(&["crane"]);
        assert!(v.contains(&Word::new("CRANE").unwrap()));
        assert!(!v.contains(&Word::new("slate").unwrap()));
    }

    #[test]
    fn secret_is_member() {
        let v = vocab(&["crane", "slate", "trace", "speed"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let secret = v.pick_secret(&mut rng).unwrap();
            assert!(v.contains(&secret));
        }
    }

    #[test]
    fn seeded_picks_repeat() {
        let v = vocab(&["crane", "slate", "trace", "speed", "erase"]);
        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..5)
                .map(|_| v.pick_secret(&mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(42), picks(42));
    }

    #[test]
    fn empty_vocabulary_has_no_secret() {
        let v = Vocabulary::default();
        assert!(v.is_empty());
        assert_eq!(v.pick_secret(&mut StdRng::seed_from_u64(1)), None);
    }
}
