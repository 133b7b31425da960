//! Word lists and word sources
//!
//! Provides the embedded vocabulary, file/URL loaders, and the `WordSource`
//! seam the game engine draws secrets from.

mod embedded;
pub mod fetch;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use fetch::{LoadError, PendingWordList, WordListSource};
pub use source::{Vocabulary, WordSource};
