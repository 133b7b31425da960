//! Background word list loading
//!
//! The word list is loaded once per request on a worker thread. The caller
//! keeps a [`PendingWordList`] and polls it from its event loop; dropping the
//! handle discards the result.

use super::loader::{load_from_file, parse_words, words_from_slice};
use super::source::Vocabulary;
use super::WORDS;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

/// Community-maintained list of accepted guesses
pub const DEFAULT_WORD_LIST_URL: &str =
    "https://raw.githubusercontent.com/tabatkins/wordle-list/main/words";

/// Where the vocabulary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListSource {
    /// Compiled-in list
    Embedded,
    /// Newline-separated file on disk
    File(PathBuf),
    /// Newline-separated text served over HTTP(S)
    Url(String),
}

impl FromStr for WordListSource {
    type Err = std::convert::Infallible;

    /// `embedded`/`all` select the built-in list, `remote` the public list,
    /// anything starting with `http://` or `https://` a URL, everything else a path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "embedded" | "all" => Self::Embedded,
            "remote" => Self::Url(DEFAULT_WORD_LIST_URL.to_string()),
            url if url.starts_with("http://") || url.starts_with("https://") => {
                Self::Url(url.to_string())
            }
            path => Self::File(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for WordListSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "built-in list"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Failure to produce a vocabulary
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to download word list: {0}")]
    Http(#[from] reqwest::Error),

    #[error("word list from {0} contains no five-letter words")]
    Empty(String),

    #[error("word list loader stopped before finishing")]
    Aborted,
}

/// Load a vocabulary synchronously
///
/// # Errors
///
/// Returns `LoadError` if the file or URL cannot be read, or if no valid
/// words remain after parsing.
pub fn load(source: &WordListSource, timeout: Duration) -> Result<Vocabulary, LoadError> {
    let words = match source {
        WordListSource::Embedded => words_from_slice(WORDS),
        WordListSource::File(path) => load_from_file(path).map_err(|e| LoadError::Io {
            path: path.clone(),
            source: e,
        })?,
        WordListSource::Url(url) => {
            let client = reqwest::blocking::Client::builder()
                .timeout(timeout)
                .build()?;
            let body = client.get(url).send()?.error_for_status()?.text()?;
            parse_words(&body)
        }
    };

    let vocabulary = Vocabulary::new(words);
    if vocabulary.words().is_empty() {
        return Err(LoadError::Empty(source.to_string()));
    }

    tracing::info!(%source, words = vocabulary.words().len(), "word list loaded");
    Ok(vocabulary)
}

/// Handle to a word list being loaded in the background
#[derive(Debug)]
pub struct PendingWordList {
    source: WordListSource,
    rx: Receiver<Result<Vocabulary, LoadError>>,
}

impl PendingWordList {
    /// Start loading `source` on a worker thread
    #[must_use]
    pub fn spawn(source: WordListSource, timeout: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let worker_source = source.clone();

        tracing::debug!(%source, "starting word list load");
        thread::spawn(move || {
            let result = load(&worker_source, timeout);
            // The receiver is gone if the caller gave up on this load
            if tx.send(result).is_err() {
                tracing::debug!(source = %worker_source, "word list load discarded");
            }
        });

        Self { source, rx }
    }

    #[must_use]
    pub fn source(&self) -> &WordListSource {
        &self.source
    }

    /// Non-blocking check for completion
    ///
    /// Returns `None` while the load is still running.
    pub fn poll(&self) -> Option<Result<Vocabulary, LoadError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(LoadError::Aborted)),
        }
    }

    /// Block until the load finishes
    ///
    /// # Errors
    ///
    /// Returns the loader's `LoadError`, or `LoadError::Aborted` if the
    /// worker exited without reporting.
    pub fn wait(self) -> Result<Vocabulary, LoadError> {
        self.rx.recv().map_err(|_| LoadError::Aborted)?
    }
}
