use std::path::PathBuf;

/// Why an engine operation was refused without changing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalOperation {
    #[error("the game is over")]
    GameOver,

    #[error("the row is already full")]
    RowFull,

    #[error("the row is empty")]
    RowEmpty,

    #[error("the row is not complete")]
    RowIncomplete,

    #[error("{0:?} is not a letter")]
    NotALetter(char),
}

/// Errors returned by game engine operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("word list is not loaded yet")]
    NotReady,

    #[error("{0} is not in the word list")]
    InvalidWord(String),

    #[error("illegal operation: {0}")]
    IllegalOperation(#[from] IllegalOperation),
}

impl GameError {
    /// Whether the player should be told about this error.
    ///
    /// Only rejected words are reported; everything else is a silent no-op.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(self, Self::InvalidWord(_))
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
