use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::game::DEFAULT_MAX_ATTEMPTS;
use crate::wordlists::WordListSource;

/// Upper bound on rows so the board still fits a terminal.
pub const MAX_ATTEMPTS_LIMIT: usize = 12;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub words: WordsConfig,
}

/// Rules of a single game.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of guesses (board rows) per game
    pub max_attempts: usize,
    /// Fixed RNG seed for reproducible secrets
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

/// Where the vocabulary is loaded from.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WordsConfig {
    /// `embedded`, `remote`, a URL, or a file path
    pub source: String,
    pub fetch_timeout_secs: u64,
}

impl Default for WordsConfig {
    fn default() -> Self {
        WordsConfig {
            source: "embedded".to_string(),
            fetch_timeout_secs: 10,
        }
    }
}

impl WordsConfig {
    #[must_use]
    pub fn source(&self) -> WordListSource {
        match self.source.parse() {
            Ok(source) => source,
            Err(never) => match never {},
        }
    }

    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_ATTEMPTS_LIMIT).contains(&self.game.max_attempts) {
            return Err(ConfigError::Validation(format!(
                "game.max_attempts must be between 1 and {MAX_ATTEMPTS_LIMIT}"
            )));
        }
        if self.words.source.trim().is_empty() {
            return Err(ConfigError::Validation(
                "words.source must not be empty".into(),
            ));
        }
        if self.words.fetch_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "words.fetch_timeout_secs must be > 0".into(),
            ));
        }
        Ok(())
    }
}
