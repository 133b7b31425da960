//! Guess engine: letter entry, evaluation and game state transitions
//!
//! The engine owns the board and the state of the current game. It is not
//! ready until a word source has been attached; before that every operation
//! fails with `GameError::NotReady`.

use super::event::GameEvent;
use crate::core::{Board, Feedback, WORD_LEN, Word};
use crate::error::{GameError, IllegalOperation};
use crate::wordlists::WordSource;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Standard number of guesses per game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Draws allowed when trying to avoid repeating the previous secret
const REDRAW_LIMIT: usize = 64;

/// Outcome of the current game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Cursor and outcome of the current game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    secret: Word,
    active_row: usize,
    active_col: usize,
    attempts_used: usize,
    status: GameStatus,
}

impl GameState {
    fn new(secret: Word) -> Self {
        Self {
            secret,
            active_row: 0,
            active_col: 0,
            attempts_used: 0,
            status: GameStatus::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn active_row(&self) -> usize {
        self.active_row
    }

    #[inline]
    #[must_use]
    pub const fn active_col(&self) -> usize {
        self.active_col
    }

    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }
}

/// The game rules engine
///
/// Generic over the word source so tests can pin the secret.
pub struct GuessEngine<S: WordSource> {
    source: Option<S>,
    board: Board,
    state: Option<GameState>,
    max_attempts: usize,
    rng: StdRng,
    version: u64,
}

impl<S: WordSource> GuessEngine<S> {
    /// Create an engine with no word source attached
    ///
    /// A `seed` makes secret selection reproducible.
    #[must_use]
    pub fn new(max_attempts: usize, seed: Option<u64>) -> Self {
        let max_attempts = max_attempts.max(1);
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Self {
            source: None,
            board: Board::new(max_attempts),
            state: None,
            max_attempts,
            rng,
            version: 0,
        }
    }

    /// Create an engine and start a game with `source`
    ///
    /// # Errors
    /// Returns `GameError::NotReady` if the source has no words.
    pub fn with_source(
        source: S,
        max_attempts: usize,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        let mut engine = Self::new(max_attempts, seed);
        engine.attach(source)?;
        Ok(engine)
    }

    /// Install a freshly loaded word source and start a new game
    ///
    /// # Errors
    /// Returns `GameError::NotReady` if the source has no words; the engine
    /// is left without a source.
    pub fn attach(&mut self, source: S) -> Result<GameEvent, GameError> {
        tracing::debug!(words = source.len(), "word source attached");
        self.source = Some(source);
        self.state = None;
        self.restart()
    }

    /// Start a new game with a new secret from the current source
    ///
    /// Allowed in any status, including after the game is over.
    ///
    /// # Errors
    /// Returns `GameError::NotReady` if no usable source is attached.
    pub fn restart(&mut self) -> Result<GameEvent, GameError> {
        let Some(source) = self.source.as_ref() else {
            return Err(GameError::NotReady);
        };

        let previous = self.state.as_ref().map(|s| s.secret);
        let mut secret = source.pick_secret(&mut self.rng);
        if source.len() > 1 {
            for _ in 0..REDRAW_LIMIT {
                if secret != previous {
                    break;
                }
                secret = source.pick_secret(&mut self.rng);
            }
        }

        let Some(secret) = secret else {
            self.source = None;
            self.state = None;
            return Err(GameError::NotReady);
        };

        self.board = Board::new(self.max_attempts);
        self.state = Some(GameState::new(secret));
        self.version += 1;
        tracing::debug!(attempts = self.max_attempts, "new game started");
        tracing::trace!(%secret, "secret drawn");

        Ok(GameEvent::NewGame {
            attempts: self.max_attempts,
        })
    }

    /// Type a letter into the next free cell of the active row
    ///
    /// # Errors
    /// `NotReady`, or `IllegalOperation` when the game is over, the row is
    /// full, or `letter` is not A-Z. Nothing changes on error.
    pub fn append_letter(&mut self, letter: char) -> Result<GameEvent, GameError> {
        let state = playable(&mut self.state)?;
        if !letter.is_ascii_alphabetic() {
            return Err(IllegalOperation::NotALetter(letter).into());
        }
        if state.active_col >= WORD_LEN {
            return Err(IllegalOperation::RowFull.into());
        }

        let letter = letter.to_ascii_uppercase();
        let (row, col) = (state.active_row, state.active_col);
        self.board.row_mut(row).set_letter(col, Some(letter));
        state.active_col += 1;
        self.version += 1;

        Ok(GameEvent::LetterAppended { row, col, letter })
    }

    /// Clear the last typed letter of the active row
    ///
    /// # Errors
    /// `NotReady`, or `IllegalOperation` when the game is over or the row is
    /// empty. Nothing changes on error.
    pub fn delete_letter(&mut self) -> Result<GameEvent, GameError> {
        let state = playable(&mut self.state)?;
        if state.active_col == 0 {
            return Err(IllegalOperation::RowEmpty.into());
        }

        state.active_col -= 1;
        let (row, col) = (state.active_row, state.active_col);
        self.board.row_mut(row).set_letter(col, None);
        self.version += 1;

        Ok(GameEvent::LetterDeleted { row, col })
    }

    /// Evaluate the active row against the secret
    ///
    /// On success the row is colored, the attempt is counted, and the game
    /// either ends or moves to the next row.
    ///
    /// # Errors
    /// - `NotReady` before a source is attached
    /// - `IllegalOperation` when the game is over or the row is incomplete
    /// - `InvalidWord` when the row is not in the vocabulary; the row stays
    ///   editable and nothing changes
    pub fn submit_guess(&mut self) -> Result<GameEvent, GameError> {
        let state = playable(&mut self.state)?;
        if state.active_col < WORD_LEN {
            return Err(IllegalOperation::RowIncomplete.into());
        }
        let source = self.source.as_ref().ok_or(GameError::NotReady)?;

        let row = state.active_row;
        let guess = self
            .board
            .row(row)
            .and_then(|r| r.word())
            .ok_or(IllegalOperation::RowIncomplete)?;

        if !source.contains(&guess) {
            tracing::debug!(%guess, "rejected guess not in vocabulary");
            return Err(GameError::InvalidWord(guess.to_string()));
        }

        let feedback = Feedback::evaluate(&guess, &state.secret);
        self.board.row_mut(row).apply(&feedback);
        state.attempts_used += 1;

        if feedback.is_solved() {
            state.status = GameStatus::Won;
            tracing::info!(attempts = state.attempts_used, "game won");
        } else if state.attempts_used >= self.max_attempts {
            state.status = GameStatus::Lost;
            tracing::info!(secret = %state.secret, "game lost");
        } else {
            state.active_row += 1;
            state.active_col = 0;
        }
        self.version += 1;

        Ok(GameEvent::RowEvaluated {
            row,
            guess,
            feedback,
            status: state.status,
        })
    }

    #[inline]
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn status(&self) -> Option<GameStatus> {
        self.state.as_ref().map(GameState::status)
    }

    #[inline]
    #[must_use]
    pub const fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Bumped by every state change; renderers redraw when it moves
    #[inline]
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }
}

/// The current game, if input is accepted right now
fn playable(state: &mut Option<GameState>) -> Result<&mut GameState, GameError> {
    let state = state.as_mut().ok_or(GameError::NotReady)?;
    if state.status.is_over() {
        return Err(IllegalOperation::GameOver.into());
    }
    Ok(state)
}
