//! Change notifications emitted by the engine
//!
//! Every successful engine operation returns one of these. Front-ends use
//! them to react (messages, statistics) and redraw from the engine state.

use super::engine::GameStatus;
use crate::core::{Feedback, Word};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh board with `attempts` rows and a new secret
    NewGame { attempts: usize },
    LetterAppended { row: usize, col: usize, letter: char },
    LetterDeleted { row: usize, col: usize },
    /// A row was submitted and colored
    RowEvaluated {
        row: usize,
        guess: Word,
        feedback: Feedback,
        status: GameStatus,
    },
}

impl GameEvent {
    /// The status a submission moved the game into, if it ended the game
    #[must_use]
    pub const fn finished(&self) -> Option<GameStatus> {
        match self {
            Self::RowEvaluated { status, .. } if status.is_over() => Some(*status),
            _ => None,
        }
    }
}
