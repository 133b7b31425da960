//! Core domain types for the game
//!
//! Words, tile colors and the board. Everything here is pure and
//! deterministic; game rules built on top live in `crate::game`.

mod board;
mod feedback;
mod word;

pub use board::{Board, Cell, Row};
pub use feedback::{CellColor, Feedback};
pub use word::{WORD_LEN, Word, WordError};
