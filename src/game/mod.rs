//! Game rules
//!
//! The guess engine and the events it emits. Front-ends drive the engine
//! and read its board and state; they never mutate either directly.

mod engine;
mod event;
mod stats;

pub use engine::{DEFAULT_MAX_ATTEMPTS, GameState, GameStatus, GuessEngine};
pub use event::GameEvent;
pub use stats::Statistics;
pub use crate::error::{GameError, IllegalOperation};
