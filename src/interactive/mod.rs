//! Interactive TUI interface
//!
//! Full-screen game with a clickable on-screen keyboard.

pub mod app;
pub mod input;
pub mod keyboard;
pub mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
pub use input::{InputAction, Phase};
