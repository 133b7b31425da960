//! Terminal output formatting
//!
//! Colored tiles and summaries for the line-based commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_feedback, print_outcome, print_statistics};
