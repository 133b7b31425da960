//! Wordy
//!
//! A five-letter word-guessing game with a terminal UI and a line mode.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordy::game::GuessEngine;
//! use wordy::wordlists::{Vocabulary, WORDS};
//!
//! let vocabulary: Vocabulary = wordy::wordlists::loader::words_from_slice(WORDS)
//!     .into_iter()
//!     .collect();
//! let mut engine = GuessEngine::with_source(vocabulary, 6, Some(42)).unwrap();
//!
//! for letter in "crane".chars() {
//!     engine.append_letter(letter).unwrap();
//! }
//! let event = engine.submit_guess().unwrap();
//! println!("{event:?}");
//! ```

// Core domain types
pub mod core;

// Game rules and state
pub mod game;

// Word lists
pub mod wordlists;

// Configuration file
pub mod config;

// Error types
pub mod error;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
