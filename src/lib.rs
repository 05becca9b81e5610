//! Wordle Reload
//!
//! A terminal word-guessing game: pick a three- or five-letter board, guess
//! the randomly selected target word within the attempt and time budgets, and
//! watch the per-character feedback accumulate across attempts.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_reload::core::{FeedbackRow, Word};
//!
//! // Score a guess against a target
//! let target = Word::new("cat").unwrap();
//! let guess = Word::new("dot").unwrap();
//!
//! let row = FeedbackRow::score(&target, &guess);
//! assert_eq!(row.text(), "**T");
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Round and statistics state
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
