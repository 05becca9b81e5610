//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear rules.

mod board;
mod feedback;
mod word;

pub use board::BoardSize;
pub use feedback::{FeedbackRow, Mark};
pub use word::{Word, WordError};
