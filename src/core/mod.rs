//! Core domain types for the game
//!
//! This module contains the fundamental domain types: words, per-letter
//! feedback states and the scoring algorithm. Everything here is pure and
//! free of I/O.

mod feedback;
mod letter;
mod word;

pub use feedback::Feedback;
pub use letter::LetterState;
pub use word::{Word, WordError};

/// Number of letters in every secret word and guess
pub const WORD_LENGTH: usize = 5;

/// Number of guesses a player gets per session
pub const MAX_GUESSES: usize = 6;
