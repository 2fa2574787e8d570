//! Wordle CLI
//!
//! A terminal word-guessing game: six tries to find a five-letter word, with
//! per-letter feedback, a daily puzzle that resumes across restarts, and
//! rolling statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_cli::game::{Action, GameState, PlayMode, Session};
//! use wordle_cli::save::MemoryStore;
//! use wordle_cli::wordlists::WordList;
//!
//! let words = WordList::new(&["broad"], &["crane"]);
//! let store = MemoryStore::new();
//! let mut session = Session::start(PlayMode::Daily { day: 0 }, &words, &store);
//!
//! for action in Action::parse_line("broad") {
//!     session.handle(action);
//! }
//! assert_eq!(session.game_state(), GameState::Won);
//! assert_eq!(store.writes(), 1);
//! ```

// Core domain types
pub mod core;

// Grid, keyboard and session state machine
pub mod game;

// Save records and statistics
pub mod save;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
