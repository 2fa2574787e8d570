//! Text output
//!
//! Share strings and plain-text summaries of a session for the terminal.

pub mod share;
pub mod summary;
