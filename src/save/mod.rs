//! Session persistence
//!
//! Save records are kept per play mode. The engine reads one when a session
//! starts and writes one when a session first reaches a terminal state.

mod file;
mod stats;
mod store;

pub use file::SaveFile;
pub use stats::Statistics;
pub use store::{FileStore, MemoryStore, SaveError, SaveStore};
