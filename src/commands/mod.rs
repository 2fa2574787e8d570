//! Command implementations

pub mod play;
pub mod stats;

pub use play::run_play;
pub use stats::{print_last_share, print_statistics};
