//! Game state engine
//!
//! The grid and keyboard models, play modes, and the session state machine
//! that ties scoring, persistence and player input together.

mod grid;
mod keyboard;
mod mode;
mod session;
mod state;

pub use grid::{Grid, GridError, GridItem, GridSnapshot};
pub use keyboard::Keyboard;
pub use mode::PlayMode;
pub use session::{Action, Response, Session};
pub use state::{GameState, WordState};
