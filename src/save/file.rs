//! Persisted save record

use super::Statistics;
use crate::game::{GameState, GridSnapshot};
use serde::{Deserialize, Serialize};

/// Everything kept between runs for one play mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFile {
    /// Identifier of the last finished puzzle; `None` until the first game ends
    #[serde(default)]
    pub last_game_id: Option<u64>,
    #[serde(default)]
    pub last_game_status: GameState,
    #[serde(default)]
    pub last_game_grid: GridSnapshot,
    #[serde(default)]
    pub statistics: Statistics,
}

impl SaveFile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this save belongs to the puzzle `id`
    #[must_use]
    pub fn is_for(&self, id: u64) -> bool {
        self.last_game_id == Some(id)
    }
}
