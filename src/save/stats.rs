//! Rolling statistics across games

use crate::core::MAX_GUESSES;
use crate::game::GameState;
use serde::{Deserialize, Serialize};

/// Aggregated results for one play mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub games_played: u32,
    pub wins: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins by guess count; index 0 holds wins in one guess
    pub guess_distribution: [u32; MAX_GUESSES],
}

impl Statistics {
    /// Fold one finished game into the totals
    ///
    /// `guesses` is the number of rows used; it only matters for wins.
    /// A `Running` outcome is not a finished game and is ignored.
    pub fn record(&mut self, outcome: GameState, guesses: usize) {
        match outcome {
            GameState::Running => return,
            GameState::Won => {
                self.wins = self.wins.saturating_add(1);
                self.current_streak = self.current_streak.saturating_add(1);
                if let Some(slot) = guesses
                    .checked_sub(1)
                    .and_then(|i| self.guess_distribution.get_mut(i))
                {
                    *slot = slot.saturating_add(1);
                }
            }
            GameState::Lost => self.current_streak = 0,
        }

        self.games_played = self.games_played.saturating_add(1);
        self.max_streak = self.max_streak.max(self.current_streak);
    }

    /// Wins for a given guess count (1-based)
    #[must_use]
    pub fn wins_in(&self, guesses: usize) -> u32 {
        guesses
            .checked_sub(1)
            .and_then(|i| self.guess_distribution.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games_played) * 100.0
        }
    }
}
