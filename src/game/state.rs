//! Session lifecycle and submission states

use serde::{Deserialize, Serialize};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    #[default]
    Running,
    Won,
    Lost,
}

impl GameState {
    /// Won or lost; no further grid mutation is accepted
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Outcome of the last submission attempt
///
/// Rejections are transient: they are cleared by the next accepted input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WordState {
    #[default]
    Ok,
    NotEnoughLetters,
    NotInList,
}

impl WordState {
    /// Player-facing message for a rejection
    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Ok => None,
            Self::NotEnoughLetters => Some("Not enough letters"),
            Self::NotInList => Some("Not in word list"),
        }
    }
}
