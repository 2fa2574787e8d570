//! Per-letter feedback state
//!
//! The variants are declared in ascending rank so the derived `Ord` gives the
//! display priority used by the keyboard: `Empty < Absent < Present < Correct`.

use serde::{Deserialize, Serialize};

/// Classification of one letter of a guess
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterState {
    /// Unfilled cell, or a letter not seen in any guess yet
    #[default]
    Empty,
    /// Letter does not occur (or all its occurrences are already accounted for)
    Absent,
    /// Letter occurs at another position
    Present,
    /// Letter is at the right position
    Correct,
}

impl LetterState {
    /// Numeric rank used for comparisons (0-3)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }

    /// Whether this state carries feedback (anything but `Empty`)
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        !matches!(self, Self::Empty)
    }

    /// Symbol used in share strings
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Empty => '⬜',
        }
    }
}
