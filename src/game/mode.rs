//! Play modes and puzzle identifiers

use chrono::{Local, NaiveDate};
use std::fmt;

/// Which puzzle a session plays
///
/// Daily puzzles are identified by their day number and are persisted; free
/// play is identified by its RNG seed and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayMode {
    Daily { day: u64 },
    Random { seed: u64 },
}

impl PlayMode {
    /// Date of daily puzzle 0
    #[must_use]
    pub fn epoch() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 6, 19).unwrap_or(NaiveDate::MIN)
    }

    /// Today's daily puzzle in the local time zone
    #[must_use]
    pub fn today() -> Self {
        Self::Daily {
            day: Self::day_number(Local::now().date_naive()),
        }
    }

    /// Free play with a fresh random seed
    #[must_use]
    pub fn random() -> Self {
        Self::Random {
            seed: rand::random(),
        }
    }

    /// Days between the epoch and `date`, clamped at zero
    #[must_use]
    pub fn day_number(date: NaiveDate) -> u64 {
        u64::try_from((date - Self::epoch()).num_days()).unwrap_or(0)
    }

    /// Puzzle identifier within the mode
    #[must_use]
    pub const fn id(self) -> u64 {
        match self {
            Self::Daily { day } => day,
            Self::Random { seed } => seed,
        }
    }

    /// Key the save store files this mode under
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Daily { .. } => "daily",
            Self::Random { .. } => "random",
        }
    }

    /// Whether sessions in this mode are saved and resumed
    #[must_use]
    pub const fn is_persistent(self) -> bool {
        matches!(self, Self::Daily { .. })
    }

    /// The next puzzle in the same mode
    ///
    /// Daily play stays on the same day; free play draws a new seed.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Daily { .. } => self,
            Self::Random { .. } => Self::random(),
        }
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily { day } => write!(f, "#{day}"),
            Self::Random { seed } => write!(f, "random {seed:016x}"),
        }
    }
}
