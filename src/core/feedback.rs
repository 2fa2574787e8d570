//! Guess scoring
//!
//! A `Feedback` holds one `LetterState` per position of a guess. It is
//! produced by [`Feedback::score`], which implements the exact game rules
//! including duplicate letters.

use super::{LetterState, WORD_LENGTH, Word};

/// Per-position feedback for a scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterState; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const SOLVED: Self = Self([LetterState::Correct; WORD_LENGTH]);

    /// Wrap raw states
    #[inline]
    #[must_use]
    pub const fn new(states: [LetterState; WORD_LENGTH]) -> Self {
        Self(states)
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and claim that occurrence
    ///    of the letter from the secret's pool
    /// 2. Second pass: mark remaining positions Present while the pool still
    ///    has unclaimed occurrences of the letter, otherwise Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_cli::core::{Feedback, LetterState::*, Word};
    ///
    /// let secret = Word::new("allow").unwrap();
    /// let guess = Word::new("llama").unwrap();
    ///
    /// // Only two L's exist in ALLOW, so only two L's light up
    /// let feedback = Feedback::score(&secret, &guess);
    /// assert_eq!(feedback.states(), &[Present, Correct, Present, Absent, Absent]);
    /// ```
    #[must_use]
    pub fn score(secret: &Word, guess: &Word) -> Self {
        let mut result = [LetterState::Absent; WORD_LENGTH];
        let mut available = secret.char_counts();

        // First pass: exact position matches
        for (i, (&s, &g)) in secret.chars().iter().zip(guess.chars()).enumerate() {
            if s == g {
                result[i] = LetterState::Correct;
                if let Some(count) = available.get_mut(&s) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position
        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == LetterState::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                result[i] = LetterState::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// States in position order
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&s| s == LetterState::Correct)
    }

    /// Count positions with the given state
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }
}
