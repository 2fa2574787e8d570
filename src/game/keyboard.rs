//! Best-known state per letter, for keyboard hints

use crate::core::{Feedback, LetterState, Word};

/// Best state observed for each letter A-Z across all scored guesses
///
/// A letter's state only ever moves up the `LetterState` ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    states: [LetterState; 26],
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn index(letter: char) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| usize::from(letter.to_ascii_uppercase() as u8 - b'A'))
    }

    /// Record `state` for `letter` if it ranks above what is stored
    ///
    /// Non-letters are ignored.
    pub fn update(&mut self, letter: char, state: LetterState) {
        if let Some(i) = Self::index(letter)
            && state > self.states[i]
        {
            self.states[i] = state;
        }
    }

    /// Fold a scored guess into the map
    pub fn apply(&mut self, word: &Word, feedback: &Feedback) {
        for (&letter, &state) in word.chars().iter().zip(feedback.states()) {
            self.update(char::from(letter), state);
        }
    }

    /// Stored state for `letter`; `Empty` when unseen
    #[must_use]
    pub fn state(&self, letter: char) -> LetterState {
        Self::index(letter).map_or(LetterState::Empty, |i| self.states[i])
    }

    /// Letters with their states, A to Z
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        (b'A'..=b'Z').map(char::from).zip(self.states.iter().copied())
    }
}
