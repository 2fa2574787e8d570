//! Word lists and the oracles built on them
//!
//! The engine only needs two answers from the outside world: whether a guess
//! is an acceptable word, and which secret word a puzzle uses. Both are traits
//! here, implemented by [`WordList`] over the embedded lists.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use crate::game::PlayMode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Answers "is this a valid guess word?"
pub trait Dictionary {
    fn is_valid_word(&self, candidate: &str) -> bool;
}

/// Picks the secret word for a puzzle
///
/// The same mode and identifier must always give the same word.
pub trait WordSource {
    fn secret_for(&self, mode: PlayMode) -> Word;
}

/// Secret words plus the set of accepted guesses
#[derive(Debug, Clone)]
pub struct WordList {
    answers: Vec<Word>,
    accepted: FxHashSet<String>,
}

impl WordList {
    /// Build from explicit lists
    ///
    /// Every answer is also accepted as a guess. Invalid entries are skipped.
    /// Falls back to the embedded answers if `answers` has no valid word.
    #[must_use]
    pub fn new(answers: &[&str], allowed: &[&str]) -> Self {
        let mut answers = loader::words_from_slice(answers);
        if answers.is_empty() {
            answers = loader::words_from_slice(ANSWERS);
        }

        let accepted = answers
            .iter()
            .map(|w| w.text().to_string())
            .chain(
                loader::words_from_slice(allowed)
                    .into_iter()
                    .map(|w| w.text().to_string()),
            )
            .collect();

        Self { answers, accepted }
    }

    /// Accept additional guess words
    pub fn extend_accepted(&mut self, words: impl IntoIterator<Item = Word>) {
        self.accepted
            .extend(words.into_iter().map(|w| w.text().to_string()));
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::new(ANSWERS, ALLOWED)
    }
}

impl Dictionary for WordList {
    fn is_valid_word(&self, candidate: &str) -> bool {
        self.accepted.contains(&candidate.to_ascii_uppercase())
    }
}

impl WordSource for WordList {
    fn secret_for(&self, mode: PlayMode) -> Word {
        match mode {
            PlayMode::Daily { day } => {
                let index = (day % self.answers.len() as u64) as usize;
                self.answers[index].clone()
            }
            PlayMode::Random { seed } => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.answers
                    .choose(&mut rng)
                    .unwrap_or(&self.answers[0])
                    .clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert!(Word::new(word).is_ok(), "'{word}' is not a valid word");
            assert_eq!(word, word.to_ascii_uppercase());
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        let allowed: FxHashSet<_> = ALLOWED.iter().collect();
        for answer in ANSWERS {
            assert!(allowed.contains(answer), "Answer '{answer}' not in allowed list");
        }
    }

    #[test]
    fn dictionary_is_case_insensitive() {
        let words = WordList::default();
        assert!(words.is_valid_word("crane"));
        assert!(words.is_valid_word("CRANE"));
        assert!(!words.is_valid_word("xxxxx"));
        assert!(!words.is_valid_word("cran"));
    }

    #[test]
    fn answers_are_accepted_even_if_not_listed() {
        let words = WordList::new(&["broad"], &["crane"]);
        assert!(words.is_valid_word("broad"));
        assert!(words.is_valid_word("crane"));
        assert_eq!(words.accepted_count(), 2);
    }

    #[test]
    fn extend_accepted() {
        let mut words = WordList::new(&["broad"], &[]);
        assert!(!words.is_valid_word("zesty"));
        words.extend_accepted([Word::new("zesty").unwrap()]);
        assert!(words.is_valid_word("zesty"));
    }

    #[test]
    fn daily_secret_is_deterministic() {
        let words = WordList::default();
        let day = PlayMode::Daily { day: 1234 };
        assert_eq!(words.secret_for(day), words.secret_for(day));

        let wrapped = PlayMode::Daily {
            day: 1234 + ANSWERS_COUNT as u64,
        };
        assert_eq!(words.secret_for(day), words.secret_for(wrapped));
    }

    #[test]
    fn random_secret_is_deterministic_per_seed() {
        let words = WordList::default();
        let mode = PlayMode::Random { seed: 99 };
        assert_eq!(words.secret_for(mode), words.secret_for(mode));
        assert!(words.answers().contains(&words.secret_for(mode)));
    }

    #[test]
    fn empty_answers_fall_back_to_embedded() {
        let words = WordList::new(&["nope"], &[]);
        assert_eq!(words.answers().len(), ANSWERS_COUNT);
    }
}
