//! Append-only grid of scored letters
//!
//! The grid is written strictly in order: row by row, left to right. A write
//! cursor points at the next empty cell and every write must land exactly
//! there. Resuming from a save replays the saved cells through the same
//! [`Grid::set_cell`] path, so the cursor is rebuilt by the code that
//! enforces the ordering.

use crate::core::{Feedback, LetterState, MAX_GUESSES, WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// One scored letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridItem {
    pub letter: char,
    pub state: LetterState,
}

/// Persisted form of a grid: rows of cells, `None` for empty cells
pub type GridSnapshot = Vec<Vec<Option<GridItem>>>;

/// A refused grid write
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is not the next writable cell ({expected_row}, {expected_col})")]
    OutOfOrder {
        row: usize,
        col: usize,
        expected_row: usize,
        expected_col: usize,
    },
    #[error("grid is full")]
    Full,
    #[error("cannot write an empty state")]
    EmptyState,
    #[error("'{0}' is not a letter")]
    NotALetter(char),
}

/// Fixed `MAX_GUESSES × WORD_LENGTH` matrix of cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<GridItem>; WORD_LENGTH]; MAX_GUESSES],
    row: usize,
    col: usize,
}

impl Grid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a grid by replaying a snapshot in row-major order
    ///
    /// Replay stops at the first cell the grid refuses; everything written
    /// before it is kept.
    #[must_use]
    pub fn from_snapshot(snapshot: &[Vec<Option<GridItem>>]) -> Self {
        let mut grid = Self::new();

        let cells = snapshot.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, cell)| cell.map(|item| (r, c, item)))
        });

        for (r, c, item) in cells {
            if let Err(err) = grid.set_cell(r, c, item.letter, item.state) {
                warn!(row = r, col = c, %err, "stopping grid replay");
                break;
            }
        }

        grid
    }

    /// Write one cell at the cursor
    ///
    /// # Errors
    /// Returns a `GridError` and leaves the grid untouched if the target is
    /// not the cursor cell, the grid is full, the state is `Empty`, or the
    /// letter is not an ASCII letter.
    pub fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        letter: char,
        state: LetterState,
    ) -> Result<(), GridError> {
        if self.is_full() {
            return Err(GridError::Full);
        }
        if (row, col) != (self.row, self.col) {
            return Err(GridError::OutOfOrder {
                row,
                col,
                expected_row: self.row,
                expected_col: self.col,
            });
        }
        if !state.is_scored() {
            return Err(GridError::EmptyState);
        }
        if !letter.is_ascii_alphabetic() {
            return Err(GridError::NotALetter(letter));
        }

        self.cells[row][col] = Some(GridItem {
            letter: letter.to_ascii_uppercase(),
            state,
        });

        self.col += 1;
        if self.col == WORD_LENGTH {
            self.col = 0;
            self.row += 1;
        }

        Ok(())
    }

    /// Write a full scored guess into the current row
    ///
    /// # Errors
    /// Returns a `GridError` if the cursor is not at the start of a row.
    pub fn write_row(&mut self, word: &Word, feedback: &Feedback) -> Result<(), GridError> {
        if self.is_full() {
            return Err(GridError::Full);
        }
        if self.col != 0 {
            return Err(GridError::OutOfOrder {
                row: self.row,
                col: 0,
                expected_row: self.row,
                expected_col: self.col,
            });
        }

        let row = self.row;
        for (col, (&letter, &state)) in word.chars().iter().zip(feedback.states()).enumerate() {
            self.set_cell(row, col, char::from(letter), state)?;
        }

        Ok(())
    }

    /// Row of the next write
    #[inline]
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.row
    }

    /// Column of the next write
    #[inline]
    #[must_use]
    pub const fn current_column(&self) -> usize {
        self.col
    }

    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.row >= MAX_GUESSES
    }

    /// Cell contents, `None` when empty or out of range
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<GridItem> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// Whether the last completed row is all `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.rows()
            .last()
            .is_some_and(|row| row.iter().all(|item| item.state == LetterState::Correct))
    }

    /// Completed rows in order
    pub fn rows(&self) -> impl Iterator<Item = [GridItem; WORD_LENGTH]> + '_ {
        self.cells[..self.row.min(MAX_GUESSES)]
            .iter()
            .filter_map(|row| {
                let mut items = [GridItem {
                    letter: ' ',
                    state: LetterState::Empty,
                }; WORD_LENGTH];
                for (slot, cell) in items.iter_mut().zip(row) {
                    *slot = (*cell)?;
                }
                Some(items)
            })
    }

    /// Persisted form of the grid
    #[must_use]
    pub fn snapshot(&self) -> GridSnapshot {
        self.cells.iter().map(|row| row.to_vec()).collect()
    }
}
