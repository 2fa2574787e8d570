//! Share strings
//!
//! A compact rendering of a finished grid, one symbol per cell, derived from
//! the grid alone.

use crate::core::{LetterState, MAX_GUESSES, WORD_LENGTH};
use crate::game::Grid;

/// Format one row of states as symbols
#[must_use]
pub fn states_to_emoji(states: &[LetterState]) -> String {
    let mut result = String::with_capacity(states.len() * 4);
    for state in states {
        result.push(state.emoji());
    }
    result
}

/// One line of symbols per completed row
#[must_use]
pub fn share_rows(grid: &Grid) -> Vec<String> {
    grid.rows()
        .map(|row| {
            let states: [LetterState; WORD_LENGTH] = row.map(|item| item.state);
            states_to_emoji(&states)
        })
        .collect()
}

/// Score line: guesses used, or `X` when the last row is not solved
#[must_use]
pub fn score_label(grid: &Grid) -> String {
    if grid.is_solved() {
        format!("{}/{MAX_GUESSES}", grid.current_row())
    } else {
        format!("X/{MAX_GUESSES}")
    }
}

/// Full share text: a header with `label` and the score, then the rows
///
/// # Examples
/// ```
/// use wordle_cli::core::{Feedback, Word};
/// use wordle_cli::game::Grid;
/// use wordle_cli::output::share::share_string;
///
/// let mut grid = Grid::new();
/// grid.write_row(&Word::new("broad").unwrap(), &Feedback::SOLVED).unwrap();
///
/// assert_eq!(share_string("#1", &grid), "Wordle #1 1/6\n\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_string(label: &str, grid: &Grid) -> String {
    let mut out = format!("Wordle {label} {}\n", score_label(grid));
    for row in share_rows(grid) {
        out.push('\n');
        out.push_str(&row);
    }
    out
}
