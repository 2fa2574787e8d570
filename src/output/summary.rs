//! Plain-text session summaries for the line-based game

use super::share::{share_rows, states_to_emoji};
use crate::core::{LetterState, MAX_GUESSES};
use crate::game::{Grid, Keyboard, Session};
use crate::save::Statistics;
use std::fmt::Write;

/// Guessed words beside their feedback, one per line
#[must_use]
pub fn board_lines(grid: &Grid) -> Vec<String> {
    grid.rows()
        .zip(share_rows(grid))
        .map(|(row, symbols)| {
            let word: String = row.iter().map(|item| item.letter).collect();
            format!("{word}  {symbols}")
        })
        .collect()
}

/// Letters grouped by their best-known state, unseen letters omitted
#[must_use]
pub fn keyboard_line(keyboard: &Keyboard) -> String {
    let group = |state: LetterState| -> String {
        keyboard
            .iter()
            .filter(|&(_, s)| s == state)
            .map(|(c, _)| c)
            .collect()
    };

    let mut line = String::new();
    for state in [LetterState::Correct, LetterState::Present, LetterState::Absent] {
        let letters = group(state);
        if !letters.is_empty() {
            if !line.is_empty() {
                line.push_str("  ");
            }
            let _ = write!(line, "{} {letters}", states_to_emoji(&[state]));
        }
    }
    line
}

/// Statistics block with a guess distribution histogram
#[must_use]
pub fn statistics_lines(stats: &Statistics) -> Vec<String> {
    let mut lines = vec![
        format!("Played:         {}", stats.games_played),
        format!("Win %:          {:.0}", stats.win_rate()),
        format!("Current streak: {}", stats.current_streak),
        format!("Max streak:     {}", stats.max_streak),
        "Guess distribution:".to_string(),
    ];

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);
    for guesses in 1..=MAX_GUESSES {
        let count = stats.wins_in(guesses);
        let width = (count * 20 / max) as usize;
        let bar = "#".repeat(width);
        lines.push(if bar.is_empty() {
            format!("  {guesses}: {count}")
        } else {
            format!("  {guesses}: {bar} {count}")
        });
    }

    lines
}

/// Everything worth showing after an action
#[must_use]
pub fn session_lines(session: &Session) -> Vec<String> {
    let mut lines = board_lines(session.grid());

    if session.game_state().is_terminal() {
        lines.push(String::new());
        if session.showing_statistics() {
            match session.statistics() {
                Some(stats) => lines.extend(statistics_lines(stats)),
                None => lines.push("No statistics in free play".to_string()),
            }
        } else {
            lines.extend(session.final_message());
            lines.extend(session.share_string());
        }
        lines.push(String::new());
        lines.push("Type :stats to toggle statistics, :new for a new game, :quit to exit".to_string());
    } else {
        if let Some(message) = session.word_state().message() {
            lines.push(format!("! {message}"));
        }
        let keys = keyboard_line(session.keyboard());
        if !keys.is_empty() {
            lines.push(keys);
        }
        lines.push(format!(
            "Guess {}/{MAX_GUESSES}: {}",
            session.current_row() + 1,
            session.input()
        ));
    }

    lines
}
