//! Saved-record reports: statistics and the last share string

use crate::game::{Grid, PlayMode};
use crate::output::share::share_string;
use crate::output::summary::statistics_lines;
use crate::save::{SaveError, SaveFile, SaveStore};
use anyhow::Result;
use std::io::Write;

const DAILY_KEY: &str = PlayMode::Daily { day: 0 }.key();

fn load_daily(store: &dyn SaveStore) -> Result<Option<SaveFile>> {
    match store.load(DAILY_KEY) {
        Ok(save) => Ok(Some(save)),
        Err(SaveError::NotFound(_)) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Print daily statistics
///
/// # Errors
///
/// Returns an error if the save record exists but cannot be read, or output
/// fails.
pub fn print_statistics<W: Write>(store: &dyn SaveStore, mut output: W) -> Result<()> {
    let stats = load_daily(store)?.map(|save| save.statistics).unwrap_or_default();

    for line in statistics_lines(&stats) {
        writeln!(output, "{line}")?;
    }
    Ok(())
}

/// Print the share string of the last finished daily puzzle
///
/// # Errors
///
/// Returns an error if the save record exists but cannot be read, or output
/// fails.
pub fn print_last_share<W: Write>(store: &dyn SaveStore, mut output: W) -> Result<()> {
    match load_daily(store)? {
        Some(SaveFile {
            last_game_id: Some(day),
            last_game_grid,
            ..
        }) => {
            let grid = Grid::from_snapshot(&last_game_grid);
            let label = PlayMode::Daily { day }.to_string();
            writeln!(output, "{}", share_string(&label, &grid))?;
        }
        _ => writeln!(output, "No finished daily puzzle yet")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word};
    use crate::game::GameState;
    use crate::save::MemoryStore;

    #[test]
    fn statistics_without_save_are_zero() {
        let store = MemoryStore::new();
        let mut out = Vec::new();
        print_statistics(&store, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Played:         0"));
    }

    #[test]
    fn last_share_from_save() {
        let mut grid = Grid::new();
        grid.write_row(&Word::new("broad").unwrap(), &Feedback::SOLVED)
            .unwrap();

        let mut save = SaveFile::new();
        save.last_game_id = Some(42);
        save.last_game_status = GameState::Won;
        save.last_game_grid = grid.snapshot();

        let store = MemoryStore::new();
        store.save(DAILY_KEY, &save).unwrap();

        let mut out = Vec::new();
        print_last_share(&store, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Wordle #42 1/6\n\n🟩🟩🟩🟩🟩\n"
        );
    }

    #[test]
    fn last_share_without_game() {
        let store = MemoryStore::new();
        let mut out = Vec::new();
        print_last_share(&store, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No finished daily puzzle yet\n");
    }
}
