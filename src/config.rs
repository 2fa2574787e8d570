//! Runtime configuration
//!
//! Resolves where saves live and how the play session is set up, from CLI
//! flags first, then the environment, then platform defaults.

use crate::game::PlayMode;
use crate::save::{FileStore, MemoryStore, SaveStore};
use anyhow::Result;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable overriding the save directory
pub const SAVE_DIR_ENV: &str = "WORDLE_CLI_SAVE_DIR";

/// Settings for one run of the game
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Explicit save directory (`--save-dir`)
    pub save_dir: Option<PathBuf>,
    /// Keep saves in memory only (`--no-save`)
    pub no_save: bool,
    /// Free play instead of the daily puzzle
    pub random: bool,
    /// Seed for free play; implies `random`
    pub seed: Option<u64>,
    /// Daily puzzle number override
    pub day: Option<u64>,
    /// Extra accepted guess words, one per line
    pub dictionary: Option<PathBuf>,
}

impl Config {
    /// Play mode selected by the flags
    #[must_use]
    pub fn play_mode(&self) -> PlayMode {
        match (self.seed, self.random, self.day) {
            (Some(seed), _, _) => PlayMode::Random { seed },
            (None, true, _) => PlayMode::random(),
            (None, false, Some(day)) => PlayMode::Daily { day },
            (None, false, None) => PlayMode::today(),
        }
    }

    /// Directory for save files
    ///
    /// # Errors
    /// Returns an error if no flag or environment override is given and the
    /// platform data directory cannot be determined.
    pub fn resolve_save_dir(&self, env: Option<OsString>) -> Result<PathBuf> {
        if let Some(dir) = &self.save_dir {
            return Ok(dir.clone());
        }
        if let Some(dir) = env.filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        Ok(FileStore::open_default()?.dir().to_path_buf())
    }

    /// Save store for this run
    ///
    /// # Errors
    /// Returns an error if the save directory cannot be resolved.
    pub fn open_store(&self) -> Result<Box<dyn SaveStore>> {
        if self.no_save {
            return Ok(Box::new(MemoryStore::new()));
        }
        let dir = self.resolve_save_dir(std::env::var_os(SAVE_DIR_ENV))?;
        Ok(Box::new(FileStore::new(dir)))
    }
}
