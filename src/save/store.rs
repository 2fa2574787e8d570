//! Save storage backends

use super::SaveFile;
use anyhow::anyhow;
use rustc_hash::FxHashMap;
use std::cell::{Cell, RefCell};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Failure to read or write a save record
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("no save found for '{0}'")]
    NotFound(String),
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("save file {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode save: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("save store unavailable: {0}")]
    Unavailable(String),
}

/// Where save records live
///
/// `key` names the play mode (see `PlayMode::key`).
pub trait SaveStore {
    /// Read the record for `key`
    ///
    /// # Errors
    /// Returns `SaveError::NotFound` when nothing has been saved yet, or
    /// another `SaveError` when the record cannot be read.
    fn load(&self, key: &str) -> Result<SaveFile, SaveError>;

    /// Replace the record for `key`
    ///
    /// # Errors
    /// Returns a `SaveError` when the record cannot be written.
    fn save(&self, key: &str, save: &SaveFile) -> Result<(), SaveError>;
}

/// One pretty-printed JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store in the platform data directory
    ///
    /// # Errors
    /// Returns an error if no home directory can be determined.
    pub fn open_default() -> anyhow::Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "wordle_cli")
            .ok_or_else(|| anyhow!("Could not determine data directory"))?;
        Ok(Self::new(dirs.data_dir()))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the record for `key`
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SaveStore for FileStore {
    fn load(&self, key: &str) -> Result<SaveFile, SaveError> {
        let path = self.path_for(key);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(SaveError::NotFound(key.to_string()));
            }
            Err(source) => return Err(SaveError::Io { path, source }),
        };

        serde_json::from_str(&content).map_err(|source| SaveError::Corrupt { path, source })
    }

    fn save(&self, key: &str, save: &SaveFile) -> Result<(), SaveError> {
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source: io::Error| SaveError::Io { path, source }
        };

        fs::create_dir_all(&self.dir).map_err(io_err(&self.dir))?;

        let json = serde_json::to_string_pretty(save).map_err(SaveError::Encode)?;

        // Write beside the target and rename so a crash never leaves half a file
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_err(&tmp))?;
        fs::rename(&tmp, &path).map_err(io_err(&path))?;

        debug!(path = %path.display(), "save written");
        Ok(())
    }
}

/// In-memory store for tests and throwaway sessions
///
/// Single-threaded by construction, hence `RefCell` rather than a lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<FxHashMap<String, SaveFile>>,
    writes: Cell<usize>,
    read_only: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Number of successful writes so far
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Copy of the record for `key`, if any
    #[must_use]
    pub fn get(&self, key: &str) -> Option<SaveFile> {
        self.records.borrow().get(key).cloned()
    }
}

impl SaveStore for MemoryStore {
    fn load(&self, key: &str) -> Result<SaveFile, SaveError> {
        self.get(key)
            .ok_or_else(|| SaveError::NotFound(key.to_string()))
    }

    fn save(&self, key: &str, save: &SaveFile) -> Result<(), SaveError> {
        if self.read_only {
            return Err(SaveError::Unavailable("store is read-only".to_string()));
        }

        self.records
            .borrow_mut()
            .insert(key.to_string(), save.clone());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
