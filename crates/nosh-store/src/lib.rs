//! Nosh Storage Layer
//!
//! Persists the food catalog and the daily log as line-oriented,
//! `|`-delimited text files under a data directory:
//!
//! - `simple_foods.txt`: `identifier|kw1,kw2|calories`
//! - `composite_foods.txt`: `identifier|kw1,kw2|compId:servings;compId:servings`
//! - `daily_log.txt`: `ISO-date|foodIdentifier|servings`
//!
//! The format carries no escaping, so `|`, `,`, `:` and `;` cannot
//! appear inside fields. Saves rewrite each file whole. Loads are
//! lenient: malformed or unresolvable lines are skipped with a warning
//! and the valid remainder is kept. A missing file reads as empty,
//! which is how a fresh data directory starts.
//!
//! The undo history of a [`DailyLog`] is session state and is never
//! written to disk.

#![warn(missing_docs)]

use std::path::{Path, PathBuf};
use thiserror::Error;

mod catalog;
mod log;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O failure reading or writing a database file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

const SIMPLE_FOODS_FILE: &str = "simple_foods.txt";
const COMPOSITE_FOODS_FILE: &str = "composite_foods.txt";
const DAILY_LOG_FILE: &str = "daily_log.txt";

/// Text-file store rooted at a data directory.
///
/// The directory is created on first save. One store instance maps to
/// one database; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct TextStore {
    data_dir: PathBuf,
}

impl TextStore {
    /// Create a store rooted at the given directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The directory holding the database files
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn simple_foods_path(&self) -> PathBuf {
        self.data_dir.join(SIMPLE_FOODS_FILE)
    }

    fn composite_foods_path(&self) -> PathBuf {
        self.data_dir.join(COMPOSITE_FOODS_FILE)
    }

    fn daily_log_path(&self) -> PathBuf {
        self.data_dir.join(DAILY_LOG_FILE)
    }

    /// Read a database file, treating a missing file as empty
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, StoreError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(contents.lines().map(str::to_string).collect()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "database file not found, starting empty");
                Ok(Vec::new())
            }
            Err(error) => Err(error.into()),
        }
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
