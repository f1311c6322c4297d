//! Session state - the catalog and log behind every command.

use crate::error::Result;
use nosh_domain::{DailyLog, FoodCatalog};
use nosh_store::TextStore;
use std::path::PathBuf;

/// An open database session.
///
/// Owns the in-memory catalog and daily log together with the store
/// they were loaded from. Commands mutate the in-memory state; nothing
/// reaches disk until [`Session::save`].
pub struct Session {
    /// The food catalog
    pub catalog: FoodCatalog,
    /// The daily consumption log
    pub log: DailyLog,
    store: TextStore,
}

impl Session {
    /// Open a session against the given data directory, loading any
    /// existing database files.
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        let store = TextStore::new(data_dir);
        let catalog = store.load_catalog()?;
        let log = store.load_log(&catalog)?;
        Ok(Self {
            catalog,
            log,
            store,
        })
    }

    /// Write the catalog and log back to disk.
    pub fn save(&self) -> Result<()> {
        self.store.save_catalog(&self.catalog)?;
        self.store.save_log(&self.log)?;
        Ok(())
    }
}
