//! SQLite persistence.
//!
//! The reporting engine never talks to SQLite directly: it receives shaped
//! records through [`DataSource`]. [`Store`] is the implementation backed by
//! the local database file; tests and other front ends can supply their own.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hourly::db::{DataSource, Store};
//! use chrono::NaiveDate;
//!
//! let store = Store::default_location()?;
//! let from = NaiveDate::from_ymd_opt(2025, 1, 1);
//! let entries = store.list_entries("local", from, None)?;
//! let projects = store.list_projects("local")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod db;
pub mod entries;
pub mod migrations;
pub mod projects;

use crate::libs::data_storage::DataStorage;
use crate::libs::entry::TimeEntry;
use crate::libs::project::Project;
use anyhow::Result;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Read side of the storage contract used by report preparation.
pub trait DataSource {
    /// Entries of `account_id` within the inclusive date range, ordered by
    /// date then start time, newest first. Either bound may be open.
    fn list_entries(&self, account_id: &str, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Vec<TimeEntry>>;

    /// Active projects of `account_id`, ordered by name.
    fn list_projects(&self, account_id: &str) -> Result<Vec<Project>>;
}

/// [`DataSource`] over a SQLite file. Each call opens its own connection,
/// so a `Store` can be cloned freely and moved to blocking worker threads.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Store { path: path.into() }
    }

    /// Store over the database in the application data directory.
    pub fn default_location() -> Result<Self> {
        Ok(Store::new(DataStorage::new().get_path(db::DB_FILE_NAME)?))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn projects(&self, account_id: &str) -> Result<projects::Projects> {
        Ok(projects::Projects::with_db(db::Db::open(&self.path)?, account_id))
    }

    pub fn entries(&self, account_id: &str) -> Result<entries::Entries> {
        Ok(entries::Entries::with_db(db::Db::open(&self.path)?, account_id))
    }
}

impl DataSource for Store {
    fn list_entries(&self, account_id: &str, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Vec<TimeEntry>> {
        self.entries(account_id)?.list(from, to)
    }

    fn list_projects(&self, account_id: &str) -> Result<Vec<Project>> {
        self.projects(account_id)?.list_active()
    }
}
