use crate::libs::messages::Message;
use anyhow::{Context, Result};
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const VENDOR_NAME: &str = "pepocero";
pub const APP_NAME: &str = "hourly";
/// Overrides the platform data directory, e.g. for tests or portable installs.
pub const DATA_DIR_ENV: &str = "HOURLY_DATA_DIR";

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        if let Ok(dir) = var(DATA_DIR_ENV) {
            if !dir.trim().is_empty() {
                return Self::at(dir);
            }
        }

        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);

        Self { base_path }
    }

    /// Storage rooted at an explicit directory.
    pub fn at(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` inside the storage directory, creating the directory if needed.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)
                .with_context(|| format!("{}: {}", Message::DataStoragePathError, self.base_path.display()))?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
