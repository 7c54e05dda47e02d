//! Application configuration management.
//!
//! The configuration is a small JSON file in the platform data directory.
//! Currently it only carries the storage section; absent file or absent
//! sections mean defaults. The database location itself is resolved in
//! `db::Db::path`, which consults the `TASKNEST_DB` environment variable
//! before this file.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Storage-related settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// Absolute path of the SQLite database file. When unset the file lives
    /// in the platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_file: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}

impl Config {
    /// Read the configuration file, falling back to defaults when absent.
    pub fn read() -> Result<Self> {
        let path = Self::file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let file = File::open(&path)?;
        let config: Config = serde_json::from_reader(file)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::file_path()?;
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Interactive setup: asks for an optional database file override and
    /// writes the result. Re-running keeps previously configured values as
    /// the prompt defaults.
    pub fn init() -> Result<Self> {
        let current = Self::read()?;
        msg_print!(Message::PromptDbFilePath);

        let default = current.storage.as_ref().and_then(|s| s.db_file.clone()).unwrap_or_default();
        let db_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Database file (empty for the default location)")
            .default(default)
            .allow_empty(true)
            .interact_text()?;

        let config = Config {
            storage: if db_file.trim().is_empty() {
                None
            } else {
                Some(StorageConfig {
                    db_file: Some(db_file.trim().to_string()),
                })
            },
        };
        config.save()?;
        Ok(config)
    }

    fn file_path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }
}
