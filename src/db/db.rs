//! Core database connection management.
//!
//! `Db` owns a single `rusqlite::Connection`, opened against a path resolved
//! from (in order) the `TASKNEST_DB` environment variable, the configuration
//! file, and finally the platform data directory. Connections are scoped to
//! one repository instance: acquired by its constructor, released on drop.

use super::migrations::MigrationManager;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::env;
use std::path::PathBuf;

pub const DB_FILE_NAME: &str = "tasknest.db";
pub const DB_ENV_VAR: &str = "TASKNEST_DB";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let conn: Connection = Connection::open(Self::path()?)?;
        // SQLite leaves declared foreign keys unenforced unless asked.
        conn.pragma_update(None, "foreign_keys", true)?;
        // Concurrent writers wait for the lock instead of failing outright
        conn.busy_timeout(std::time::Duration::from_secs(5))?;

        Ok(Db { conn })
    }

    /// Resolve the database file location: environment override first, then
    /// the configuration file, then the platform data directory.
    pub fn path() -> Result<PathBuf> {
        if let Ok(path) = env::var(DB_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }
        if let Some(db_file) = Config::read()?.storage.and_then(|s| s.db_file) {
            return Ok(PathBuf::from(db_file));
        }
        DataStorage::new().get_path(DB_FILE_NAME)
    }

    /// Explicit one-time initialization: open the database and bring the
    /// schema up to date. Safe to run repeatedly; creation is "if not
    /// exists" throughout.
    pub fn init() -> Result<Db> {
        let mut db = Self::new()?;
        MigrationManager::new().run_migrations(&mut db.conn)?;
        Ok(db)
    }
}
