//! Database layer for the tasknest application.
//!
//! A SQLite-backed persistence layer with one module per entity. Each
//! repository struct owns its own connection (opened by the constructor,
//! released on drop) and ensures the tables it touches exist, so any entry
//! point works against a fresh database. Versioned schema creation runs
//! explicitly through [`migrations`] at initialization time.

/// Core database connection and path resolution.
pub mod db;

/// Versioned, idempotent schema creation.
pub mod migrations;

/// User accounts: registration, credential checks, lookups.
pub mod users;

/// Tasks: CRUD, cascading deletion, time logging, and the subtask
/// reconciliation engine.
pub mod tasks;

/// Subtasks: creation, lookups, status updates, time logging.
pub mod subtasks;
