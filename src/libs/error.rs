//! Structured failure kinds for the storage layer.
//!
//! Every repository operation returns `Result<_, StoreError>` so that
//! handlers can react to the failure class instead of parsing message text.
//! Command modules convert these into user-facing messages at the boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The referenced record does not exist.
    #[error("record not found")]
    NotFound,

    /// The record exists but belongs to another user.
    #[error("record belongs to another user")]
    Forbidden,

    /// A unique constraint was violated (duplicate email).
    #[error("{0}")]
    Conflict(String),

    /// The request itself is malformed: bad status value, negative time
    /// delta, or a subtask identifier that does not belong to the task.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The underlying database failed; nothing was persisted.
    #[error("storage failure")]
    Storage(#[from] rusqlite::Error),
}
