//! Subtask storage: creation, lookups, status updates, time logging.

use super::db::Db;
use crate::libs::error::StoreError;
use crate::libs::subtask::{Subtask, SubtaskDraft};
use crate::libs::task::Status;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

pub(crate) const SCHEMA_SUBTASKS: &str = "CREATE TABLE IF NOT EXISTS subtasks (
    subtask_id INTEGER PRIMARY KEY AUTOINCREMENT,
    task_id INTEGER NOT NULL,
    title TEXT NOT NULL,
    time_estimate TEXT,
    time_spent INTEGER NOT NULL DEFAULT 0,
    order_num INTEGER,
    status TEXT NOT NULL DEFAULT 'pending',
    FOREIGN KEY (task_id) REFERENCES tasks(task_id)
)";
const INSERT_SUBTASK: &str = "INSERT INTO subtasks (task_id, title, time_estimate, order_num, status) VALUES (?1, ?2, ?3, ?4, 'pending')";
const SELECT_SUBTASK: &str = "SELECT subtask_id, task_id, title, time_estimate, time_spent, order_num, status FROM subtasks WHERE subtask_id = ?1";
const SELECT_SUBTASKS_BY_TASK: &str = "SELECT subtask_id, task_id, title, time_estimate, time_spent, order_num, status FROM subtasks WHERE task_id = ?1";
const UPDATE_STATUS: &str = "UPDATE subtasks SET status = ?1 WHERE subtask_id = ?2";
// Increment happens inside the statement; never read-modify-write from here
const LOG_TIME: &str = "UPDATE subtasks SET time_spent = time_spent + ?1 WHERE subtask_id = ?2";
const TASK_EXISTS: &str = "SELECT 1 FROM tasks WHERE task_id = ?1";

pub struct Subtasks {
    conn: Connection,
}

impl Subtasks {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        // The parent table must exist for the creation-time task check
        db.conn.execute(super::tasks::SCHEMA_TASKS, [])?;
        db.conn.execute(SCHEMA_SUBTASKS, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Insert a subtask under an existing task; a missing parent is
    /// `NotFound` before anything is written.
    pub fn create(&mut self, subtask: &Subtask) -> Result<i64, StoreError> {
        let parent = self.conn.query_row(TASK_EXISTS, params![subtask.task_id], |_| Ok(())).optional()?;
        if parent.is_none() {
            return Err(StoreError::NotFound);
        }

        self.conn
            .execute(INSERT_SUBTASK, params![subtask.task_id, subtask.title, subtask.time_estimate, subtask.order_num])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Append a batch of new subtasks to an existing task in one
    /// transaction.
    pub fn create_many(&mut self, task_id: i64, drafts: &[SubtaskDraft]) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;

        let parent = tx.query_row(TASK_EXISTS, params![task_id], |_| Ok(())).optional()?;
        if parent.is_none() {
            return Err(StoreError::NotFound);
        }

        for draft in drafts {
            tx.execute(INSERT_SUBTASK, params![task_id, draft.title, draft.time_estimate, None::<i64>])?;
        }

        tx.commit()?;
        Ok(drafts.len())
    }

    pub fn get(&mut self, subtask_id: i64) -> Result<Option<Subtask>, StoreError> {
        self.conn
            .query_row(SELECT_SUBTASK, params![subtask_id], |row| {
                Ok(Subtask {
                    id: Some(row.get(0)?),
                    task_id: row.get(1)?,
                    title: row.get(2)?,
                    time_estimate: row.get(3)?,
                    time_spent: row.get(4)?,
                    order_num: row.get(5)?,
                    status: row.get(6)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }

    pub fn list(&mut self, task_id: i64) -> Result<Vec<Subtask>, StoreError> {
        let mut stmt = self.conn.prepare(SELECT_SUBTASKS_BY_TASK)?;
        let subtask_iter = stmt.query_map(params![task_id], |row| {
            Ok(Subtask {
                id: Some(row.get(0)?),
                task_id: row.get(1)?,
                title: row.get(2)?,
                time_estimate: row.get(3)?,
                time_spent: row.get(4)?,
                order_num: row.get(5)?,
                status: row.get(6)?,
            })
        })?;

        let mut subtasks = Vec::new();
        for subtask in subtask_iter {
            subtasks.push(subtask?);
        }
        Ok(subtasks)
    }

    /// Set a subtask's completion status. The status value is already
    /// validated by the `Status` type; a zero-row update is `NotFound`.
    pub fn set_status(&mut self, subtask_id: i64, status: Status) -> Result<(), StoreError> {
        let affected = self.conn.execute(UPDATE_STATUS, params![status, subtask_id])?;
        if affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Add minutes to the subtask's accumulated time. Same contract as the
    /// task-level increment: atomic at the storage layer, negative deltas
    /// rejected.
    pub fn log_time(&mut self, subtask_id: i64, minutes: i64) -> Result<(), StoreError> {
        if minutes < 0 {
            return Err(StoreError::InvalidInput(format!("time delta must be non-negative, got {}", minutes)));
        }
        self.conn.execute(LOG_TIME, params![minutes, subtask_id])?;
        Ok(())
    }
}
