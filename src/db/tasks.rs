//! Task storage and the subtask reconciliation engine.
//!
//! Besides plain CRUD, this module owns the one nontrivial algorithm in the
//! system: [`Tasks::update_with_subtasks`], which diffs an incoming subtask
//! descriptor list against the stored rows for a task and applies the
//! minimal set of deletes, in-place updates, and inserts, all inside a
//! single transaction. Getting this diff wrong either orphans subtasks
//! (silent data loss) or re-inserts rows that already exist (duplication),
//! so the identifier sets are resolved explicitly before anything is
//! written.

use super::db::Db;
use crate::libs::error::StoreError;
use crate::libs::subtask::{SubtaskDraft, SubtaskSpec};
use crate::libs::task::{Task, TaskPatch, TaskSummary};
use anyhow::Result;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use std::collections::HashSet;

pub(crate) const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    task_id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER,
    title TEXT NOT NULL,
    description TEXT,
    due_date DATE,
    status TEXT NOT NULL DEFAULT 'pending',
    time_spent INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (user_id) REFERENCES users(user_id)
)";
const INSERT_TASK: &str = "INSERT INTO tasks (user_id, title, description, due_date, status) VALUES (?1, ?2, ?3, ?4, 'pending')";
const SELECT_TASK: &str = "SELECT task_id, user_id, title, description, due_date, status, time_spent, created_at FROM tasks WHERE task_id = ?1";
const SELECT_TASKS_BY_USER: &str = "SELECT task_id, title, due_date, status FROM tasks WHERE user_id = ?1";
const UPDATE_TASK_FIELDS: &str =
    "UPDATE tasks SET title = ?1, description = ?2, due_date = ?3, updated_at = datetime(CURRENT_TIMESTAMP, 'localtime') WHERE task_id = ?4 AND user_id = ?5";
const TASK_EXISTS: &str = "SELECT 1 FROM tasks WHERE task_id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE task_id = ?1";
const DELETE_TASK_SUBTASKS: &str = "DELETE FROM subtasks WHERE task_id = ?1";
// Increment happens inside the statement; never read-modify-write from here
const LOG_TIME: &str = "UPDATE tasks SET time_spent = time_spent + ?1 WHERE task_id = ?2";
const SELECT_SUBTASK_IDS: &str = "SELECT subtask_id FROM subtasks WHERE task_id = ?1";
const DELETE_SUBTASKS_IN: &str = "DELETE FROM subtasks WHERE subtask_id IN";
const UPDATE_SUBTASK_IN_PLACE: &str = "UPDATE subtasks SET title = ?1, time_estimate = ?2 WHERE subtask_id = ?3 AND task_id = ?4";
const INSERT_SUBTASK_UNDER: &str = "INSERT INTO subtasks (task_id, title, time_estimate, status) VALUES (?1, ?2, ?3, 'pending')";

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        // Reconciliation and cascade deletion touch both tables
        db.conn.execute(SCHEMA_TASKS, [])?;
        db.conn.execute(super::subtasks::SCHEMA_SUBTASKS, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Insert a task with status=pending and no time logged.
    pub fn create(&mut self, task: &Task) -> Result<i64, StoreError> {
        self.conn
            .execute(INSERT_TASK, params![task.user_id, task.title, task.description, task.due_date])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a task together with its inline subtask drafts. Every draft
    /// is new by definition (no identifier matching), and the whole batch
    /// shares one transaction: a failing subtask insert rolls back the task.
    pub fn create_with_subtasks(&mut self, task: &Task, drafts: &[SubtaskDraft]) -> Result<i64, StoreError> {
        let tx = self.conn.transaction()?;

        tx.execute(INSERT_TASK, params![task.user_id, task.title, task.description, task.due_date])?;
        let task_id = tx.last_insert_rowid();

        for draft in drafts {
            tx.execute(INSERT_SUBTASK_UNDER, params![task_id, draft.title, draft.time_estimate])?;
        }

        tx.commit()?;
        Ok(task_id)
    }

    pub fn get(&mut self, task_id: i64) -> Result<Option<Task>, StoreError> {
        self.conn
            .query_row(SELECT_TASK, params![task_id], |row| {
                Ok(Task {
                    id: Some(row.get(0)?),
                    user_id: row.get(1)?,
                    title: row.get(2)?,
                    description: row.get(3)?,
                    due_date: row.get(4)?,
                    status: row.get(5)?,
                    time_spent: row.get(6)?,
                    created_at: row.get(7)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }

    /// Task summaries for one user, in storage (insertion) order.
    pub fn list(&mut self, user_id: i64) -> Result<Vec<TaskSummary>, StoreError> {
        let mut stmt = self.conn.prepare(SELECT_TASKS_BY_USER)?;
        let task_iter = stmt.query_map(params![user_id], |row| {
            Ok(TaskSummary {
                id: row.get(0)?,
                title: row.get(1)?,
                due_date: row.get(2)?,
                status: row.get(3)?,
            })
        })?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Delete a task and all of its subtasks as one unit. Children go
    /// first; either both deletes land or neither does.
    pub fn delete(&mut self, task_id: i64) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;

        let exists = tx.query_row(TASK_EXISTS, params![task_id], |_| Ok(())).optional()?.is_some();
        if !exists {
            return Err(StoreError::NotFound);
        }

        tx.execute(DELETE_TASK_SUBTASKS, params![task_id])?;
        tx.execute(DELETE_TASK, params![task_id])?;

        tx.commit()?;
        Ok(())
    }

    /// Add minutes to the task's accumulated time. The increment runs as a
    /// single UPDATE so concurrent loggers cannot lose each other's writes.
    pub fn log_time(&mut self, task_id: i64, minutes: i64) -> Result<(), StoreError> {
        if minutes < 0 {
            return Err(StoreError::InvalidInput(format!("time delta must be non-negative, got {}", minutes)));
        }
        self.conn.execute(LOG_TIME, params![minutes, task_id])?;
        Ok(())
    }

    /// Reconcile a task and its subtask list against a requested target
    /// state, inside one transaction:
    ///
    /// 1. update the task's own fields, scoped to (task_id, user_id); a
    ///    zero-row match aborts with `NotFound` or `Forbidden` before any
    ///    subtask is touched;
    /// 2. delete stored subtasks whose ids are absent from the request;
    /// 3. update the ones the request still names;
    /// 4. insert descriptors that carry no id.
    ///
    /// A descriptor naming an id that does not belong to this task is
    /// `InvalidInput` and rolls back everything.
    pub fn update_with_subtasks(&mut self, task_id: i64, user_id: i64, patch: &TaskPatch, specs: &[SubtaskSpec]) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;

        let affected = tx.execute(UPDATE_TASK_FIELDS, params![patch.title, patch.description, patch.due_date, task_id, user_id])?;
        if affected == 0 {
            let exists = tx.query_row(TASK_EXISTS, params![task_id], |_| Ok(())).optional()?.is_some();
            return Err(if exists { StoreError::Forbidden } else { StoreError::NotFound });
        }

        let existing: HashSet<i64> = {
            let mut stmt = tx.prepare(SELECT_SUBTASK_IDS)?;
            let ids = stmt.query_map(params![task_id], |row| row.get(0))?;
            ids.collect::<rusqlite::Result<_>>()?
        };
        let incoming: HashSet<i64> = specs.iter().filter_map(SubtaskSpec::existing_id).collect();

        // Stale or foreign identifiers fail the whole request up front
        if let Some(stale) = incoming.difference(&existing).next() {
            return Err(StoreError::InvalidInput(format!("subtask {} does not belong to task {}", stale, task_id)));
        }

        let doomed: Vec<i64> = existing.difference(&incoming).copied().collect();
        if !doomed.is_empty() {
            let sql = format!("{} ({})", DELETE_SUBTASKS_IN, vec!["?"; doomed.len()].join(", "));
            tx.execute(&sql, params_from_iter(doomed.iter()))?;
        }

        for spec in specs {
            match spec {
                SubtaskSpec::Existing { id, title, time_estimate } => {
                    tx.execute(UPDATE_SUBTASK_IN_PLACE, params![title, time_estimate, id, task_id])?;
                }
                SubtaskSpec::New { title, time_estimate } => {
                    tx.execute(INSERT_SUBTASK_UNDER, params![task_id, title, time_estimate])?;
                }
            }
        }

        tx.commit()?;
        Ok(())
    }
}
