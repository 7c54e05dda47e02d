//! Task entity and the completion status shared with subtasks.

use crate::libs::error::StoreError;
use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Completion state of a task or subtask. Stored as lowercase text; any
/// other value is rejected before it reaches the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Completed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Completed => "completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Status::Pending),
            "completed" => Ok(Status::Completed),
            other => Err(StoreError::InvalidInput(format!("unknown status '{}'", other))),
        }
    }
}

impl ToSql for Status {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for Status {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e: StoreError| FromSqlError::Other(Box::new(e)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: Status,
    /// Accumulated minutes; only ever increased while the row exists.
    pub time_spent: i64,
    pub created_at: Option<String>,
}

impl Task {
    pub fn new(user_id: i64, title: &str, description: Option<String>, due_date: Option<NaiveDate>) -> Self {
        Task {
            id: None,
            user_id,
            title: title.to_string(),
            description,
            due_date,
            status: Status::Pending,
            time_spent: 0,
            created_at: None,
        }
    }
}

/// Reduced row returned by task listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSummary {
    pub id: i64,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub status: Status,
}

/// Top-level field changes applied by the update path. Subtask changes
/// travel separately as [`SubtaskSpec`](crate::libs::subtask::SubtaskSpec)s.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}
