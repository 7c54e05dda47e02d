//! Display implementation for application messages.
//!
//! Single source of truth for all user-facing wording. Messages carry their
//! dynamic parts as enum payloads; this module turns them into text.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === USER MESSAGES ===
            Message::UserRegistered(id, username) => format!("User '{}' registered with ID {}", username, id),
            Message::EmailAlreadyExists(email) => format!("A user with email '{}' already exists", email),
            Message::LoginSuccessful(id, username) => format!("Login successful. Welcome, {} (ID {})!", username, id),
            Message::LoginFailed => "Login failed: incorrect email or password".to_string(),
            Message::UserNotFound(id) => format!("User with ID {} not found", id),
            Message::UsernameFound(id, username) => format!("User {} is '{}'", id, username),

            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task created with ID {}", id),
            Message::TaskUpdated(id) => format!("Task {} and its subtasks updated", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFound(id) => format!("Task with ID {} not found", id),
            Message::TaskNotOwned(id) => format!("Task {} does not belong to the given user", id),
            Message::NoTasksFound(user_id) => format!("No tasks found for user {}", user_id),
            Message::ConfirmDeleteTask(id) => format!("Delete task {} and all of its subtasks?", id),
            Message::TaskDeleteCancelled => "Deletion cancelled".to_string(),

            // === SUBTASK MESSAGES ===
            Message::SubtaskCreated(id) => format!("Subtask created with ID {}", id),
            Message::SubtasksAdded(count, task_id) => format!("Added {} subtask(s) to task {}", count, task_id),
            Message::SubtaskNotFound(id) => format!("Subtask with ID {} not found", id),
            Message::SubtaskStatusSet(id, status) => format!("Subtask {} marked as {}", id, status),
            Message::NoSubtasksFound(task_id) => format!("No subtasks found for task {}", task_id),

            // === TIME MESSAGES ===
            Message::TimeLoggedTask(minutes, id) => format!("Logged {} minute(s) on task {}", minutes, id),
            Message::TimeLoggedSubtask(minutes, id) => format!("Logged {} minute(s) on subtask {}", minutes, id),

            // === CONFIG MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::PromptDbFilePath => "Where should the task database live?".to_string(),
            Message::DatabaseReady(path) => format!("Database ready at {}", path),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Applying migration {}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration {} applied", version),
            Message::MigrationFailed(version, error) => format!("Migration {} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations applied".to_string(),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
        };
        write!(f, "{}", text)
    }
}
