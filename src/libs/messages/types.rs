/// Every user-facing message in the application.
///
/// Variants carry only the dynamic parts; the text lives in the `Display`
/// implementation in `display.rs` so wording stays in one place.
#[derive(Debug, Clone)]
pub enum Message {
    // === USER MESSAGES ===
    UserRegistered(i64, String),  // id, username
    EmailAlreadyExists(String),   // email
    LoginSuccessful(i64, String), // id, username
    LoginFailed,
    UserNotFound(i64),
    UsernameFound(i64, String), // id, username

    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskNotFound(i64),
    TaskNotOwned(i64),
    NoTasksFound(i64), // user id
    ConfirmDeleteTask(i64),
    TaskDeleteCancelled,

    // === SUBTASK MESSAGES ===
    SubtaskCreated(i64),
    SubtasksAdded(usize, i64), // count, task id
    SubtaskNotFound(i64),
    SubtaskStatusSet(i64, String), // id, status
    NoSubtasksFound(i64),          // task id

    // === TIME MESSAGES ===
    TimeLoggedTask(i64, i64),    // minutes, task id
    TimeLoggedSubtask(i64, i64), // minutes, subtask id

    // === CONFIG MESSAGES ===
    ConfigSaved,
    PromptDbFilePath,
    DatabaseReady(String), // path

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseUpToDate,
    DatabaseVersion(u32),
}
