#[cfg(test)]
mod tests {
    use std::sync::OnceLock;
    use std::thread;
    use tasknest::db::subtasks::Subtasks;
    use tasknest::db::tasks::Tasks;
    use tasknest::db::users::Users;
    use tasknest::libs::error::StoreError;
    use tasknest::libs::subtask::Subtask;
    use tasknest::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // All tests in this binary share one data directory so the HOME
    // redirect stays stable across parallel test threads.
    static DATA_DIR: OnceLock<TempDir> = OnceLock::new();

    struct TimeTestContext;

    impl TestContext for TimeTestContext {
        fn setup() -> Self {
            let temp_dir = DATA_DIR.get_or_init(|| tempfile::tempdir().unwrap());
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TimeTestContext
        }
    }

    fn seed_task(email: &str) -> i64 {
        let user_id = Users::new().unwrap().register("tester", email, "pw").unwrap().id.unwrap();
        Tasks::new().unwrap().create(&Task::new(user_id, "Timed", None, None)).unwrap()
    }

    #[test_context(TimeTestContext)]
    #[test]
    fn test_task_time_accumulates(_ctx: &mut TimeTestContext) {
        let task_id = seed_task("accumulate@example.com");
        let mut tasks = Tasks::new().unwrap();

        tasks.log_time(task_id, 5).unwrap();
        tasks.log_time(task_id, 3).unwrap();

        assert_eq!(tasks.get(task_id).unwrap().unwrap().time_spent, 8);
    }

    #[test_context(TimeTestContext)]
    #[test]
    fn test_negative_delta_is_rejected_and_leaves_value(_ctx: &mut TimeTestContext) {
        let task_id = seed_task("negative@example.com");
        let mut tasks = Tasks::new().unwrap();

        tasks.log_time(task_id, 10).unwrap();
        let err = tasks.log_time(task_id, -4).unwrap_err();

        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert_eq!(tasks.get(task_id).unwrap().unwrap().time_spent, 10);
    }

    #[test_context(TimeTestContext)]
    #[test]
    fn test_zero_delta_is_allowed(_ctx: &mut TimeTestContext) {
        let task_id = seed_task("zero@example.com");
        let mut tasks = Tasks::new().unwrap();

        tasks.log_time(task_id, 0).unwrap();
        assert_eq!(tasks.get(task_id).unwrap().unwrap().time_spent, 0);
    }

    #[test_context(TimeTestContext)]
    #[test]
    fn test_subtask_time_accumulates_and_rejects_negative(_ctx: &mut TimeTestContext) {
        let task_id = seed_task("subtime@example.com");
        let mut subtasks = Subtasks::new().unwrap();
        let subtask_id = subtasks.create(&Subtask::new(task_id, "Piece", None, None)).unwrap();

        subtasks.log_time(subtask_id, 7).unwrap();
        subtasks.log_time(subtask_id, 2).unwrap();
        assert_eq!(subtasks.get(subtask_id).unwrap().unwrap().time_spent, 9);

        let err = subtasks.log_time(subtask_id, -1).unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert_eq!(subtasks.get(subtask_id).unwrap().unwrap().time_spent, 9);
    }

    #[test_context(TimeTestContext)]
    #[test]
    fn test_concurrent_loggers_lose_no_updates(_ctx: &mut TimeTestContext) {
        let task_id = seed_task("concurrent@example.com");

        // Each thread opens its own connection; the increment runs inside
        // the UPDATE statement, so totals must add up exactly.
        let handles: Vec<_> = (0..4)
            .map(|_| {
                thread::spawn(move || {
                    let mut tasks = Tasks::new().unwrap();
                    for _ in 0..5 {
                        tasks.log_time(task_id, 1).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(Tasks::new().unwrap().get(task_id).unwrap().unwrap().time_spent, 20);
    }
}
