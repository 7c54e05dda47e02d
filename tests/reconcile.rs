#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::OnceLock;
    use tasknest::db::subtasks::Subtasks;
    use tasknest::db::tasks::Tasks;
    use tasknest::db::users::Users;
    use tasknest::libs::error::StoreError;
    use tasknest::libs::subtask::{SubtaskDraft, SubtaskSpec};
    use tasknest::libs::task::{Task, TaskPatch};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // All tests in this binary share one data directory so the HOME
    // redirect stays stable across parallel test threads.
    static DATA_DIR: OnceLock<TempDir> = OnceLock::new();

    struct ReconcileTestContext;

    impl TestContext for ReconcileTestContext {
        fn setup() -> Self {
            let temp_dir = DATA_DIR.get_or_init(|| tempfile::tempdir().unwrap());
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ReconcileTestContext
        }
    }

    fn patch(title: &str) -> TaskPatch {
        TaskPatch {
            title: title.to_string(),
            description: None,
            due_date: None,
        }
    }

    /// Seed a task owned by a fresh user with the given subtask titles.
    /// Returns (user_id, task_id, subtask ids in creation order).
    fn seed(email: &str, subtask_titles: &[&str]) -> (i64, i64, Vec<i64>) {
        let user_id = Users::new().unwrap().register("tester", email, "pw").unwrap().id.unwrap();
        let drafts: Vec<SubtaskDraft> = subtask_titles
            .iter()
            .map(|t| SubtaskDraft {
                id: None,
                title: t.to_string(),
                time_estimate: None,
            })
            .collect();
        let task_id = Tasks::new()
            .unwrap()
            .create_with_subtasks(&Task::new(user_id, "Seeded", None, None), &drafts)
            .unwrap();
        let ids = Subtasks::new().unwrap().list(task_id).unwrap().iter().filter_map(|s| s.id).collect();
        (user_id, task_id, ids)
    }

    #[test_context(ReconcileTestContext)]
    #[test]
    fn test_update_matched_insert_new_delete_missing(_ctx: &mut ReconcileTestContext) {
        let (user_id, task_id, ids) = seed("diff@example.com", &["A", "B", "C"]);
        let a = ids[0];

        let specs = vec![
            SubtaskSpec::Existing {
                id: a,
                title: "A updated".to_string(),
                time_estimate: Some("1h".to_string()),
            },
            SubtaskSpec::New {
                title: "D".to_string(),
                time_estimate: None,
            },
        ];
        Tasks::new().unwrap().update_with_subtasks(task_id, user_id, &patch("Seeded"), &specs).unwrap();

        let remaining = Subtasks::new().unwrap().list(task_id).unwrap();
        assert_eq!(remaining.len(), 2);

        let titles: HashSet<&str> = remaining.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, HashSet::from(["A updated", "D"]));

        let updated = remaining.iter().find(|s| s.id == Some(a)).unwrap();
        assert_eq!(updated.time_estimate.as_deref(), Some("1h"));
    }

    #[test_context(ReconcileTestContext)]
    #[test]
    fn test_empty_target_deletes_all_subtasks(_ctx: &mut ReconcileTestContext) {
        let (user_id, task_id, _) = seed("clear@example.com", &["A", "B"]);

        Tasks::new().unwrap().update_with_subtasks(task_id, user_id, &patch("Cleared"), &[]).unwrap();

        assert!(Subtasks::new().unwrap().list(task_id).unwrap().is_empty());
        let stored = Tasks::new().unwrap().get(task_id).unwrap().unwrap();
        assert_eq!(stored.title, "Cleared");
    }

    #[test_context(ReconcileTestContext)]
    #[test]
    fn test_task_fields_are_updated(_ctx: &mut ReconcileTestContext) {
        let (user_id, task_id, _) = seed("fields@example.com", &[]);

        let patch = TaskPatch {
            title: "Renamed".to_string(),
            description: Some("New description".to_string()),
            due_date: chrono::NaiveDate::from_ymd_opt(2026, 12, 24),
        };
        Tasks::new().unwrap().update_with_subtasks(task_id, user_id, &patch, &[]).unwrap();

        let stored = Tasks::new().unwrap().get(task_id).unwrap().unwrap();
        assert_eq!(stored.title, "Renamed");
        assert_eq!(stored.description.as_deref(), Some("New description"));
        assert_eq!(stored.due_date, patch.due_date);
    }

    #[test_context(ReconcileTestContext)]
    #[test]
    fn test_foreign_subtask_id_is_invalid_input(_ctx: &mut ReconcileTestContext) {
        let (user_a, task_a, ids_a) = seed("owner-a@example.com", &["mine"]);
        let (_user_b, _task_b, ids_b) = seed("owner-b@example.com", &["theirs"]);

        // Reference task B's subtask while updating task A
        let specs = vec![SubtaskSpec::Existing {
            id: ids_b[0],
            title: "hijacked".to_string(),
            time_estimate: None,
        }];
        let err = Tasks::new()
            .unwrap()
            .update_with_subtasks(task_a, user_a, &patch("Attempt"), &specs)
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));

        // Nothing was persisted on either side
        let mut subtasks = Subtasks::new().unwrap();
        let a_titles: Vec<String> = subtasks.list(task_a).unwrap().into_iter().map(|s| s.title).collect();
        assert_eq!(a_titles, vec!["mine".to_string()]);
        assert_eq!(subtasks.get(ids_a[0]).unwrap().unwrap().title, "mine");
        assert_eq!(subtasks.get(ids_b[0]).unwrap().unwrap().title, "theirs");
        assert_eq!(Tasks::new().unwrap().get(task_a).unwrap().unwrap().title, "Seeded");
    }

    #[test_context(ReconcileTestContext)]
    #[test]
    fn test_wrong_user_is_forbidden_and_leaves_subtasks(_ctx: &mut ReconcileTestContext) {
        let (_owner, task_id, _) = seed("owned@example.com", &["keep me"]);
        let stranger = Users::new()
            .unwrap()
            .register("stranger", "stranger@example.com", "pw")
            .unwrap()
            .id
            .unwrap();

        let err = Tasks::new()
            .unwrap()
            .update_with_subtasks(task_id, stranger, &patch("Taken over"), &[])
            .unwrap_err();
        assert!(matches!(err, StoreError::Forbidden));

        // Task and subtasks untouched
        assert_eq!(Tasks::new().unwrap().get(task_id).unwrap().unwrap().title, "Seeded");
        assert_eq!(Subtasks::new().unwrap().list(task_id).unwrap().len(), 1);
    }

    #[test_context(ReconcileTestContext)]
    #[test]
    fn test_missing_task_is_not_found(_ctx: &mut ReconcileTestContext) {
        let (user_id, _, _) = seed("missing@example.com", &[]);

        let err = Tasks::new()
            .unwrap()
            .update_with_subtasks(424_242, user_id, &patch("Ghost"), &[])
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[test_context(ReconcileTestContext)]
    #[test]
    fn test_drafts_resolve_through_tagged_specs(_ctx: &mut ReconcileTestContext) {
        let (user_id, task_id, ids) = seed("drafts@example.com", &["A"]);

        // The wire form: one draft keeps its id, one carries none
        let drafts = vec![
            SubtaskDraft {
                id: Some(ids[0]),
                title: "A kept".to_string(),
                time_estimate: None,
            },
            SubtaskDraft {
                id: None,
                title: "B new".to_string(),
                time_estimate: None,
            },
        ];
        let specs: Vec<SubtaskSpec> = drafts.into_iter().map(SubtaskSpec::from).collect();
        Tasks::new().unwrap().update_with_subtasks(task_id, user_id, &patch("Seeded"), &specs).unwrap();

        let remaining = Subtasks::new().unwrap().list(task_id).unwrap();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().any(|s| s.id == Some(ids[0]) && s.title == "A kept"));
        assert!(remaining.iter().any(|s| s.title == "B new"));
    }
}
