#[cfg(test)]
mod tests {
    use std::sync::OnceLock;
    use tasknest::db::users::Users;
    use tasknest::libs::error::StoreError;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // All tests in this binary share one data directory so the HOME
    // redirect stays stable across parallel test threads.
    static DATA_DIR: OnceLock<TempDir> = OnceLock::new();

    struct UserTestContext;

    impl TestContext for UserTestContext {
        fn setup() -> Self {
            let temp_dir = DATA_DIR.get_or_init(|| tempfile::tempdir().unwrap());
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            UserTestContext
        }
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_register_and_login(_ctx: &mut UserTestContext) {
        let mut users = Users::new().unwrap();

        let user = users.register("alice", "alice@example.com", "s3cret").unwrap();
        assert!(user.id.is_some());
        assert_eq!(user.username, "alice");

        let logged_in = users.login("alice@example.com", "s3cret").unwrap().unwrap();
        assert_eq!(logged_in.id, user.id);
        assert_eq!(logged_in.username, "alice");
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_login_rejects_wrong_password(_ctx: &mut UserTestContext) {
        let mut users = Users::new().unwrap();

        users.register("bob", "bob@example.com", "correct").unwrap();

        assert!(users.login("bob@example.com", "incorrect").unwrap().is_none());
        assert!(users.login("nobody@example.com", "correct").unwrap().is_none());
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_duplicate_email_is_conflict(_ctx: &mut UserTestContext) {
        let mut users = Users::new().unwrap();

        users.register("carol", "carol@example.com", "pw1").unwrap();
        let err = users.register("carol2", "carol@example.com", "pw2").unwrap_err();

        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_get_username(_ctx: &mut UserTestContext) {
        let mut users = Users::new().unwrap();

        let user = users.register("dave", "dave@example.com", "pw").unwrap();

        assert_eq!(users.get_username(user.id.unwrap()).unwrap().as_deref(), Some("dave"));
        assert!(users.get_username(999_999).unwrap().is_none());
    }
}
