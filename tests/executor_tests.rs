use rmigrate::core::checksum::content_hash;
use rmigrate::core::discovery::scan;
use rmigrate::core::executor::{Clock, Executor};
use rmigrate::db::history::HistoryStore;
use rmigrate::errors::AppError;
use rusqlite::Connection;

mod common;
use common::{TestEnv, history, table_exists};

struct FixedClock(&'static str);

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.to_string()
    }
}

fn setup(table: &str) -> (Connection, HistoryStore) {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    let store = HistoryStore::new(table).expect("valid table name");
    store.ensure_schema(&conn).expect("ensure schema");
    (conn, store)
}

#[test]
fn test_apply_records_each_migration_in_order() {
    let env = TestEnv::new();
    let users = "CREATE TABLE users (id INTEGER PRIMARY KEY);\n";
    let posts = "CREATE TABLE posts (id INTEGER PRIMARY KEY);\nCREATE INDEX idx_posts ON posts(id);";
    env.write("001_create_users.sql", users);
    env.write("002_add_posts.sql", posts);

    let (mut conn, store) = setup("schema_migrations");
    let pending = scan(&env.migrations).unwrap();

    let executor = Executor::with_clock(&store, FixedClock("2025-06-01 12:00:00"));
    let applied = executor.apply(&pending, &mut conn).expect("apply");
    assert_eq!(applied, 2);

    assert!(table_exists(&conn, "users"));
    assert!(table_exists(&conn, "posts"));

    let rows = history(&conn, "schema_migrations");
    assert_eq!(
        rows,
        vec![
            (
                "001_create_users.sql".to_string(),
                "2025-06-01 12:00:00".to_string(),
                Some(content_hash(users)),
            ),
            (
                "002_add_posts.sql".to_string(),
                "2025-06-01 12:00:00".to_string(),
                Some(content_hash(posts)),
            ),
        ]
    );
}

#[test]
fn test_failure_rolls_back_only_the_failing_migration() {
    let env = TestEnv::new();
    env.write("001_create_users.sql", "CREATE TABLE users (id INTEGER PRIMARY KEY);");
    env.write(
        "002_bad_migration.sql",
        "CREATE TABLE posts (id INTEGER PRIMARY KEY);\nCREATE TABLEE oops (;",
    );
    env.write("003_add_tags.sql", "CREATE TABLE tags (id INTEGER PRIMARY KEY);");

    let (mut conn, store) = setup("schema_migrations");
    let pending = scan(&env.migrations).unwrap();

    let err = Executor::new(&store)
        .apply(&pending, &mut conn)
        .expect_err("second migration must fail");

    match err {
        AppError::SqlExecution { name, message } => {
            assert_eq!(name, "002_bad_migration.sql");
            assert!(message.contains("syntax error"), "message was: {message}");
        }
        other => panic!("expected SqlExecution, got {other:?}"),
    }

    assert!(table_exists(&conn, "users"));
    assert!(!table_exists(&conn, "posts"));
    assert!(!table_exists(&conn, "tags"));

    let names: Vec<String> = history(&conn, "schema_migrations")
        .into_iter()
        .map(|(n, _, _)| n)
        .collect();
    assert_eq!(names, ["001_create_users.sql"]);
}

#[test]
fn test_empty_migration_is_recorded_without_running() {
    let env = TestEnv::new();
    env.write("001_placeholder.sql", "   \n\t\n");

    let (mut conn, store) = setup("schema_migrations");
    let pending = scan(&env.migrations).unwrap();

    let applied = Executor::new(&store).apply(&pending, &mut conn).unwrap();
    assert_eq!(applied, 1);

    let rows = history(&conn, "schema_migrations");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0, "001_placeholder.sql");
    assert_eq!(rows[0].2, Some(content_hash("   \n\t\n")));
}

#[test]
fn test_custom_history_table() {
    let env = TestEnv::new();
    env.write("1_init.sql", "CREATE TABLE t (x INTEGER);");

    let (mut conn, store) = setup("app_history");
    let pending = scan(&env.migrations).unwrap();
    Executor::new(&store).apply(&pending, &mut conn).unwrap();

    assert!(table_exists(&conn, "app_history"));
    assert!(!table_exists(&conn, "schema_migrations"));
    assert_eq!(history(&conn, "app_history").len(), 1);
}

#[test]
fn test_apply_nothing() {
    let (mut conn, store) = setup("schema_migrations");
    assert_eq!(Executor::new(&store).apply(&[], &mut conn).unwrap(), 0);
    assert!(history(&conn, "schema_migrations").is_empty());
}

#[test]
fn test_oversized_file_is_refused() {
    let env = TestEnv::new();
    let path = env.write("001_huge.sql", "");
    let file = std::fs::File::create(&path).unwrap();
    file.set_len(rmigrate::utils::files::MAX_MIGRATION_BYTES + 1).unwrap();

    let (mut conn, store) = setup("schema_migrations");
    let pending = scan(&env.migrations).unwrap();

    match Executor::new(&store).apply(&pending, &mut conn) {
        Err(AppError::MigrationFileTooLarge { size, limit, .. }) => {
            assert!(size > limit);
        }
        other => panic!("expected MigrationFileTooLarge, got {other:?}"),
    }
    assert!(history(&conn, "schema_migrations").is_empty());
}
