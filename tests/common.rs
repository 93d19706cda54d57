#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn rmg() -> Command {
    cargo_bin_cmd!("rmigrate")
}

/// A scratch directory holding a database file and a migrations folder.
pub struct TestEnv {
    pub dir: TempDir,
    pub db: PathBuf,
    pub migrations: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let db = dir.path().join("app.sqlite");
        let migrations = dir.path().join("migrations");
        fs::create_dir(&migrations).expect("create migrations dir");
        Self { dir, db, migrations }
    }

    pub fn db_str(&self) -> String {
        self.db.to_string_lossy().to_string()
    }

    pub fn migrations_str(&self) -> String {
        self.migrations.to_string_lossy().to_string()
    }

    /// Write (or overwrite) a migration file.
    pub fn write(&self, name: &str, sql: &str) -> PathBuf {
        let path = self.migrations.join(name);
        fs::write(&path, sql).expect("write migration");
        path
    }

    pub fn remove(&self, name: &str) {
        fs::remove_file(self.migrations.join(name)).expect("remove migration");
    }

    /// `rmigrate <cmd> --db .. --migrations ..`
    pub fn cmd(&self, sub: &str) -> Command {
        let mut cmd = rmg();
        cmd.current_dir(self.dir.path()).args([
            sub,
            "--db",
            &self.db_str(),
            "--migrations",
            &self.migrations_str(),
        ]);
        cmd
    }

    pub fn conn(&self) -> Connection {
        Connection::open(&self.db).expect("open db")
    }
}

pub fn table_exists(conn: &Connection, name: &str) -> bool {
    conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
        [name],
        |row| row.get::<_, i64>(0),
    )
    .expect("query sqlite_master")
        > 0
}

/// (name, run_at, hash) rows of the history table, in id order.
pub fn history(conn: &Connection, table: &str) -> Vec<(String, String, Option<String>)> {
    let mut stmt = conn
        .prepare(&format!("SELECT name, run_at, hash FROM {table} ORDER BY id"))
        .expect("prepare history query");
    stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
        .expect("query history")
        .map(|r| r.expect("history row"))
        .collect()
}

pub fn history_names(conn: &Connection) -> Vec<String> {
    history(conn, "schema_migrations")
        .into_iter()
        .map(|(name, _, _)| name)
        .collect()
}
