//! SQLite connection wrapper (one connection per CLI invocation).

use crate::errors::AppResult;
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

pub struct DbPool {
    pub conn: Connection,
    pub path: PathBuf,
}

impl DbPool {
    /// Open the database, creating the file when it does not exist yet.
    pub fn open(path: &Path) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        log::debug!("opened database {}", path.display());
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Open an existing database read-only. `None` when the file is absent,
    /// so inspection never leaves an empty database behind.
    pub fn open_existing(path: &Path) -> AppResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        log::debug!("opened database {} (read-only)", path.display());
        Ok(Some(Self {
            conn,
            path: path.to_path_buf(),
        }))
    }

    /// Run `work` against the connection; it may open transactions.
    pub fn run<T>(&mut self, work: impl FnOnce(&mut Connection) -> AppResult<T>) -> AppResult<T> {
        log::debug!("running against {}", self.path.display());
        work(&mut self.conn)
    }
}
