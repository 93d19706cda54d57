//! The history table: which migrations ran, when, and with what content.

use crate::errors::{AppError, AppResult};
use crate::models::AppliedRecord;
use rusqlite::{Connection, OptionalExtension, params};

pub const DEFAULT_TABLE: &str = "schema_migrations";

/// Access to one history table. The name is validated once at construction
/// because it is spliced into SQL text (identifiers cannot be bound).
#[derive(Debug, Clone)]
pub struct HistoryStore {
    table: String,
}

impl HistoryStore {
    pub fn new(table: &str) -> AppResult<Self> {
        if !is_identifier(table) {
            return Err(AppError::InvalidTableName(table.to_string()));
        }
        Ok(Self {
            table: table.to_string(),
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Create the history table if absent.
    pub fn ensure_schema(&self, conn: &Connection) -> AppResult<()> {
        conn.execute_batch(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id      INTEGER PRIMARY KEY,
                name    TEXT NOT NULL UNIQUE,
                run_at  TEXT NOT NULL,
                hash    TEXT
            );
            "#,
            self.table
        ))?;
        Ok(())
    }

    /// Check if the history table exists.
    pub fn table_exists(&self, conn: &Connection) -> AppResult<bool> {
        let mut stmt =
            conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
        let exists: Option<String> = stmt
            .query_row([&self.table], |row| row.get(0))
            .optional()?;
        Ok(exists.is_some())
    }

    /// All recorded migrations in insertion order.
    pub fn list_applied(&self, conn: &Connection) -> AppResult<Vec<AppliedRecord>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT id, name, run_at, hash FROM {} ORDER BY id ASC",
            self.table
        ))?;

        let rows = stmt.query_map([], |row| {
            Ok(AppliedRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                applied_at: row.get(2)?,
                hash: row.get(3)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Like `list_applied`, but a missing table reads as empty history.
    pub fn list_applied_if_present(&self, conn: &Connection) -> AppResult<Vec<AppliedRecord>> {
        if self.table_exists(conn)? {
            self.list_applied(conn)
        } else {
            Ok(Vec::new())
        }
    }

    /// Record a migration. Pass the migration's own transaction so the row
    /// commits or rolls back together with its statements.
    pub fn append(&self, conn: &Connection, name: &str, run_at: &str, hash: &str) -> AppResult<()> {
        conn.execute(
            &format!(
                "INSERT INTO {} (name, run_at, hash) VALUES (?1, ?2, ?3)",
                self.table
            ),
            params![name, run_at, hash],
        )?;
        Ok(())
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
