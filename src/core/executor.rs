//! Executor: apply pending migrations one at a time, each in its own
//! transaction together with its history row.
//!
//! The run stops at the first failure. Migrations committed before the
//! failure stay committed.

use crate::core::checksum::content_hash;
use crate::db::history::HistoryStore;
use crate::errors::{AppError, AppResult};
use crate::models::Migration;
use crate::ui::messages::{step, success, warning};
use crate::utils::files::read_migration;
use crate::utils::time;
use rusqlite::Connection;

/// Source of the `run_at` stamp.
pub trait Clock {
    fn now(&self) -> String;
}

/// Wall clock, UTC.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        time::now_utc()
    }
}

pub struct Executor<'a, C: Clock = SystemClock> {
    store: &'a HistoryStore,
    clock: C,
}

impl<'a> Executor<'a, SystemClock> {
    pub fn new(store: &'a HistoryStore) -> Self {
        Self {
            store,
            clock: SystemClock,
        }
    }
}

impl<'a, C: Clock> Executor<'a, C> {
    pub fn with_clock(store: &'a HistoryStore, clock: C) -> Self {
        Self { store, clock }
    }

    /// Apply `pending` in order and return how many were applied.
    pub fn apply(&self, pending: &[Migration], conn: &mut Connection) -> AppResult<usize> {
        let mut count = 0;
        for migration in pending {
            self.apply_one(migration, conn)?;
            count += 1;
        }
        Ok(count)
    }

    fn apply_one(&self, migration: &Migration, conn: &mut Connection) -> AppResult<()> {
        step(format!("Applying {}", migration.name));

        let content = read_migration(&migration.path)?;
        let sql = content.trim();

        // Untrimmed, matching what reconcile hashes.
        let hash = content_hash(&content);

        let tx = conn.transaction()?;

        if sql.is_empty() {
            warning(format!(
                "{} is empty: recording it without executing anything",
                migration.name
            ));
        } else if let Err(e) = tx.execute_batch(sql) {
            // Dropping `tx` rolls back.
            return Err(AppError::SqlExecution {
                name: migration.name.clone(),
                message: e.to_string(),
            });
        }

        let run_at = self.clock.now();
        self.store.append(&tx, &migration.name, &run_at, &hash)?;

        tx.commit().map_err(|e| AppError::SqlExecution {
            name: migration.name.clone(),
            message: format!("commit failed: {e}"),
        })?;

        log::debug!("{} committed at {run_at} ({hash})", migration.name);
        success(format!("Applied {}", migration.name));
        Ok(())
    }
}
