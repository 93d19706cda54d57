//! Reconciliation: diff the migrations on disk against the history table.
//!
//! The result is either the ordered list of migrations that are safe to
//! apply, or the first inconsistency found. Checks run in a fixed order:
//! missing files, then drift, then gaps.

use crate::core::checksum::file_hash;
use crate::core::discovery::parse_filename;
use crate::errors::{AppError, AppResult};
use crate::models::{AppliedRecord, Migration};
use std::collections::{HashMap, HashSet};

/// Compute the pending migrations.
///
/// `discovered` must be sorted ascending (as returned by `discovery::scan`);
/// the pending list keeps that order. The only I/O is re-reading the files
/// of already-applied migrations to compare their hashes.
pub fn reconcile(discovered: &[Migration], applied: &[AppliedRecord]) -> AppResult<Vec<Migration>> {
    let on_disk: HashMap<&str, &Migration> =
        discovered.iter().map(|m| (m.name.as_str(), m)).collect();

    // Records whose name does not follow the convention were not written by
    // this tool; they play no part in reconciliation.
    let recorded: Vec<(&AppliedRecord, u32)> = applied
        .iter()
        .filter_map(|r| match parse_filename(&r.name) {
            Ok(n) => Some((r, n)),
            Err(_) => {
                log::warn!("ignoring history entry '{}': not a migration filename", r.name);
                None
            }
        })
        .collect();

    let applied_names: HashSet<&str> = recorded.iter().map(|(r, _)| r.name.as_str()).collect();
    let max_applied = recorded.iter().map(|(_, n)| *n).max().unwrap_or(0);

    for (record, _) in &recorded {
        if !on_disk.contains_key(record.name.as_str()) {
            return Err(AppError::MissingMigrationFile(record.name.clone()));
        }
    }

    for (record, _) in &recorded {
        let migration = on_disk[record.name.as_str()];
        verify_hash(record, migration)?;
    }

    let mut pending = Vec::new();
    for migration in discovered {
        if applied_names.contains(migration.name.as_str()) {
            continue;
        }

        if migration.number <= max_applied {
            return Err(AppError::MigrationGapDetected {
                name: migration.name.clone(),
                number: migration.number,
                max_applied,
            });
        }

        pending.push(migration.clone());
    }

    log::debug!(
        "reconciled {} discovered / {} applied: {} pending (max applied {})",
        discovered.len(),
        recorded.len(),
        pending.len(),
        max_applied
    );

    Ok(pending)
}

fn verify_hash(record: &AppliedRecord, migration: &Migration) -> AppResult<()> {
    let actual = file_hash(&migration.path)?;

    match record.hash.as_deref() {
        Some(expected) if expected.eq_ignore_ascii_case(&actual) => Ok(()),
        other => Err(AppError::DriftDetected {
            name: record.name.clone(),
            expected: other.unwrap_or("<none>").to_string(),
            actual,
        }),
    }
}
