//! Migration discovery: turn a directory listing into an ordered list of
//! numbered migrations.

use crate::errors::{AppError, AppResult};
use crate::models::Migration;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// `<digits>_<name>.sql`, the name part must not be empty.
static FILENAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^([0-9]+)_(.+)\.sql$").expect("valid filename regex"));

/// Parse the migration number out of a filename.
///
/// `001_init.sql` → 1. Anything not following the convention, or a number
/// that does not fit in a u32, is `InvalidFilenameFormat`.
pub fn parse_filename(filename: &str) -> AppResult<u32> {
    let caps = FILENAME_RE
        .captures(filename)
        .ok_or_else(|| AppError::InvalidFilenameFormat(filename.to_string()))?;

    caps[1]
        .parse::<u32>()
        .map_err(|_| AppError::InvalidFilenameFormat(filename.to_string()))
}

/// Scan `dir` for migration scripts, sorted ascending by number.
///
/// Files that do not follow the naming convention are skipped. Two files
/// with the same number abort the scan.
pub fn scan(dir: &Path) -> AppResult<Vec<Migration>> {
    if !dir.is_dir() {
        return Err(AppError::MigrationDirectoryNotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        // follows symlinks
        if !path.is_file() {
            continue;
        }

        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            log::debug!("skipping non UTF-8 filename {}", path.display());
            continue;
        };

        files.push((filename.to_string(), path.clone()));
    }

    // Deterministic order so duplicate reports are stable across platforms.
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let mut seen: HashMap<u32, String> = HashMap::new();
    let mut migrations = Vec::with_capacity(files.len());

    for (filename, path) in files {
        let number = match parse_filename(&filename) {
            Ok(n) => n,
            Err(_) => {
                log::debug!("ignoring {filename}: not a migration filename");
                continue;
            }
        };

        if let Some(first) = seen.get(&number) {
            return Err(AppError::DuplicateMigrationNumber {
                number,
                first: first.clone(),
                second: filename,
            });
        }
        seen.insert(number, filename.clone());

        migrations.push(Migration::new(number, filename, path));
    }

    migrations.sort_by_key(|m| m.number);

    log::debug!(
        "discovered {} migration(s) in {}",
        migrations.len(),
        dir.display()
    );

    Ok(migrations)
}
