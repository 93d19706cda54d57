//! Bounded file reads for migration scripts.

use crate::errors::{AppError, AppResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Migration scripts larger than this are refused.
pub const MAX_MIGRATION_BYTES: u64 = 10 * 1024 * 1024;

/// Read a migration script fully into memory, refusing anything above
/// [`MAX_MIGRATION_BYTES`].
pub fn read_migration(path: &Path) -> AppResult<String> {
    let file = File::open(path)?;

    let size = file.metadata()?.len();
    if size > MAX_MIGRATION_BYTES {
        return Err(AppError::MigrationFileTooLarge {
            path: path.to_path_buf(),
            size,
            limit: MAX_MIGRATION_BYTES,
        });
    }

    // The file may grow between metadata() and read: read one byte past the cap.
    let mut content = String::with_capacity(size as usize);
    let read = file
        .take(MAX_MIGRATION_BYTES + 1)
        .read_to_string(&mut content)?;

    if read as u64 > MAX_MIGRATION_BYTES {
        return Err(AppError::MigrationFileTooLarge {
            path: path.to_path_buf(),
            size: read as u64,
            limit: MAX_MIGRATION_BYTES,
        });
    }

    Ok(content)
}
