//! SHA-256 content hashing used to detect drift in applied migrations.

use crate::errors::AppResult;
use crate::utils::files::read_migration;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Lowercase hex SHA-256 of `content` (64 chars).
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Hash of the file as it is on disk right now.
pub fn file_hash(path: &Path) -> AppResult<String> {
    let content = read_migration(path)?;
    Ok(content_hash(&content))
}
