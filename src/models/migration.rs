use serde::Serialize;
use std::path::PathBuf;

/// A migration script found on disk.
///
/// `name` is the full filename (`001_create_users.sql`) and is the key
/// matched against the history table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Migration {
    pub number: u32,
    pub name: String,
    pub path: PathBuf,
}

impl Migration {
    pub fn new(number: u32, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            number,
            name: name.into(),
            path: path.into(),
        }
    }
}
