use serde::Serialize;

/// One row of the history table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AppliedRecord {
    pub id: i64,
    pub name: String,
    pub applied_at: String, // ⇔ run_at (TEXT "YYYY-MM-DD HH:MM:SS", UTC)
    pub hash: Option<String>, // ⇔ hash (hex SHA-256, NULL only for rows written by hand)
}

impl AppliedRecord {
    /// First 12 hex chars of the hash, for compact listings.
    pub fn short_hash(&self) -> &str {
        match &self.hash {
            Some(h) => match h.char_indices().nth(12) {
                Some((idx, _)) => &h[..idx],
                None => h,
            },
            None => "--",
        }
    }
}
