//! Timestamp utilities: the `run_at` stamp recorded with each applied migration.

use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Layout of the `run_at` column.
pub const RUN_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Returned when a timestamp cannot be rendered.
pub const FALLBACK_TIMESTAMP: &str = "1970-01-01 00:00:00";

/// Current UTC time as `YYYY-MM-DD HH:MM:SS`.
pub fn now_utc() -> String {
    format_utc(Utc::now())
}

/// Render `at` in the `run_at` layout.
///
/// Never fails: a formatting error yields [`FALLBACK_TIMESTAMP`] so that a
/// successful migration is never aborted by its bookkeeping stamp.
pub fn format_utc(at: DateTime<Utc>) -> String {
    let mut out = String::with_capacity(19);
    match write!(out, "{}", at.format(RUN_AT_FORMAT)) {
        Ok(()) => out,
        Err(_) => {
            log::warn!("failed to format timestamp, using fallback");
            FALLBACK_TIMESTAMP.to_string()
        }
    }
}
