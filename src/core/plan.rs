use crate::core::{discovery, reconcile};
use crate::errors::AppResult;
use crate::models::{AppliedRecord, Migration};
use serde::Serialize;
use std::path::Path;

/// What the history says and what is left to run.
#[derive(Debug, Serialize)]
pub struct Plan {
    pub applied: Vec<AppliedRecord>,
    pub pending: Vec<Migration>,
}

impl Plan {
    /// Scan `dir` and reconcile it against `applied`.
    pub fn build(dir: &Path, applied: Vec<AppliedRecord>) -> AppResult<Self> {
        let discovered = discovery::scan(dir)?;
        Self::from_discovered(&discovered, applied)
    }

    /// Reconcile an already scanned directory against `applied`.
    pub fn from_discovered(discovered: &[Migration], applied: Vec<AppliedRecord>) -> AppResult<Self> {
        let pending = reconcile::reconcile(discovered, &applied)?;
        Ok(Self { applied, pending })
    }

    pub fn is_up_to_date(&self) -> bool {
        self.pending.is_empty()
    }
}
