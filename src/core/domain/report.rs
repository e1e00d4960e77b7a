//! PassReport type.
//!
//! Everything one reconciliation pass produced.

use serde::Serialize;

use crate::core::domain::{Handle, OperationFailure, PlanSummary, RepoRef};

/// Outcome of a pass that reached `Done`.
///
/// Per-operation failures do not abort a pass; they land in `failures`.
#[derive(Debug, Serialize)]
pub struct PassReport {
    pub repo: RepoRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub dry_run: bool,
    /// The inventory listing failed and was treated as empty.
    pub inventory_degraded: bool,
    pub plan: PlanSummary,
    pub handles: Vec<Handle>,
    pub failures: Vec<OperationFailure>,
}

impl PassReport {
    /// Whether every planned operation succeeded.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Keys whose operation failed, sorted.
    pub fn failed_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.failures.iter().map(|f| f.key.as_str()).collect();
        keys.sort_unstable();
        keys
    }
}
