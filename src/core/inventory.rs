//! Inventory probe.
//!
//! Lists the secret names a repository currently has.

use serde::Deserialize;
use tracing::debug;

use crate::core::domain::{Inventory, RepoRef};
use crate::core::gh::Gh;
use crate::error::ProbeError;

/// One record of `gh secret list --json name`.
///
/// Other fields are ignored, and a missing or non-string `name` skips the record.
#[derive(Debug, Deserialize)]
struct ListedSecret {
    #[serde(default)]
    name: Option<serde_json::Value>,
}

/// Lists existing secret names through `gh`.
#[derive(Debug, Clone)]
pub struct InventoryProbe {
    gh: Gh,
}

impl InventoryProbe {
    pub fn new(gh: Gh) -> Self {
        Self { gh }
    }

    /// Fetch the current inventory for `repo`.
    ///
    /// Callers decide whether a failure degrades to an empty inventory or
    /// aborts; see [`ProbePolicy`](crate::core::reconcile::ProbePolicy).
    ///
    /// # Errors
    ///
    /// Returns `ProbeError` if the call cannot run, exits non-zero, or
    /// returns something other than a JSON array of records.
    pub fn list_existing(&self, repo: &RepoRef) -> Result<Inventory, ProbeError> {
        debug!(repo = %repo, "listing existing secrets");

        let output = self.gh.secret_list(repo).map_err(ProbeError::Spawn)?;

        if !output.success {
            return Err(ProbeError::Failed {
                status: output.status.clone(),
                stderr: output.stderr_text(),
            });
        }

        let inventory = parse_listing(&output.stdout)?;
        debug!(repo = %repo, count = inventory.len(), "inventory loaded");
        Ok(inventory)
    }
}

/// Parse a JSON array of `{"name": ...}` records.
pub fn parse_listing(raw: &[u8]) -> Result<Inventory, ProbeError> {
    let records: Vec<ListedSecret> = serde_json::from_slice(raw)?;
    let names = records.into_iter().filter_map(|r| match r.name {
        Some(serde_json::Value::String(name)) => Some(name),
        _ => None,
    });
    Ok(Inventory::new(names))
}
