//! Reconciliation planning.
//!
//! Turns desired state, inventory and ownership into the minimal operation
//! set. Conflicts are checked for every key before any operation is emitted,
//! so a rejected plan never carries partial work.

use tracing::debug;

use crate::core::domain::{DesiredSecrets, Inventory, ManagedSet, Namespace, Operation, Plan};
use crate::core::fingerprint::{name_for, tombstone_name};
use crate::error::OwnershipConflict;

/// Compute the operations that converge the store onto `desired`.
///
/// 1. A desired key present in `inventory` but not in `managed` is a conflict.
/// 2. Every desired key gets a `Create`; the store upserts.
/// 3. Every managed key no longer desired gets a `Delete`.
///
/// # Errors
///
/// Returns `OwnershipConflict` naming the first conflicting key if any
/// desired key is owned by someone else. No plan is returned in that case.
pub fn plan(
    desired: &DesiredSecrets,
    inventory: &Inventory,
    managed: &ManagedSet,
    namespace: &Namespace,
) -> Result<Plan, OwnershipConflict> {
    let conflicts: Vec<String> = desired
        .keys()
        .filter(|key| inventory.contains(key) && !managed.contains(key))
        .map(str::to_string)
        .collect();

    if !conflicts.is_empty() {
        debug!(keys = ?conflicts, "ownership conflict");
        return Err(OwnershipConflict::new(conflicts));
    }

    let creates = desired.iter().map(|(key, value)| Operation::Create {
        key: key.to_string(),
        value: value.clone(),
        name: name_for(key, value, namespace),
    });

    let deletes = managed
        .keys()
        .filter(|key| !desired.contains(key))
        .map(|key| Operation::Delete {
            key: key.to_string(),
            name: tombstone_name(key, namespace),
        });

    let operations: Vec<Operation> = creates.chain(deletes).collect();
    let plan = Plan::new(operations);

    debug!(
        creates = plan.creates().count(),
        deletes = plan.deletes().count(),
        "planned"
    );

    Ok(plan)
}
