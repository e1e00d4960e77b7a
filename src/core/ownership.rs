//! Ownership classification.
//!
//! Splits an inventory into records this namespace manages and everything else.

use tracing::trace;

use crate::core::constants::SEPARATOR;
use crate::core::domain::{Inventory, ManagedRecord, ManagedSet, Namespace};

/// Inventory split by ownership.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    pub managed: ManagedSet,
    /// Names that do not carry this namespace's prefix, sorted.
    pub foreign: Vec<String>,
}

/// Keys owned by `namespace` in `inventory`.
pub fn classify(inventory: &Inventory, namespace: &Namespace) -> ManagedSet {
    classify_all(inventory, namespace).managed
}

/// Managed records plus the foreign names.
pub fn classify_all(inventory: &Inventory, namespace: &Namespace) -> Classification {
    let prefix = namespace.record_prefix();
    let mut classification = Classification::default();

    for name in inventory.names() {
        match parse_record(name, &prefix) {
            Some(record) => {
                trace!(name, key = %record.key, "managed record");
                classification.managed.insert(record);
            }
            None => classification.foreign.push(name.to_string()),
        }
    }

    classification
}

/// Parse `{prefix}{key}[-{fingerprint}]`, matching the prefix ignoring ASCII case.
///
/// A name with nothing after the prefix has no key and is not a record.
pub fn parse_record(name: &str, prefix: &str) -> Option<ManagedRecord> {
    let head = name.get(..prefix.len())?;
    if !head.eq_ignore_ascii_case(prefix) {
        return None;
    }

    let rest = &name[prefix.len()..];
    let (key, fingerprint) = rest.split_once(SEPARATOR).unwrap_or((rest, ""));
    if key.is_empty() {
        return None;
    }

    Some(ManagedRecord {
        key: key.to_string(),
        fingerprint: fingerprint.to_string(),
        name: name.to_string(),
    })
}
