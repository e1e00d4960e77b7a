//! Inventory type.
//!
//! Point-in-time snapshot of the secret names a store reports for a repository.

use std::collections::BTreeSet;

/// Secret names currently reported by the store.
///
/// May be stale by the time operations run. A degraded inventory is the
/// empty stand-in used when the listing call failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    names: BTreeSet<String>,
    degraded: bool,
}

impl Inventory {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            degraded: false,
        }
    }

    /// Empty inventory standing in for a failed listing.
    pub fn degraded() -> Self {
        Self {
            names: BTreeSet::new(),
            degraded: true,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Whether a secret with this name exists, ignoring ASCII case.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    /// Names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
