//! Managed record types.
//!
//! Records recovered from inventory names that carry this namespace's prefix.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::core::types::{Fingerprint, RecordName, SecretKey};

/// A store entry owned by the current namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagedRecord {
    /// Owning key, as spelled in the record name.
    pub key: SecretKey,
    /// Whatever followed the key, usually an 8-character fingerprint.
    pub fingerprint: Fingerprint,
    /// The full inventory name the record was parsed from.
    pub name: RecordName,
}

/// Keys owned by the current namespace.
///
/// Membership ignores ASCII case: record names carry keys lowercased while
/// desired keys are usually uppercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagedSet {
    keys: BTreeSet<SecretKey>,
    records: Vec<ManagedRecord>,
}

impl ManagedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding bare keys, with no backing records.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for key in keys {
            set.insert_key(key.into());
        }
        set
    }

    /// Add a parsed record. Several records may share a key.
    pub fn insert(&mut self, record: ManagedRecord) {
        self.insert_key(record.key.clone());
        self.records.push(record);
    }

    fn insert_key(&mut self, key: SecretKey) {
        if !self.contains(&key) {
            self.keys.insert(key);
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k.eq_ignore_ascii_case(key))
    }

    /// Distinct keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn records(&self) -> &[ManagedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
