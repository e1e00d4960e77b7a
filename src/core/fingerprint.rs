//! Content-addressed record naming.
//!
//! Names are `{namespace-}gh-secret-{key}-{fragment}`, where `fragment` is the
//! first 8 hex characters of SHA-256 over `key ‖ value`. The fragment shows
//! up in provisioning state, so the hash must not reveal the value.

use sha2::{Digest, Sha256};

use crate::core::constants::{DELETED_SUFFIX, FRAGMENT_LEN, SEPARATOR};
use crate::core::domain::{Namespace, SecretValue};
use crate::core::types::{Fingerprint, RecordName};

/// Fingerprint of a key/value pair.
pub fn fingerprint(key: &str, value: &SecretValue) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    hasher.update(value.expose().as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..FRAGMENT_LEN].to_string()
}

/// Record name for a desired key/value pair.
///
/// Deterministic in its inputs; any change to the value changes the name.
pub fn name_for(key: &str, value: &SecretValue, namespace: &Namespace) -> RecordName {
    record_name(key, &fingerprint(key, value), namespace)
}

/// Record name for removing a managed key.
pub fn tombstone_name(key: &str, namespace: &Namespace) -> RecordName {
    record_name(key, DELETED_SUFFIX, namespace)
}

fn record_name(key: &str, suffix: &str, namespace: &Namespace) -> RecordName {
    format!(
        "{}{}{}{}",
        namespace.record_prefix(),
        key.to_ascii_lowercase(),
        SEPARATOR,
        suffix
    )
}
