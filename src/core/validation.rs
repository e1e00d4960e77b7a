//! Input validation for reconciliation passes.
//!
//! Validates secret keys, values, and namespaces before anything reaches the store.

use crate::core::constants::RESERVED_KEY_PREFIX;
use crate::core::domain::SecretValue;
use crate::error::ValidationError;

/// Validate a secret key name.
///
/// Secret keys must be valid GitHub secret names:
/// - Only A-Z, a-z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot start with the reserved `GITHUB_` prefix
/// - Cannot be empty
///
/// Excluding `-` also keeps record names parseable, since `-` separates the
/// key from the fingerprint.
///
/// # Errors
///
/// Returns `ValidationError` if the key is invalid.
pub fn validate_key(key: &str) -> Result<(), ValidationError> {
    if key.is_empty() {
        return Err(ValidationError::EmptyKey);
    }

    if let Some(first_char) = key.chars().next() {
        if first_char.is_ascii_digit() {
            return Err(ValidationError::InvalidKey {
                key: key.to_string(),
                reason: "cannot start with a digit".to_string(),
            });
        }
    }

    for (i, ch) in key.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(ValidationError::InvalidKey {
                key: key.to_string(),
                reason: format!(
                    "invalid character '{}' at position {}. Only A-Z, a-z, 0-9, and underscore are allowed",
                    ch,
                    i + 1
                ),
            });
        }
    }

    if key
        .get(..RESERVED_KEY_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(RESERVED_KEY_PREFIX))
    {
        return Err(ValidationError::InvalidKey {
            key: key.to_string(),
            reason: format!("the {} prefix is reserved", RESERVED_KEY_PREFIX),
        });
    }

    Ok(())
}

/// Validate a secret value.
///
/// Secret values cannot be empty.
///
/// # Errors
///
/// Returns `ValidationError` if the value is empty.
pub fn validate_value(key: &str, value: &SecretValue) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyValue(key.to_string()));
    }

    Ok(())
}

/// Validate a namespace prefix.
///
/// Namespaces become the leading segment of record names, so they are
/// limited to ASCII alphanumerics, `_` and `-`, and must not start or end
/// with `-`.
///
/// # Errors
///
/// Returns `ValidationError` if the namespace is invalid.
pub fn validate_namespace(namespace: &str) -> Result<(), ValidationError> {
    let invalid = |reason: &str| ValidationError::InvalidNamespace {
        namespace: namespace.to_string(),
        reason: reason.to_string(),
    };

    if namespace.starts_with('-') || namespace.ends_with('-') {
        return Err(invalid("cannot start or end with '-'"));
    }

    if let Some(ch) = namespace
        .chars()
        .find(|ch| !ch.is_ascii_alphanumeric() && *ch != '_' && *ch != '-')
    {
        return Err(invalid(&format!("invalid character '{}'", ch)));
    }

    Ok(())
}
