//! DesiredSecrets type.
//!
//! The declared target state for one reconciliation pass.

use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::core::domain::{EnvFile, SecretValue};
use crate::core::types::SecretKey;
use crate::core::validation::{validate_key, validate_value};
use crate::error::{Result, ValidationError};

/// Mapping from secret key to value.
///
/// Keys are validated GitHub secret names and unique ignoring ASCII case,
/// since the store treats `foo` and `FOO` as the same secret.
#[derive(Debug, Clone, Default)]
pub struct DesiredSecrets {
    secrets: BTreeMap<SecretKey, SecretValue>,
}

impl DesiredSecrets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from key/value pairs.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` on an invalid key, an empty value, or a
    /// repeated key.
    pub fn from_pairs<K, V, I>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<SecretValue>,
    {
        let mut desired = Self::new();
        for (key, value) in pairs {
            desired.insert(key, value)?;
        }
        Ok(desired)
    }

    /// Add one secret.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` on an invalid key, an empty value, or a
    /// repeated key.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<SecretValue>,
    ) -> Result<(), ValidationError> {
        let key = key.into();
        let value = value.into();

        validate_key(&key)?;
        validate_value(&key, &value)?;

        if self.contains(&key) {
            return Err(ValidationError::DuplicateKey(key));
        }

        self.secrets.insert(key, value);
        Ok(())
    }

    /// Add every entry of a .env file.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be read, or `ValidationError`
    /// for any invalid or repeated entry.
    pub fn extend_from_env_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let env = EnvFile::load(path)?;
        for (key, value) in env.into_entries() {
            self.insert(key, value)?;
        }
        Ok(())
    }

    /// Add a secret whose value comes from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingEnv` if the variable is unset or not
    /// valid UTF-8.
    pub fn insert_from_env(&mut self, key: &str) -> Result<(), ValidationError> {
        let value = std::env::var(key).map_err(|_| ValidationError::MissingEnv(key.to_string()))?;
        debug!(key, "read secret from environment");
        self.insert(key, value)
    }

    /// Whether `key` is declared, ignoring ASCII case.
    pub fn contains(&self, key: &str) -> bool {
        self.secrets.keys().any(|k| k.eq_ignore_ascii_case(key))
    }

    pub fn get(&self, key: &str) -> Option<&SecretValue> {
        self.secrets.get(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.secrets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SecretValue)> {
        self.secrets.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}
