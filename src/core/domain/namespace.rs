//! Namespace type.
//!
//! The optional ownership prefix carried by every managed record name.

use crate::core::constants::{RECORD_MARKER, SEPARATOR};
use crate::core::validation::validate_namespace;
use crate::error::ValidationError;

/// Ownership namespace for record names.
///
/// Stored lowercased, since record names are lowercase. An empty string is
/// the same as no namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Namespace(Option<String>);

impl Namespace {
    /// No namespace: records are named `gh-secret-{key}-{fragment}`.
    pub fn none() -> Self {
        Self(None)
    }

    /// Validate and normalize a namespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidNamespace` for characters that would
    /// break record-name parsing.
    pub fn new(namespace: &str) -> Result<Self, ValidationError> {
        if namespace.is_empty() {
            return Ok(Self::none());
        }
        validate_namespace(namespace)?;
        Ok(Self(Some(namespace.to_ascii_lowercase())))
    }

    /// Build from an optional string, treating `None` and `""` alike.
    ///
    /// # Errors
    ///
    /// Same as [`Namespace::new`].
    pub fn from_option(namespace: Option<&str>) -> Result<Self, ValidationError> {
        namespace.map_or_else(|| Ok(Self::none()), Self::new)
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Leading part of every record name in this namespace, e.g. `ci-gh-secret-`.
    pub fn record_prefix(&self) -> String {
        match &self.0 {
            Some(ns) => format!("{}{}{}", ns, SEPARATOR, RECORD_MARKER),
            None => RECORD_MARKER.to_string(),
        }
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_deref().unwrap_or("(none)"))
    }
}
