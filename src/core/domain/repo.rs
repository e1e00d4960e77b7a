//! RepoRef type.
//!
//! A validated `owner/repo` identifier.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::str::FromStr;

use crate::error::ValidationError;

/// `owner/repo`, where `\w` is limited to ASCII.
static REPO_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+/[A-Za-z0-9_.-]+$").unwrap_or_else(|_| unreachable!())
});

/// A repository reference that has passed validation.
///
/// Construction is the only place the format is checked, so holding a
/// `RepoRef` means the value is safe to hand to the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct RepoRef(String);

impl RepoRef {
    /// Validate and wrap a repository reference.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidRepo` if the string is not `owner/repo`.
    pub fn parse(repo: &str) -> Result<Self, ValidationError> {
        if !REPO_REGEX.is_match(repo) {
            return Err(ValidationError::InvalidRepo(repo.to_string()));
        }
        Ok(Self(repo.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Repository owner (user or organization).
    pub fn owner(&self) -> &str {
        self.0.split_once('/').map_or("", |(owner, _)| owner)
    }

    /// Repository name.
    pub fn name(&self) -> &str {
        self.0.split_once('/').map_or("", |(_, name)| name)
    }
}

impl FromStr for RepoRef {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<RepoRef> for String {
    fn from(repo: RepoRef) -> Self {
        repo.0
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
