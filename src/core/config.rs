//! Configuration file management.
//!
//! Reads and validates the optional `.ghsync.toml` file. CLI flags override
//! whatever it sets; anything left unset falls back to built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants::{self, PREVIEW_ENV};
use crate::core::domain::{Namespace, RepoRef};
use crate::core::reconcile::ProbePolicy;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `.ghsync.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sync: SyncConfig,
}

/// The `[sync]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyncConfig {
    /// Default target, `owner/repo`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default)]
    pub dry_run: bool,
    #[serde(default)]
    pub probe_policy: ProbePolicy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<usize>,
    /// Path or name of the `gh` binary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gh: Option<String>,
}

impl Config {
    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load `.ghsync.toml` from the current directory.
    ///
    /// # Errors
    ///
    /// See [`Config::load_from`].
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load and validate a configuration file.
    ///
    /// A missing file is not an error and yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file exists but cannot be read,
    /// `ConfigError::Parse` for malformed TOML, or `ConfigError::InvalidValue`
    /// if a field fails validation.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;

        debug!(
            repo = config.sync.repo.as_deref().unwrap_or("-"),
            dry_run = config.sync.dry_run,
            "config loaded"
        );

        Ok(config)
    }

    /// Validate field contents.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let sync = &self.sync;

        if let Some(repo) = &sync.repo {
            RepoRef::parse(repo).map_err(|e| invalid("repo", e.to_string()))?;
        }
        if let Some(namespace) = &sync.namespace {
            Namespace::new(namespace).map_err(|e| invalid("namespace", e.to_string()))?;
        }
        if sync.concurrency == Some(0) {
            return Err(invalid("concurrency", "must be at least 1".to_string()).into());
        }
        if matches!(&sync.gh, Some(gh) if gh.trim().is_empty()) {
            return Err(invalid("gh", "cannot be empty".to_string()).into());
        }

        Ok(())
    }

    /// Configured namespace, already validated.
    pub fn namespace(&self) -> Result<Namespace> {
        Ok(Namespace::from_option(self.sync.namespace.as_deref())?)
    }

    /// The `gh` program to invoke.
    pub fn gh_program(&self) -> &str {
        self.sync.gh.as_deref().unwrap_or(constants::GH_BINARY)
    }

    pub fn concurrency(&self) -> usize {
        self.sync.concurrency.unwrap_or(constants::DEFAULT_CONCURRENCY)
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidValue { field, reason }
}

/// Whether the surrounding tool asked for a preview via `GHSYNC_PREVIEW`.
///
/// Any non-empty value other than `0` or `false` counts.
pub fn preview_requested() -> bool {
    std::env::var(PREVIEW_ENV).map_or(false, |v| is_truthy(&v))
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value != "0" && !value.eq_ignore_ascii_case("false")
}
