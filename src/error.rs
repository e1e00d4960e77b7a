//! Error types.
//!
//! Fatal kinds (`Validation`, `Auth`, `Conflict`, and `Probe` under the abort
//! policy) are raised before any operation executes. `ExecError` is per
//! operation and is collected into the pass report instead of propagating.

use thiserror::Error;

/// Top-level error for ghsync.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error(transparent)]
    Conflict(#[from] OwnershipConflict),

    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Input rejected before any external call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid repository '{0}': must be 'owner/repo'")]
    InvalidRepo(String),

    #[error("secret key cannot be empty")]
    EmptyKey,

    #[error("invalid secret key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("secret '{0}' has an empty value")]
    EmptyValue(String),

    #[error("secret '{0}' declared more than once")]
    DuplicateKey(String),

    #[error("no secrets declared")]
    EmptyDesired,

    #[error("invalid namespace '{namespace}': {reason}")]
    InvalidNamespace { namespace: String, reason: String },

    #[error("environment variable '{0}' is not set")]
    MissingEnv(String),
}

/// The identity probe could not confirm an authenticated session.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{program} not available: {reason}")]
    ProbeUnavailable { program: String, reason: String },

    #[error("not authenticated: {0}")]
    NotAuthenticated(String),
}

/// Inventory listing failed. Non-fatal unless the abort policy is selected.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("failed to run inventory listing: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("inventory listing exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("malformed inventory listing: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A desired key already exists in the store but is not owned by this namespace.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("secret '{key}' already exists in the repository but was not created by this namespace")]
pub struct OwnershipConflict {
    /// First conflicting key in lexicographic order.
    pub key: String,
    /// Every conflicting key, sorted.
    pub keys: Vec<String>,
}

impl OwnershipConflict {
    /// Build a conflict from a sorted, non-empty key list.
    pub fn new(keys: Vec<String>) -> Self {
        let key = keys.first().cloned().unwrap_or_default();
        Self { key, keys }
    }
}

/// A single operation failed to apply.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{action} '{key}' exited with {status}: {stderr}")]
    Failed {
        action: &'static str,
        key: String,
        status: String,
        stderr: String,
    },
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("no repository given: pass --repo or set sync.repo in the config file")]
    MissingRepo,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
