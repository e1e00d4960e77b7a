//! Operation and handle types.
//!
//! An `Operation` is one planned change. A `Handle` is what executing (or
//! simulating) it produced.

use serde::{Serialize, Serializer};

use crate::core::domain::{RepoRef, SecretValue};
use crate::core::types::{RecordName, SecretKey};
use crate::error::ExecError;

/// Kind of change an operation makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Create,
    Delete,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create => f.write_str("create"),
            Self::Delete => f.write_str("delete"),
        }
    }
}

/// One planned change.
///
/// `Create` is also the update path: the store upserts.
#[derive(Debug, Clone)]
pub enum Operation {
    Create {
        key: SecretKey,
        value: SecretValue,
        name: RecordName,
    },
    Delete {
        key: SecretKey,
        name: RecordName,
    },
}

impl Operation {
    pub fn key(&self) -> &str {
        match self {
            Self::Create { key, .. } | Self::Delete { key, .. } => key,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Create { name, .. } | Self::Delete { name, .. } => name,
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Create { .. } => OperationKind::Create,
            Self::Delete { .. } => OperationKind::Delete,
        }
    }
}

/// The removal call paired with an applied create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Retraction {
    pub repo: RepoRef,
    pub key: SecretKey,
}

/// Result of one executed or simulated operation.
///
/// Never carries the secret value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Handle {
    pub name: RecordName,
    pub key: SecretKey,
    pub kind: OperationKind,
    pub simulated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retraction: Option<Retraction>,
}

/// An operation that failed to apply.
#[derive(Debug, Serialize)]
pub struct OperationFailure {
    pub key: SecretKey,
    pub name: RecordName,
    pub kind: OperationKind,
    #[serde(serialize_with = "serialize_display")]
    pub error: ExecError,
}

fn serialize_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: std::fmt::Display,
    S: Serializer,
{
    serializer.collect_str(value)
}
