//! Plan type.
//!
//! The operation set produced by the planner.

use serde::Serialize;

use crate::core::domain::{Operation, OperationKind};
use crate::core::types::{RecordName, SecretKey};

/// An unordered set of operations.
///
/// Operations touch disjoint keys, so no order is implied by the storage order.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    operations: Vec<Operation>,
}

impl Plan {
    pub(crate) fn new(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn into_operations(self) -> Vec<Operation> {
        self.operations
    }

    pub fn creates(&self) -> impl Iterator<Item = &Operation> {
        self.of_kind(OperationKind::Create)
    }

    pub fn deletes(&self) -> impl Iterator<Item = &Operation> {
        self.of_kind(OperationKind::Delete)
    }

    fn of_kind(&self, kind: OperationKind) -> impl Iterator<Item = &Operation> {
        self.operations.iter().filter(move |op| op.kind() == kind)
    }

    /// Find the operation for a key, ignoring ASCII case.
    pub fn get(&self, key: &str) -> Option<&Operation> {
        self.operations
            .iter()
            .find(|op| op.key().eq_ignore_ascii_case(key))
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Value-free view of the plan, sorted for display.
    pub fn summary(&self) -> PlanSummary {
        let mut entries: Vec<PlannedEntry> = self
            .operations
            .iter()
            .map(|op| PlannedEntry {
                kind: op.kind(),
                key: op.key().to_string(),
                name: op.name().to_string(),
            })
            .collect();
        entries.sort_by(|a, b| (a.kind, &a.key).cmp(&(b.kind, &b.key)));

        PlanSummary {
            creates: entries.iter().filter(|e| e.kind == OperationKind::Create).count(),
            deletes: entries.iter().filter(|e| e.kind == OperationKind::Delete).count(),
            entries,
        }
    }
}

/// One line of a plan summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedEntry {
    pub kind: OperationKind,
    pub key: SecretKey,
    pub name: RecordName,
}

/// Counts and entries of a plan, without values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    pub creates: usize,
    pub deletes: usize,
    pub entries: Vec<PlannedEntry>,
}
