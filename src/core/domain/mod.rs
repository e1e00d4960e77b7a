//! Domain types.

mod desired;
mod env;
mod inventory;
mod managed;
mod namespace;
mod operation;
mod plan;
mod repo;
mod report;
mod secret;

pub use desired::DesiredSecrets;
pub use env::EnvFile;
pub use inventory::Inventory;
pub use managed::{ManagedRecord, ManagedSet};
pub use namespace::Namespace;
pub use operation::{Handle, Operation, OperationFailure, OperationKind, Retraction};
pub use plan::{Plan, PlanSummary, PlannedEntry};
pub use repo::RepoRef;
pub use report::PassReport;
pub use secret::SecretValue;
