//! ghsync - Declarative GitHub Actions secret synchronization.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── apply         # Run a pass (or preview it with `plan`)
//! │   ├── status        # Show managed and foreign secrets
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .ghsync.toml management
//!     ├── domain/       # Value types: repo, secrets, plan, report
//!     ├── runner        # CommandRunner trait + process runner
//!     ├── gh            # gh CLI invocations
//!     ├── auth          # Authentication precondition
//!     ├── inventory     # Secret listing
//!     ├── ownership     # Managed vs foreign classification
//!     ├── fingerprint   # Content-addressed record names
//!     ├── planner       # Desired state → operations
//!     ├── executor      # Apply / simulate operations
//!     └── reconcile     # Pass state machine
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use ghsync::core::domain::{DesiredSecrets, Namespace};
//! use ghsync::core::reconcile::{ReconcileOptions, Reconciler};
//! use ghsync::core::runner::SystemRunner;
//!
//! # fn main() -> ghsync::error::Result<()> {
//! let desired = DesiredSecrets::from_pairs([("API_TOKEN", "s3cr3t")])?;
//! let options = ReconcileOptions {
//!     namespace: Namespace::new("ci")?,
//!     ..ReconcileOptions::default()
//! };
//! let report = Reconciler::new(Arc::new(SystemRunner), options).run(&desired, "acme/widgets")?;
//! assert!(report.is_success());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::domain::{DesiredSecrets, Namespace, PassReport, RepoRef, SecretValue};
pub use crate::core::reconcile::{ProbePolicy, ReconcileOptions, Reconciler};
pub use crate::error::{Error, Result};
