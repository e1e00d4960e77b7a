//! Reconciliation pass.
//!
//! Drives one pass through its states:
//!
//! ```text
//! Init → AuthChecked → InventoryLoaded → Classified → Planned → Executing → Done
//!   │         │               │                           │
//!   └─────────┴───────────────┴───────────────────────────┴──→ Aborted(reason)
//! ```
//!
//! A state is entered when its step starts, so a failing step aborts from
//! the state named after it: validation from `Init`, auth from
//! `AuthChecked`, a listing under [`ProbePolicy::Abort`] from
//! `InventoryLoaded`, an ownership conflict from `Planned`.
//!
//! Every fatal error is raised before `Executing`, so an aborted pass has
//! made no changes. `Executing` always reaches `Done`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::core::auth::AuthGuard;
use crate::core::constants::DEFAULT_CONCURRENCY;
use crate::core::domain::{DesiredSecrets, Inventory, Namespace, PassReport, RepoRef};
use crate::core::executor::OperationExecutor;
use crate::core::gh::Gh;
use crate::core::inventory::InventoryProbe;
use crate::core::ownership::{classify, classify_all, Classification};
use crate::core::planner;
use crate::core::runner::CommandRunner;
use crate::error::{Error, Result, ValidationError};

/// What to do when the inventory listing fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbePolicy {
    /// Treat the inventory as empty and create every desired key. Can mask
    /// an ownership conflict while the store is unreachable.
    #[default]
    Degrade,
    /// Abort the pass before planning.
    Abort,
}

/// Why a pass stopped before executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    Validation,
    Auth,
    Probe,
    Conflict,
}

/// States of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassState {
    Init,
    AuthChecked,
    InventoryLoaded,
    Classified,
    Planned,
    Executing,
    Done,
    Aborted(AbortReason),
}

/// Settings for a pass.
#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    pub namespace: Namespace,
    pub dry_run: bool,
    pub probe_policy: ProbePolicy,
    pub concurrency: usize,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            namespace: Namespace::none(),
            dry_run: false,
            probe_policy: ProbePolicy::default(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

/// Runs reconciliation passes against the store behind a `gh` handle.
#[derive(Debug, Clone)]
pub struct Reconciler {
    gh: Gh,
    options: ReconcileOptions,
}

impl Reconciler {
    pub fn new(runner: Arc<dyn CommandRunner>, options: ReconcileOptions) -> Self {
        Self::with_gh(Gh::new(runner), options)
    }

    pub fn with_gh(gh: Gh, options: ReconcileOptions) -> Self {
        Self { gh, options }
    }

    pub fn options(&self) -> &ReconcileOptions {
        &self.options
    }

    /// Run one pass converging `repo` onto `desired`.
    ///
    /// # Errors
    ///
    /// Returns `Validation`, `Auth`, `Conflict`, or (under
    /// [`ProbePolicy::Abort`]) `Probe` errors, all before any mutation.
    /// Per-operation failures are reported in [`PassReport::failures`].
    pub fn run(&self, desired: &DesiredSecrets, repo: &str) -> Result<PassReport> {
        self.run_observed(desired, repo, |_| {})
    }

    /// [`run`](Self::run), calling `observe` on every state entered.
    pub fn run_observed(
        &self,
        desired: &DesiredSecrets,
        repo: &str,
        mut observe: impl FnMut(PassState),
    ) -> Result<PassReport> {
        let mut enter = |state: PassState| {
            debug!(?state, "pass state");
            observe(state);
        };

        let namespace = &self.options.namespace;
        let dry_run = self.options.dry_run;

        enter(PassState::Init);

        let repo = match validate_inputs(desired, repo) {
            Ok(repo) => repo,
            Err(e) => return Err(aborted(&mut enter, AbortReason::Validation, e.into())),
        };

        info!(repo = %repo, namespace = %namespace, secrets = desired.len(), dry_run, "starting pass");

        enter(PassState::AuthChecked);
        if let Err(e) = AuthGuard::new(self.gh.clone()).check_authenticated() {
            return Err(aborted(&mut enter, AbortReason::Auth, e.into()));
        }

        enter(PassState::InventoryLoaded);
        let inventory = match InventoryProbe::new(self.gh.clone()).list_existing(&repo) {
            Ok(inventory) => inventory,
            Err(e) if self.options.probe_policy == ProbePolicy::Abort => {
                return Err(aborted(&mut enter, AbortReason::Probe, e.into()));
            }
            Err(e) => {
                warn!(repo = %repo, error = %e, "inventory unavailable, treating as empty");
                Inventory::degraded()
            }
        };

        enter(PassState::Classified);
        let managed = classify(&inventory, namespace);
        debug!(managed = managed.len(), inventory = inventory.len(), "classified");

        enter(PassState::Planned);
        let plan = match planner::plan(desired, &inventory, &managed, namespace) {
            Ok(plan) => plan,
            Err(e) => return Err(aborted(&mut enter, AbortReason::Conflict, e.into())),
        };
        let summary = plan.summary();

        enter(PassState::Executing);
        let execution = OperationExecutor::new(self.gh.clone(), repo.clone())
            .with_concurrency(self.options.concurrency)
            .execute_all(plan.into_operations(), dry_run);

        info!(
            repo = %repo,
            applied = execution.handles.len(),
            failed = execution.failures.len(),
            dry_run,
            "pass complete"
        );
        enter(PassState::Done);

        Ok(PassReport {
            repo,
            namespace: namespace.as_deref().map(str::to_string),
            dry_run,
            inventory_degraded: inventory.is_degraded(),
            plan: summary,
            handles: execution.handles,
            failures: execution.failures,
        })
    }

    /// Read-only view of the repository's inventory by ownership.
    ///
    /// # Errors
    ///
    /// Returns `Validation`, `Auth`, or `Probe` errors. A failed listing is
    /// not degraded here, since there is nothing to fall back to.
    pub fn inspect(&self, repo: &str) -> Result<(Inventory, Classification)> {
        let repo = RepoRef::parse(repo)?;
        AuthGuard::new(self.gh.clone()).check_authenticated()?;
        let inventory = InventoryProbe::new(self.gh.clone()).list_existing(&repo)?;
        let classification = classify_all(&inventory, &self.options.namespace);
        Ok((inventory, classification))
    }
}

fn aborted(enter: &mut impl FnMut(PassState), reason: AbortReason, error: Error) -> Error {
    warn!(?reason, %error, "pass aborted");
    enter(PassState::Aborted(reason));
    error
}

fn validate_inputs(desired: &DesiredSecrets, repo: &str) -> Result<RepoRef, ValidationError> {
    let repo = RepoRef::parse(repo)?;
    if desired.is_empty() {
        return Err(ValidationError::EmptyDesired);
    }
    Ok(repo)
}
