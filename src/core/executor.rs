//! Operation execution.
//!
//! Applies or simulates planned operations against one repository. Each
//! operation is an independent external call; a failure is recorded and the
//! rest of the batch still runs.

use std::sync::{Mutex, PoisonError};
use tracing::{debug, info, warn};

use crate::core::constants::DEFAULT_CONCURRENCY;
use crate::core::domain::{
    Handle, Operation, OperationFailure, OperationKind, RepoRef, Retraction,
};
use crate::core::gh::Gh;
use crate::core::runner::CommandOutput;
use crate::error::ExecError;

/// Results of executing a batch, in no particular order.
#[derive(Debug, Default)]
pub struct Execution {
    pub handles: Vec<Handle>,
    pub failures: Vec<OperationFailure>,
}

/// Executes operations for a single repository.
#[derive(Debug, Clone)]
pub struct OperationExecutor {
    gh: Gh,
    repo: RepoRef,
    concurrency: usize,
}

impl OperationExecutor {
    pub fn new(gh: Gh, repo: RepoRef) -> Self {
        Self {
            gh,
            repo,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Maximum number of calls in flight during [`execute_all`](Self::execute_all).
    /// Values below 1 are treated as 1.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn repo(&self) -> &RepoRef {
        &self.repo
    }

    /// Apply one operation, or simulate it when `dry_run` is set.
    ///
    /// A simulated operation makes no external call and always succeeds.
    ///
    /// # Errors
    ///
    /// Returns `ExecError` if the mutating call cannot run or exits non-zero.
    pub fn execute(&self, op: &Operation, dry_run: bool) -> Result<Handle, ExecError> {
        if dry_run {
            debug!(key = op.key(), name = op.name(), kind = %op.kind(), "dry-run: skipped");
            return Ok(self.handle(op, true));
        }

        match op {
            Operation::Create { key, value, .. } => {
                let output = self.gh.secret_set(&self.repo, key, value);
                self.check("set", key, output)?;
            }
            Operation::Delete { key, .. } => {
                let output = self.gh.secret_delete(&self.repo, key);
                self.check("delete", key, output)?;
            }
        }

        info!(repo = %self.repo, key = op.key(), name = op.name(), kind = %op.kind(), "applied");
        Ok(self.handle(op, false))
    }

    /// Issue the removal paired with a create handle.
    ///
    /// Returns `Ok(None)` for handles with nothing to retract. A simulated
    /// create retracts as a simulated delete.
    ///
    /// # Errors
    ///
    /// Returns `ExecError` if the removal call fails.
    pub fn retract(&self, handle: &Handle) -> Result<Option<Handle>, ExecError> {
        let Some(retraction) = &handle.retraction else {
            return Ok(None);
        };

        if !handle.simulated {
            let output = self.gh.secret_delete(&retraction.repo, &retraction.key);
            self.check("delete", &retraction.key, output)?;
            info!(repo = %retraction.repo, key = %retraction.key, "retracted");
        }

        Ok(Some(Handle {
            name: handle.name.clone(),
            key: retraction.key.clone(),
            kind: OperationKind::Delete,
            simulated: handle.simulated,
            retraction: None,
        }))
    }

    /// Execute every operation with bounded concurrency.
    ///
    /// Never short-circuits: each failure is collected next to its key.
    pub fn execute_all(&self, operations: Vec<Operation>, dry_run: bool) -> Execution {
        if operations.is_empty() {
            return Execution::default();
        }

        let workers = self.concurrency.min(operations.len());
        let queue = Mutex::new(operations.into_iter());
        let queue = &queue;

        let results: Vec<(Operation, Result<Handle, ExecError>)> = std::thread::scope(|scope| {
            let workers: Vec<_> = (0..workers)
                .map(|_| {
                    scope.spawn(move || {
                        let mut done = Vec::new();
                        loop {
                            let next = queue.lock().unwrap_or_else(PoisonError::into_inner).next();
                            let Some(op) = next else { break };
                            let result = self.execute(&op, dry_run);
                            done.push((op, result));
                        }
                        done
                    })
                })
                .collect();

            workers
                .into_iter()
                .flat_map(|worker| {
                    worker
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect()
        });

        let mut execution = Execution::default();
        for (op, result) in results {
            match result {
                Ok(handle) => execution.handles.push(handle),
                Err(error) => {
                    warn!(key = op.key(), kind = %op.kind(), %error, "operation failed");
                    execution.failures.push(OperationFailure {
                        key: op.key().to_string(),
                        name: op.name().to_string(),
                        kind: op.kind(),
                        error,
                    });
                }
            }
        }

        execution
    }

    fn handle(&self, op: &Operation, simulated: bool) -> Handle {
        let retraction = match op.kind() {
            OperationKind::Create => Some(Retraction {
                repo: self.repo.clone(),
                key: op.key().to_string(),
            }),
            OperationKind::Delete => None,
        };

        Handle {
            name: op.name().to_string(),
            key: op.key().to_string(),
            kind: op.kind(),
            simulated,
            retraction,
        }
    }

    fn check(
        &self,
        action: &'static str,
        key: &str,
        output: std::io::Result<CommandOutput>,
    ) -> Result<(), ExecError> {
        let output = output.map_err(|source| ExecError::Spawn {
            program: self.gh.program().to_string(),
            source,
        })?;

        if !output.success {
            return Err(ExecError::Failed {
                action,
                key: key.to_string(),
                status: output.status.clone(),
                stderr: output.stderr_text(),
            });
        }

        Ok(())
    }
}
