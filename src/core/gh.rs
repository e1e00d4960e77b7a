//! GitHub CLI invocations.
//!
//! Builds the `gh` command lines used by the auth guard, inventory probe and
//! executor. All calls go through the injected [`CommandRunner`].
//!
//! ## Requirements
//!
//! - `gh` CLI must be installed and authenticated (`gh auth login`)
//! - The session needs permission to manage Actions secrets on the repository

use std::sync::Arc;

use crate::core::constants::GH_BINARY;
use crate::core::domain::{RepoRef, SecretValue};
use crate::core::runner::{CommandOutput, CommandRunner};

/// Handle to the `gh` CLI through a runner.
///
/// Cheap to clone; clones share the runner.
#[derive(Debug, Clone)]
pub struct Gh {
    runner: Arc<dyn CommandRunner>,
    program: String,
}

impl Gh {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            program: GH_BINARY.to_string(),
        }
    }

    /// Use a different binary name or path.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// `gh auth status`
    pub(crate) fn auth_status(&self) -> std::io::Result<CommandOutput> {
        self.runner.run(&self.program, &["auth", "status"], None)
    }

    /// `gh secret list --repo R --json name`
    pub(crate) fn secret_list(&self, repo: &RepoRef) -> std::io::Result<CommandOutput> {
        self.runner.run(
            &self.program,
            &["secret", "list", "--repo", repo.as_str(), "--json", "name"],
            None,
        )
    }

    /// `gh secret set KEY --repo R`, value on stdin.
    pub(crate) fn secret_set(
        &self,
        repo: &RepoRef,
        key: &str,
        value: &SecretValue,
    ) -> std::io::Result<CommandOutput> {
        self.runner.run(
            &self.program,
            &["secret", "set", key, "--repo", repo.as_str()],
            Some(value.expose().as_bytes()),
        )
    }

    /// `gh secret delete KEY --repo R --yes`
    pub(crate) fn secret_delete(&self, repo: &RepoRef, key: &str) -> std::io::Result<CommandOutput> {
        self.runner.run(
            &self.program,
            &["secret", "delete", key, "--repo", repo.as_str(), "--yes"],
            None,
        )
    }
}
