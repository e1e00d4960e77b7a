//! Command-line interface.

pub mod apply;
pub mod completions;
pub mod output;
pub mod status;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use crate::core::config::Config;
use crate::core::domain::{Namespace, RepoRef};
use crate::core::gh::Gh;
use crate::core::runner::SystemRunner;
use crate::error::{AuthError, ConfigError, Result};

/// ghsync - Declarative GitHub Actions secret synchronization.
#[derive(Parser, Debug)]
#[command(
    name = "ghsync",
    about = "Reconcile GitHub Actions secrets against a declared set",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: ./.ghsync.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Inputs shared by `apply` and `plan`.
#[derive(Args, Debug, Clone, Default)]
pub struct SyncArgs {
    /// Target repository, owner/repo
    #[arg(short, long, env = "GHSYNC_REPO")]
    pub repo: Option<String>,

    /// Ownership namespace for record names
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Read desired secrets from a .env file (repeatable)
    #[arg(long = "env-file", value_name = "PATH")]
    pub env_files: Vec<PathBuf>,

    /// Read a desired secret from this process's environment (repeatable)
    #[arg(long = "from-env", value_name = "KEY")]
    pub from_env: Vec<String>,

    /// Output the pass report as JSON
    #[arg(long)]
    pub json: bool,

    /// Fail instead of assuming an empty inventory when listing fails
    #[arg(long)]
    pub abort_on_probe_failure: bool,

    /// Maximum operations in flight
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Converge the repository's secrets onto the declared set
    Apply {
        #[command(flatten)]
        args: SyncArgs,

        /// Compute and report the plan without changing anything
        #[arg(long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show what apply would do
    Plan {
        #[command(flatten)]
        args: SyncArgs,
    },

    /// Show managed and foreign secrets in a repository
    Status {
        /// Target repository, owner/repo
        #[arg(short, long, env = "GHSYNC_REPO")]
        repo: Option<String>,

        /// Ownership namespace for record names
        #[arg(short, long)]
        namespace: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// How a successful command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The pass finished but some operations failed.
    PartialFailure,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::PartialFailure => 2,
        }
    }
}

/// Execute a command.
pub fn execute(command: Command, config_path: Option<PathBuf>) -> Result<Outcome> {
    match command {
        Command::Apply { args, dry_run, yes } => {
            apply::execute(&args, dry_run, yes, &load_config(config_path)?)
        }
        Command::Plan { args } => apply::execute(&args, true, true, &load_config(config_path)?),
        Command::Status {
            repo,
            namespace,
            json,
        } => status::execute(
            repo.as_deref(),
            namespace.as_deref(),
            json,
            &load_config(config_path)?,
        ),
        // never reads the config, so a broken file cannot block it
        Command::Completions { shell } => {
            completions::execute(shell)?;
            Ok(Outcome::Success)
        }
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Ok(Config::load_from(path)?),
        None => Ok(Config::load()?),
    }
}

/// Flag first, then config.
pub(crate) fn resolve_repo(flag: Option<&str>, config: &Config) -> Result<RepoRef> {
    let repo = flag
        .or(config.sync.repo.as_deref())
        .ok_or(ConfigError::MissingRepo)?;
    Ok(RepoRef::parse(repo)?)
}

/// Flag first, then config. An empty flag clears the configured namespace.
pub(crate) fn resolve_namespace(flag: Option<&str>, config: &Config) -> Result<Namespace> {
    match flag {
        Some(ns) => Ok(Namespace::new(ns)?),
        None => config.namespace(),
    }
}

/// Locate the configured `gh` binary and wrap it in a process runner.
///
/// # Errors
///
/// Returns `AuthError::ProbeUnavailable` if the binary is not on `PATH`.
pub(crate) fn system_gh(config: &Config) -> Result<Gh> {
    let program = config.gh_program();
    let path = SystemRunner::locate(program).map_err(|e| AuthError::ProbeUnavailable {
        program: program.to_string(),
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), "using gh");

    Ok(Gh::new(Arc::new(SystemRunner)).with_program(path.to_string_lossy()))
}
