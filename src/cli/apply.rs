//! Apply and plan commands.
//!
//! Gathers the desired set, resolves settings, runs a pass and renders the
//! report.

use dialoguer::Confirm;
use std::io::IsTerminal;
use tracing::debug;

use crate::cli::{output, resolve_namespace, resolve_repo, system_gh, Outcome, SyncArgs};
use crate::core::config::{preview_requested, Config};
use crate::core::domain::{DesiredSecrets, OperationKind, PassReport};
use crate::core::reconcile::{ProbePolicy, ReconcileOptions, Reconciler};
use crate::error::{Result, ValidationError};

/// Run a pass. `plan` calls this with `dry_run` and `yes` set.
pub fn execute(args: &SyncArgs, dry_run: bool, yes: bool, config: &Config) -> Result<Outcome> {
    let repo = resolve_repo(args.repo.as_deref(), config)?;
    let namespace = resolve_namespace(args.namespace.as_deref(), config)?;
    let desired = gather(args)?;

    let dry_run = dry_run || config.sync.dry_run || preview_requested();
    let probe_policy = if args.abort_on_probe_failure {
        ProbePolicy::Abort
    } else {
        config.sync.probe_policy
    };
    let options = ReconcileOptions {
        namespace,
        dry_run,
        probe_policy,
        concurrency: args.concurrency.unwrap_or_else(|| config.concurrency()),
    };
    debug!(?options, "resolved options");

    let gh = system_gh(config)?;

    if !dry_run && !yes && std::io::stdin().is_terminal() {
        let preview = Reconciler::with_gh(
            gh.clone(),
            ReconcileOptions {
                dry_run: true,
                ..options.clone()
            },
        )
        .run(&desired, repo.as_str())?;
        render(&preview);

        if preview.handles.is_empty() {
            return Ok(Outcome::Success);
        }
        let proceed = Confirm::new()
            .with_prompt(format!("Apply these changes to {}?", repo))
            .default(false)
            .interact()?;
        if !proceed {
            output::dimmed("aborted, nothing changed");
            return Ok(Outcome::Success);
        }
    }

    let report = Reconciler::with_gh(gh, options).run(&desired, repo.as_str())?;

    if args.json {
        output::data(&serde_json::to_string_pretty(&report)?);
    } else {
        render(&report);
    }

    if report.is_success() {
        Ok(Outcome::Success)
    } else {
        Ok(Outcome::PartialFailure)
    }
}

/// Desired secrets from every `--env-file` then every `--from-env`.
///
/// # Errors
///
/// Returns `ValidationError::EmptyDesired` when nothing was declared, before
/// any external call.
pub fn gather(args: &SyncArgs) -> Result<DesiredSecrets> {
    let mut desired = DesiredSecrets::new();
    for path in &args.env_files {
        desired.extend_from_env_file(path)?;
    }
    for key in &args.from_env {
        desired.insert_from_env(key)?;
    }

    if desired.is_empty() {
        return Err(ValidationError::EmptyDesired.into());
    }
    Ok(desired)
}

fn render(report: &PassReport) {
    if report.inventory_degraded {
        output::warn("could not list existing secrets; treated the repository as empty");
    }

    output::blank();
    let mode = if report.dry_run { " (dry-run)" } else { "" };
    output::header(&format!("{}{}", report.repo, mode));
    if let Some(namespace) = &report.namespace {
        output::kv("namespace", namespace);
    }
    output::rule();

    for handle in &report.handles {
        let symbol = match handle.kind {
            OperationKind::Create => '+',
            OperationKind::Delete => '-',
        };
        output::change(symbol, &handle.key, &handle.name);
    }
    for failure in &report.failures {
        output::change('!', &failure.key, &failure.name);
    }
    if report.handles.is_empty() && report.failures.is_empty() {
        output::dimmed("nothing to do");
    }

    output::blank();
    let applied = report.handles.len();
    if report.dry_run {
        output::success(&format!("{} change(s) planned, nothing applied", output::count(applied)));
    } else if applied > 0 {
        output::success(&format!("{} change(s) applied", output::count(applied)));
    }

    for failure in &report.failures {
        output::error(&format!("{}: {}", output::key(&failure.key), failure.error));
    }
}
