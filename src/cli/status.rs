//! Status command.
//!
//! Read-only listing of a repository's secrets split by ownership.

use crate::cli::{output, resolve_namespace, resolve_repo, system_gh, Outcome};
use crate::core::config::Config;
use crate::core::reconcile::{ReconcileOptions, Reconciler};
use crate::error::Result;

/// Show managed and foreign secrets.
pub fn execute(
    repo: Option<&str>,
    namespace: Option<&str>,
    json: bool,
    config: &Config,
) -> Result<Outcome> {
    let repo = resolve_repo(repo, config)?;
    let namespace = resolve_namespace(namespace, config)?;
    let gh = system_gh(config)?;

    let options = ReconcileOptions {
        namespace: namespace.clone(),
        ..ReconcileOptions::default()
    };
    let (inventory, classification) = Reconciler::with_gh(gh, options).inspect(repo.as_str())?;

    if json {
        let result = serde_json::json!({
            "repo": repo,
            "namespace": namespace.as_deref(),
            "total": inventory.len(),
            "managed": classification.managed.records(),
            "foreign": classification.foreign,
        });
        output::data(&serde_json::to_string_pretty(&result)?);
        return Ok(Outcome::Success);
    }

    output::blank();
    output::header(&format!("{} secrets in {}", output::count(inventory.len()), repo));
    output::kv("namespace", &namespace);
    output::rule();

    if classification.managed.is_empty() {
        output::dimmed("no managed secrets");
    }
    for record in classification.managed.records() {
        output::kv(&record.key, &record.name);
    }

    if !classification.foreign.is_empty() {
        output::blank();
        output::header(&format!(
            "{} not managed by this namespace",
            output::count(classification.foreign.len())
        ));
        for name in &classification.foreign {
            output::dimmed(&format!("  {}", name));
        }
    }

    Ok(Outcome::Success)
}
