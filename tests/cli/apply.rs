//! Tests for `ghsync apply` and `ghsync plan` against a fake `gh`.

#![cfg(unix)]

use crate::support::*;

fn mutations(t: &Test) -> Vec<String> {
    t.gh_calls()
        .into_iter()
        .filter(|c| c.starts_with("secret set") || c.starts_with("secret delete"))
        .collect()
}

#[test]
fn test_apply_creates_and_deletes() {
    let t = Test::new();
    t.fake_gh(FAKE_GH, "namespace = \"ci\"\n");
    let env = t.write("app.env", SAMPLE_ENV);

    let output = t
        .cmd()
        .args(["apply", "--repo", REPO, "--yes", "--env-file"])
        .arg(&env)
        .output()
        .unwrap();
    assert_exit(&output, 0);

    let mut calls = mutations(&t);
    calls.sort();
    assert_eq!(
        calls,
        vec![
            "secret delete old_key --repo acme/widgets --yes",
            "secret set API_TOKEN --repo acme/widgets",
            "secret set DATABASE_URL --repo acme/widgets",
        ]
    );
    assert!(t.gh_calls().iter().all(|c| !c.contains("tok-123")));
    assert!(stdout(&output).contains("ci-gh-secret-old_key-deleted"));
}

#[test]
fn test_plan_never_mutates() {
    let t = Test::new();
    t.fake_gh(FAKE_GH, "namespace = \"ci\"\n");
    let env = t.write("app.env", SAMPLE_ENV);

    let output = t
        .cmd()
        .args(["plan", "--repo", REPO, "--env-file"])
        .arg(&env)
        .output()
        .unwrap();

    assert_exit(&output, 0);
    assert!(stdout(&output).contains("dry-run"));
    assert!(mutations(&t).is_empty());
    assert!(t.gh_calls().iter().any(|c| c.starts_with("secret list")));
}

#[test]
fn test_preview_env_forces_dry_run() {
    let t = Test::new();
    t.fake_gh(FAKE_GH, "");
    let env = t.write("app.env", SAMPLE_ENV);

    let output = t
        .cmd()
        .env("GHSYNC_PREVIEW", "1")
        .args(["apply", "--repo", REPO, "--yes", "--json", "--env-file"])
        .arg(&env)
        .output()
        .unwrap();

    assert_exit(&output, 0);
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["dry_run"], true);
    assert!(mutations(&t).is_empty());
}

#[test]
fn test_config_dry_run() {
    let t = Test::new();
    t.fake_gh(FAKE_GH, "dry_run = true\n");
    let env = t.write("app.env", SAMPLE_ENV);

    let output = t
        .cmd()
        .args(["apply", "--repo", REPO, "--yes", "--env-file"])
        .arg(&env)
        .output()
        .unwrap();

    assert_exit(&output, 0);
    assert!(mutations(&t).is_empty());
}

#[test]
fn test_json_report() {
    let t = Test::new();
    t.fake_gh(FAKE_GH, &format!("repo = \"{}\"\nnamespace = \"ci\"\n", REPO));

    let output = t
        .cmd()
        .env("DEPLOY_KEY", "from-the-environment")
        .args(["apply", "--yes", "--json", "--from-env", "DEPLOY_KEY"])
        .output()
        .unwrap();

    assert_exit(&output, 0);
    let out = stdout(&output);
    assert!(!out.contains("from-the-environment"));

    let report: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(report["repo"], REPO);
    assert_eq!(report["plan"]["creates"], 1);
    assert_eq!(report["plan"]["deletes"], 1);
    assert_eq!(report["handles"].as_array().unwrap().len(), 2);
}

#[test]
fn test_conflict_rejects_batch() {
    let t = Test::new();
    t.fake_gh(FAKE_GH, "");
    let env = t.write("app.env", "MANUAL=mine\nOTHER=x\n");

    let output = t
        .cmd()
        .args(["apply", "--repo", REPO, "--yes", "--env-file"])
        .arg(&env)
        .output()
        .unwrap();

    assert_exit(&output, 1);
    assert_stderr_contains(&output, "'MANUAL' already exists");
    assert_stderr_contains(&output, "earlier apply");
    assert!(mutations(&t).is_empty());
}

#[test]
fn test_partial_failure_exits_two() {
    let t = Test::new();
    let script = FAKE_GH.replace(
        "\"secret set\") cat > /dev/null; exit 0 ;;",
        "\"secret set\") cat > /dev/null; [ \"$3\" = \"BROKEN\" ] && { echo 'HTTP 403' >&2; exit 1; }; exit 0 ;;",
    );
    t.fake_gh(&script, "");
    let env = t.write("app.env", "BROKEN=1\nFINE=2\n");

    let output = t
        .cmd()
        .args(["apply", "--repo", REPO, "--yes", "--env-file"])
        .arg(&env)
        .output()
        .unwrap();

    assert_exit(&output, 2);
    assert_stderr_contains(&output, "BROKEN");
    assert!(mutations(&t).contains(&"secret set FINE --repo acme/widgets".to_string()));
}
