//! Tests for error handling, exit codes and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();
    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("apply").and(predicate::str::contains("status")));
}

#[test]
fn test_version_flag() {
    let t = Test::new();
    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();
    t.cmd().arg("unknown-command").assert().failure();
}

#[test]
fn test_completions() {
    let t = Test::new();
    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ghsync"));
}

#[test]
fn test_completions_ignore_broken_config() {
    let t = Test::new();
    t.config("concurrency = 0\n");
    t.cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ghsync"));
}

#[test]
fn test_invalid_repo_exits_one() {
    let t = Test::new();
    let output = t
        .cmd()
        .args(["apply", "--repo", "invalid", "--yes"])
        .output()
        .unwrap();

    assert_exit(&output, 1);
    assert_stderr_contains(&output, "invalid repository 'invalid'");
    assert!(t.gh_calls().is_empty());
}

#[test]
fn test_missing_repo_hint() {
    let t = Test::new();
    let output = t.cmd().args(["apply", "--yes"]).output().unwrap();

    assert_exit(&output, 1);
    assert_stderr_contains(&output, "no repository given");
    assert_stderr_contains(&output, "--repo");
}

#[test]
fn test_nothing_declared() {
    let t = Test::new();
    let output = t.cmd().args(["apply", "--repo", REPO, "--yes"]).output().unwrap();

    assert_exit(&output, 1);
    assert_stderr_contains(&output, "no secrets declared");
}

#[test]
fn test_missing_gh_binary() {
    let t = Test::new();
    t.config("gh = \"ghsync-test-no-such-gh\"\n");
    let env = t.write("app.env", SAMPLE_ENV);

    let output = t
        .cmd()
        .args(["apply", "--repo", REPO, "--yes", "--env-file"])
        .arg(&env)
        .output()
        .unwrap();

    assert_exit(&output, 1);
    assert_stderr_contains(&output, "ghsync-test-no-such-gh not available");
    assert_stderr_contains(&output, "cli.github.com");
}

#[test]
fn test_bad_config_file() {
    let t = Test::new();
    t.config("concurrency = 0\n");

    let output = t.cmd().args(["status", "--repo", REPO]).output().unwrap();
    assert_exit(&output, 1);
    assert_stderr_contains(&output, "concurrency");
}

#[test]
fn test_explicit_config_path() {
    let t = Test::new();
    let path = t.write("other.toml", "[sync]\nrepo = \"bad\"\n");

    let output = t
        .cmd()
        .args(["apply", "--yes", "--config"])
        .arg(&path)
        .output()
        .unwrap();
    assert_exit(&output, 1);
    assert_stderr_contains(&output, "repo");
}

#[cfg(unix)]
#[test]
fn test_logged_out_hint() {
    let t = Test::new();
    t.fake_gh(FAKE_GH_LOGGED_OUT, "");
    let env = t.write("app.env", SAMPLE_ENV);

    let output = t
        .cmd()
        .args(["apply", "--repo", REPO, "--yes", "--env-file"])
        .arg(&env)
        .output()
        .unwrap();

    assert_exit(&output, 1);
    assert_stderr_contains(&output, "not authenticated");
    assert_stderr_contains(&output, "gh auth login");
}
