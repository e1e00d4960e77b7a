//! Tests for `ghsync status`.

#![cfg(unix)]

use crate::support::*;

#[test]
fn test_status_json_splits_ownership() {
    let t = Test::new();
    t.fake_gh(FAKE_GH, "");

    let output = t
        .cmd()
        .args(["status", "--repo", REPO, "--namespace", "ci", "--json"])
        .output()
        .unwrap();
    assert_success(&output);

    let status: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(status["total"], 2);
    assert_eq!(status["managed"][0]["key"], "old_key");
    assert_eq!(status["managed"][0]["fingerprint"], "1a2b3c4d");
    assert_eq!(status["foreign"][0], "MANUAL");
    assert!(t
        .gh_calls()
        .iter()
        .all(|c| !c.starts_with("secret set") && !c.starts_with("secret delete")));
}

#[test]
fn test_status_other_namespace_sees_nothing_managed() {
    let t = Test::new();
    t.fake_gh(FAKE_GH, "namespace = \"prod\"\n");

    let output = t.cmd().args(["status", "--repo", REPO]).output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains("no managed secrets"));
}
