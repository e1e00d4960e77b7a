//! Test assertion helpers.

use ghsync::core::domain::PassReport;
use std::process::Output;

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Assert that a command exited with `code`.
pub fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit status, stderr: {}",
        stderr(output)
    );
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}

/// Assert no argument of any recorded call contains `value`.
pub fn assert_value_not_in_argv(calls: &[super::Call], value: &str) {
    for call in calls {
        assert!(
            !call.args.iter().any(|a| a.contains(value)),
            "secret value leaked into argv: {:?}",
            call.args
        );
    }
}

/// Record names of a report's handles, sorted.
pub fn handle_names(report: &PassReport) -> Vec<String> {
    let mut names: Vec<String> = report.handles.iter().map(|h| h.name.clone()).collect();
    names.sort();
    names
}
