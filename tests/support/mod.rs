//! Test support utilities for ghsync integration tests.
//!
//! Provides an isolated working directory, a scripted in-process runner and
//! a fake `gh` executable for end-to-end CLI runs.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fake;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fake::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Child processes use `.current_dir()`, so tests can run in parallel.
pub struct Test {
    pub dir: TempDir,
}

impl Test {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Path inside the test directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a file into the test directory and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("failed to write test file");
        path
    }

    /// Write `.ghsync.toml` with the given `[sync]` body.
    pub fn config(&self, sync: &str) -> PathBuf {
        self.write(".ghsync.toml", &format!("[sync]\n{}", sync))
    }
}
