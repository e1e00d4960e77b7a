//! EnvFile type.
//!
//! Parses a .env file into secret key/value pairs for a desired state.

use std::path::{Path, PathBuf};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::domain::SecretValue;
use crate::error::Result;

/// A parsed .env file
#[derive(Debug, Clone)]
pub struct EnvFile {
    entries: Vec<(String, SecretValue)>,
    path: PathBuf,
}

impl EnvFile {
    /// Parse an .env file from disk
    ///
    /// Skips empty lines and comments (lines starting with #).
    /// Accepts an optional leading `export `.
    /// Supports values with or without quotes.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = Zeroizing::new(std::fs::read_to_string(path)?);
        let entries = parse(&contents);

        debug!(path = %path.display(), entries = entries.len(), "loaded env file");

        Ok(Self {
            entries,
            path: path.to_path_buf(),
        })
    }

    /// All entries in file order. Later duplicates are kept.
    pub fn entries(&self) -> &[(String, SecretValue)] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<(String, SecretValue)> {
        self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn parse(contents: &str) -> Vec<(String, SecretValue)> {
    let mut entries = Vec::new();

    for line in contents.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").map_or(line, str::trim_start);

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim().to_string();
            let value = parse_env_value(value.trim());
            entries.push((key, SecretValue::new(value)));
        }
    }

    entries
}

fn parse_env_value(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return unescape_double_quoted(&raw[1..raw.len() - 1]);
    }

    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return raw[1..raw.len() - 1].to_string();
    }

    raw.to_string()
}

fn unescape_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
