//! Constants used throughout ghsync.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name (.ghsync.toml).
pub const CONFIG_FILE: &str = ".ghsync.toml";

/// Default name of the GitHub CLI binary.
pub const GH_BINARY: &str = "gh";

/// Marker segment every managed record name carries after the namespace.
pub const RECORD_MARKER: &str = "gh-secret-";

/// Separator between namespace, key and fingerprint in a record name.
pub const SEPARATOR: char = '-';

/// Number of hex characters kept from the content hash.
pub const FRAGMENT_LEN: usize = 8;

/// Suffix used in place of a fingerprint for delete records.
pub const DELETED_SUFFIX: &str = "deleted";

/// Prefix GitHub reserves for its own secret names.
pub const RESERVED_KEY_PREFIX: &str = "GITHUB_";

/// Default number of operations in flight at once.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Env var that forces dry-run when the surrounding tool is previewing.
pub const PREVIEW_ENV: &str = "GHSYNC_PREVIEW";

/// Env var holding a tracing filter directive.
pub const LOG_ENV: &str = "GHSYNC_LOG";
