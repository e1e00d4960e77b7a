//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A secret key name (e.g., DATABASE_URL, AWS_OIDC_ROLE_ARN).
///
/// Must be a valid GitHub secret name.
pub type SecretKey = String;

/// A record name as it appears in the store or in provisioning state,
/// e.g. `ci-gh-secret-api_key-1a2b3c4d`.
pub type RecordName = String;

/// First hex characters of a content hash.
pub type Fingerprint = String;
