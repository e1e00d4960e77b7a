//! Authentication guard.
//!
//! Confirms the store session is authenticated before anything else runs.

use tracing::{debug, warn};

use crate::core::gh::Gh;
use crate::error::AuthError;

/// Checks for an authenticated `gh` session.
#[derive(Debug, Clone)]
pub struct AuthGuard {
    gh: Gh,
}

impl AuthGuard {
    pub fn new(gh: Gh) -> Self {
        Self { gh }
    }

    /// Run the identity probe once.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::ProbeUnavailable` if the probe cannot be spawned,
    /// or `AuthError::NotAuthenticated` if it exits non-zero.
    pub fn check_authenticated(&self) -> Result<(), AuthError> {
        debug!(program = self.gh.program(), "checking authentication");

        let output = self
            .gh
            .auth_status()
            .map_err(|e| AuthError::ProbeUnavailable {
                program: self.gh.program().to_string(),
                reason: e.to_string(),
            })?;

        if !output.success {
            let stderr = output.stderr_text();
            warn!(status = %output.status, "authentication probe failed");
            return Err(AuthError::NotAuthenticated(if stderr.is_empty() {
                output.status
            } else {
                stderr
            }));
        }

        debug!("authenticated");
        Ok(())
    }
}
