//! Test fixtures and constants.

pub const REPO: &str = "acme/widgets";

/// Sample .env file for apply runs.
pub const SAMPLE_ENV: &str = "API_TOKEN=tok-123\nDATABASE_URL=postgres://localhost/app\n";

/// Fake `gh` that logs argv to `$GHSYNC_FAKE_LOG` and reports one foreign
/// secret plus one managed by the `ci` namespace.
pub const FAKE_GH: &str = r#"#!/bin/sh
echo "$*" >> "$GHSYNC_FAKE_LOG"
case "$1 $2" in
  "auth status") exit 0 ;;
  "secret list") echo '[{"name":"MANUAL"},{"name":"ci-gh-secret-old_key-1a2b3c4d"}]'; exit 0 ;;
  "secret set") cat > /dev/null; exit 0 ;;
  "secret delete") exit 0 ;;
esac
exit 1
"#;

/// Fake `gh` with no session.
pub const FAKE_GH_LOGGED_OUT: &str = r#"#!/bin/sh
echo "You are not logged into any GitHub hosts." >&2
exit 1
"#;
