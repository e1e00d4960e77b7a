//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::path::PathBuf;

impl Test {
    /// A ghsync command running in the test directory.
    ///
    /// Clears the env vars ghsync reads so the host environment cannot
    /// change results.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("ghsync").expect("failed to find ghsync binary");
        cmd.env_remove("GHSYNC_REPO");
        cmd.env_remove("GHSYNC_PREVIEW");
        cmd.env_remove("GHSYNC_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.env("GHSYNC_FAKE_LOG", self.log_path());
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Install an executable fake `gh` script and point the config at it.
    #[cfg(unix)]
    pub fn fake_gh(&self, script: &str, extra_config: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.write("fake-gh", script);
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();

        self.config(&format!("gh = {:?}\n{}", path.display().to_string(), extra_config));
        path
    }

    pub fn log_path(&self) -> PathBuf {
        self.path("gh-calls.log")
    }

    /// Lines the fake `gh` logged, one per invocation.
    pub fn gh_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.log_path())
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
