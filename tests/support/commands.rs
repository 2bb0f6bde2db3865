//! Command helper methods for Remote.

use super::Remote;
use assert_cmd::Command;

/// Host variables that would leak into the binary under test.
const HOST_VARS: &[&str] = &[
    "INPUT_GITHUB-TOKEN",
    "INPUT_OWNER",
    "INPUT_REPO",
    "INPUT_ENVIRONMENT",
    "INPUT_SECRET-NAME",
    "INPUT_SECRET-VALUE",
    "INPUT_OVERWRITE",
    "INPUT_TIMEOUT",
    "GITHUB_OUTPUT",
    "SEALSECRET_LOG",
];

impl Remote {
    /// Create a sealsecret command pointed at this store.
    ///
    /// Returns a Command configured with:
    /// - GITHUB_API_URL set to the mock server
    /// - NO_COLOR set so output can be matched literally
    /// - Actions inputs from the host environment removed
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("sealsecret").expect("failed to find sealsecret binary");
        for var in HOST_VARS {
            cmd.env_remove(var);
        }
        cmd.env("GITHUB_API_URL", self.uri());
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Command with the standard inputs for secret `X` with value `v1`.
    pub fn upsert_cmd(&self, repo: &str, environment: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["--token", "t0ken", "--owner", "acme"])
            .args(["--secret-name", "X", "--secret-value", "v1"]);
        if !repo.is_empty() {
            cmd.args(["--repo", repo]);
        }
        if !environment.is_empty() {
            cmd.args(["--environment", environment]);
        }
        cmd
    }
}
