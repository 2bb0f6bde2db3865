//! Logging and verbosity tests.
//!
//! These tests verify that log filters and formats control stderr output,
//! and that the secret value and token never reach the logs.

mod support;
use support::*;

use predicates::prelude::*;

async fn remote_with_new_repo_secret() -> Remote {
    let remote = Remote::start().await;
    remote.serve_missing(REPO_SECRET_PATH).await;
    remote.serve_public_key(REPO_KEY_PATH).await;
    remote.accept_write(REPO_SECRET_PATH).await;
    remote
}

#[tokio::test(flavor = "multi_thread")]
async fn test_default_logs_progress_at_info() {
    let remote = remote_with_new_repo_secret().await;

    let output = remote.upsert_cmd("web", "").output().unwrap();
    assert!(output.status.success());

    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("Checking if the secret X exists in the repository acme/web"));
    assert!(err.contains("The secret X does not exist"));
    assert!(err.contains("Getting public key for the repository acme/web"));
    assert!(err.contains("Writing secret X to the repository acme/web"));
    assert!(!err.contains("DEBUG"), "default mode should not show debug output");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_log_env_var_overrides_default() {
    let remote = remote_with_new_repo_secret().await;

    remote
        .upsert_cmd("web", "")
        .env("SEALSECRET_LOG", "warn")
        .assert()
        .success()
        .stderr(predicate::str::contains("Checking if the secret").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_verbose_never_logs_secret_or_token() {
    let remote = remote_with_new_repo_secret().await;

    let output = remote
        .cmd()
        .args(["--verbose", "--token", "ghp_tokenvalue", "--owner", "acme"])
        .args(["--repo", "web", "--secret-name", "X"])
        .args(["--secret-value", "plaintext-canary"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let err = String::from_utf8_lossy(&output.stderr);
    let out = String::from_utf8_lossy(&output.stdout);
    assert!(err.contains("DEBUG"), "verbose mode should show debug output");
    for stream in [&err, &out] {
        assert!(!stream.contains("plaintext-canary"));
        assert!(!stream.contains("ghp_tokenvalue"));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_json_log_format() {
    let remote = remote_with_new_repo_secret().await;

    let output = remote
        .upsert_cmd("web", "")
        .args(["--log-format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let err = String::from_utf8_lossy(&output.stderr);
    let records: Vec<serde_json::Value> = err
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("log line is not JSON"))
        .collect();

    assert!(!records.is_empty());
    assert!(records.iter().all(|r| r["level"].is_string()));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_environment_without_repo_warns() {
    let remote = Remote::start().await;
    remote.serve_missing(ORG_SECRET_PATH).await;
    remote.serve_public_key(ORG_KEY_PATH).await;
    remote.accept_write(ORG_SECRET_PATH).await;

    remote
        .upsert_cmd("", "prod")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "environment ignored without a repository",
        ));
}
