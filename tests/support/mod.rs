//! Test support utilities for sealsecret integration tests.
//!
//! Provides a mock secrets store with a known keypair, so tests can open
//! whatever the client sealed and wrote.

#![allow(dead_code)]

pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sealsecret::core::api::{ClientConfig, Credential, GitHubClient};
use sealsecret::core::cipher::{self, SecretKey};

/// Mock GitHub API holding the private half of every served public key.
///
/// Mock expectations are verified when the server is dropped.
pub struct Remote {
    pub server: MockServer,
    pub identity: SecretKey,
}

impl Remote {
    /// Start a mock store with the fixed test keypair.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
            identity: SecretKey::from(TEST_SECRET_KEY),
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Base64 public key served by this store.
    pub fn public_key(&self) -> String {
        STANDARD.encode(self.identity.public_key().as_bytes())
    }

    /// Client pointed at this store.
    pub fn client(&self, token: Option<&str>) -> GitHubClient {
        GitHubClient::new(
            &ClientConfig::with_base_url(self.uri()),
            token.map(Credential::new),
        )
        .expect("failed to build client")
    }

    /// Serve the store's public key at `key_path`, expecting one fetch.
    pub async fn serve_public_key(&self, key_path: &str) {
        Mock::given(method("GET"))
            .and(path(key_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "key_id": TEST_KEY_ID,
                "key": self.public_key(),
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Answer GETs on `route` with a bare status and GitHub-style message.
    pub async fn serve_status(&self, route: &str, status: u16, message: &str) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(json!({ "message": message })),
            )
            .mount(&self.server)
            .await;
    }

    /// Serve metadata for an existing secret at `secret_path`.
    pub async fn serve_existing(&self, secret_path: &str, name: &str) {
        Mock::given(method("GET"))
            .and(path(secret_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": name,
                "created_at": CREATED_AT,
                "updated_at": UPDATED_AT,
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Report the secret at `secret_path` as absent.
    pub async fn serve_missing(&self, secret_path: &str) {
        self.serve_status(secret_path, 404, "Not Found").await;
    }

    /// Accept exactly one write at `secret_path`.
    pub async fn accept_write(&self, secret_path: &str) {
        Mock::given(method("PUT"))
            .and(path(secret_path))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Fail the test if anything is written.
    pub async fn forbid_writes(&self) {
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of every PUT received so far.
    pub async fn writes(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.method.as_str() == "PUT")
            .map(|r| r.body_json::<Value>().expect("write body is not JSON"))
            .collect()
    }

    /// Paths of every request received so far, as `METHOD /path`.
    pub async fn requests(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|r| format!("{} {}", r.method, r.url.path()))
            .collect()
    }

    /// Open a sealed value written to this store.
    pub fn open(&self, encrypted_value: &Value) -> String {
        let value = encrypted_value
            .as_str()
            .expect("encrypted_value is not a string");
        cipher::open(value, &self.identity).expect("failed to open sealed value")
    }
}
