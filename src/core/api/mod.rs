//! Remote secrets store access.
//!
//! [`SecretsApi`] is the boundary between the upsert logic and the store.
//! [`GitHubClient`] implements it against the GitHub REST API.
//!
//! ## Adding a New Store
//!
//! 1. Implement the `SecretsApi` trait
//! 2. Map "not found" on the existence check to `Ok(None)`
//! 3. Surface every other failure as `RemoteError` or `TransportError`

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::core::domain::{PublicKeyMaterial, SealedPayload, SecretRecord};
use crate::core::scope::Scope;
use crate::error::Result;

mod github;

pub use github::GitHubClient;

/// Operations the upsert needs from a secrets store.
///
/// Each call is exactly one request against the address family of `scope`.
#[async_trait]
pub trait SecretsApi: Send + Sync {
    /// Fetch the current public key of a scope.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` on any non-success status, `TransportError` if
    /// the request never completed.
    async fn public_key(&self, scope: &Scope) -> Result<PublicKeyMaterial>;

    /// Look up a secret's metadata.
    ///
    /// # Returns
    ///
    /// `Some` if the secret exists, `None` if the store reports it absent.
    ///
    /// # Errors
    ///
    /// Any response other than found/not-found is an error, so "absent" is
    /// never confused with "unknown".
    async fn secret(&self, scope: &Scope, name: &str) -> Result<Option<SecretRecord>>;

    /// Create or replace a secret with a sealed value.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` on any non-success status.
    async fn put_secret(&self, scope: &Scope, name: &str, payload: &SealedPayload) -> Result<()>;
}

/// API token used for authenticated requests.
///
/// Zeroized on drop and never printed.
#[derive(Clone)]
pub struct Credential(Zeroizing<String>);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Zeroizing::new(token.into()))
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Transport settings for a store client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// REST endpoint root, without trailing slash
    pub base_url: String,
    /// User agent header value
    pub user_agent: String,
    /// Per-request timeout; `None` leaves the HTTP client's default
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_API_URL.to_string(),
            user_agent: constants::USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Settings pointing at `base_url` with default user agent and timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
