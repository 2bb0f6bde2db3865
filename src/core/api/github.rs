//! GitHub REST API client.
//!
//! Thin `reqwest` wrapper: fixed headers, optional bearer token, and status
//! mapping into [`RemoteError`].

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{ClientConfig, Credential, SecretsApi};
use crate::core::constants;
use crate::core::domain::{PublicKeyMaterial, SealedPayload, SecretRecord};
use crate::core::scope::Scope;
use crate::error::{ConfigError, Error, RemoteError, Result, TransportError};

/// Error body GitHub returns on failures.
#[derive(Deserialize)]
struct ApiMessage {
    message: String,
}

/// GitHub Actions secrets client.
///
/// Built once per run; unauthenticated when no credential is given, in
/// which case every private-scope call fails remotely.
#[derive(Debug)]
pub struct GitHubClient {
    http: Client,
    base_url: String,
    credential: Option<Credential>,
}

impl GitHubClient {
    /// Create a client.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidApiUrl` if the base URL is not http(s),
    /// or `TransportError::Client` if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig, credential: Option<Credential>) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ConfigError::InvalidApiUrl {
                url: config.base_url.clone(),
                reason: "expected an http or https url".to_string(),
            }
            .into());
        }

        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(TransportError::Client)?;

        debug!(
            base_url = %base_url,
            authenticated = credential.is_some(),
            "created api client"
        );

        Ok(Self {
            http,
            base_url,
            credential,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let request = self
            .http
            .request(method, url)
            .header(ACCEPT, constants::ACCEPT)
            .header("X-GitHub-Api-Version", constants::API_VERSION);

        match &self.credential {
            Some(credential) => request.bearer_auth(credential.expose()),
            None => request,
        }
    }

    async fn send(&self, url: &str, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(|source| TransportError::Request {
            url: url.to_string(),
            source,
        })?;

        trace!(url, status = response.status().as_u16(), "response");
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, "GET");

        let response = self.send(&url, self.request(Method::GET, &url)).await?;
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }
        decode(&url, response).await
    }

    async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<StatusCode> {
        let url = self.url(path);
        debug!(url = %url, "PUT");

        let response = self
            .send(&url, self.request(Method::PUT, &url).json(body))
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(status_error(response).await);
        }
        Ok(status)
    }
}

#[async_trait]
impl SecretsApi for GitHubClient {
    async fn public_key(&self, scope: &Scope) -> Result<PublicKeyMaterial> {
        self.get_json(&scope.public_key_path()).await
    }

    async fn secret(&self, scope: &Scope, name: &str) -> Result<Option<SecretRecord>> {
        let url = self.url(&scope.secret_path(name));
        debug!(url = %url, "GET");

        let response = self.send(&url, self.request(Method::GET, &url)).await?;
        match response.status() {
            StatusCode::OK => {
                let body = response.text().await.map_err(|source| TransportError::Request {
                    url: url.clone(),
                    source,
                })?;
                // Metadata is informational; a 200 alone means the secret exists
                let record = serde_json::from_str(&body).unwrap_or_else(|e| {
                    debug!(url = %url, error = %e, "unreadable secret metadata");
                    SecretRecord::named(name)
                });
                Ok(Some(record))
            }
            StatusCode::NOT_FOUND => Ok(None),
            // Any other success carries no record; only 200 means "found".
            status if status.is_success() => Ok(None),
            _ => Err(status_error(response).await),
        }
    }

    async fn put_secret(&self, scope: &Scope, name: &str, payload: &SealedPayload) -> Result<()> {
        let status = self
            .put_json(&scope.secret_path(name), &scope.write_body(payload))
            .await?;

        // 201 on create, 204 on update
        debug!(status = status.as_u16(), "secret written");
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T> {
    let body = response.text().await.map_err(|source| TransportError::Request {
        url: url.to_string(),
        source,
    })?;

    serde_json::from_str(&body).map_err(|e| {
        RemoteError::InvalidResponse {
            url: url.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Turn a failed response into a `RemoteError`, preferring GitHub's message.
async fn status_error(response: Response) -> Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<ApiMessage>(&body)
        .ok()
        .map(|m| m.message)
        .filter(|m| !m.is_empty())
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "unexpected status".to_string());

    RemoteError::Status {
        status: status.as_u16(),
        message,
    }
    .into()
}
