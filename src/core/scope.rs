//! Secret scopes and their request descriptors.
//!
//! A [`Scope`] is resolved once per run. Every remote address the run touches
//! (public key, existence check, write) is derived from that single value, so
//! the organization/repository/environment branch lives only here.

use serde::Serialize;
use std::fmt;
use urlencoding::encode;

use crate::core::constants::ORG_VISIBILITY;
use crate::core::domain::SealedPayload;
use crate::error::{ConfigError, Result};

/// Target a secret is written into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Organization-wide secret
    Organization { owner: String },
    /// Repository secret
    Repository { owner: String, repo: String },
    /// Secret of one deployment environment in a repository
    Environment {
        owner: String,
        repo: String,
        environment: String,
    },
}

/// Body of a secret write request.
#[derive(Debug, Serialize)]
pub struct WriteBody<'a> {
    pub encrypted_value: &'a str,
    pub key_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<&'static str>,
}

impl Scope {
    /// Resolve a scope from raw inputs.
    ///
    /// Empty strings count as absent. An empty `repo` selects the
    /// organization, whether or not an environment was given; an empty
    /// `environment` selects the repository.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingOwner` if `owner` is empty.
    pub fn resolve(owner: &str, repo: &str, environment: &str) -> Result<Self> {
        if owner.is_empty() {
            return Err(ConfigError::MissingOwner.into());
        }

        let owner = owner.to_string();
        let scope = if repo.is_empty() {
            Self::Organization { owner }
        } else if environment.is_empty() {
            Self::Repository {
                owner,
                repo: repo.to_string(),
            }
        } else {
            Self::Environment {
                owner,
                repo: repo.to_string(),
                environment: environment.to_string(),
            }
        };

        Ok(scope)
    }

    /// Owning organization or user.
    pub fn owner(&self) -> &str {
        match self {
            Self::Organization { owner }
            | Self::Repository { owner, .. }
            | Self::Environment { owner, .. } => owner,
        }
    }

    /// Short scope kind for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Organization { .. } => "organization",
            Self::Repository { .. } => "repository",
            Self::Environment { .. } => "environment",
        }
    }

    /// Path prefix under which this scope's secrets live.
    fn secrets_base(&self) -> String {
        match self {
            Self::Organization { owner } => format!("/orgs/{}/actions/secrets", encode(owner)),
            Self::Repository { owner, repo } => {
                format!("/repos/{}/{}/actions/secrets", encode(owner), encode(repo))
            }
            Self::Environment {
                owner,
                repo,
                environment,
            } => format!(
                "/repos/{}/{}/environments/{}/secrets",
                encode(owner),
                encode(repo),
                encode(environment)
            ),
        }
    }

    /// Path of this scope's public key.
    pub fn public_key_path(&self) -> String {
        format!("{}/public-key", self.secrets_base())
    }

    /// Path of one named secret in this scope.
    pub fn secret_path(&self, name: &str) -> String {
        format!("{}/{}", self.secrets_base(), encode(name))
    }

    /// Write body for a sealed payload.
    ///
    /// Organization secrets carry `visibility: "all"`; the other scopes
    /// have no visibility field.
    pub fn write_body<'a>(&self, payload: &'a SealedPayload) -> WriteBody<'a> {
        let visibility = match self {
            Self::Organization { .. } => Some(ORG_VISIBILITY),
            Self::Repository { .. } | Self::Environment { .. } => None,
        };

        WriteBody {
            encrypted_value: &payload.encrypted_value,
            key_id: &payload.key_id,
            visibility,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Organization { owner } => write!(f, "organization {}", owner),
            Self::Repository { owner, repo } => write!(f, "repository {}/{}", owner, repo),
            Self::Environment {
                owner,
                repo,
                environment,
            } => write!(
                f,
                "environment {} in repository {}/{}",
                environment, owner, repo
            ),
        }
    }
}
