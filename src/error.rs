//! Error types for sealsecret.
//!
//! Each layer has its own error enum; they all fold into [`Error`] so callers
//! can propagate with `?` and `main` can pick a hint by variant.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Missing or malformed run configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing owner")]
    MissingOwner,

    #[error("missing required input: {0}")]
    MissingInput(&'static str),

    #[error("invalid api url '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },
}

/// Secret name rejected before any request is made.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("secret name cannot be empty")]
    EmptyName,

    #[error("invalid secret name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}

/// Sealing and opening failures.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),
}

/// The remote store answered, but not with what was asked for.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("remote returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid response from {url}: {reason}")]
    InvalidResponse { url: String, reason: String },
}

impl RemoteError {
    /// HTTP status code, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::InvalidResponse { .. } => None,
        }
    }
}

/// Connectivity, TLS, or timeout failure below the HTTP layer.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
