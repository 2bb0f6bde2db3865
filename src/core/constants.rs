//! Constants used throughout sealsecret.
//!
//! Centralizes magic strings and protocol values.

/// Default REST endpoint for github.com.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// REST API version pinned on every request.
pub const API_VERSION: &str = "2022-11-28";

/// Media type requested on every request.
pub const ACCEPT: &str = "application/vnd.github+json";

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("sealsecret/", env!("CARGO_PKG_VERSION"));

/// Name of the boolean output reported to the host.
pub const OUTPUT_SECRET_EXISTED: &str = "secret-existed";

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "SEALSECRET_LOG";

/// Reserved prefix the store rejects for secret names.
pub const RESERVED_PREFIX: &str = "GITHUB_";

/// Visibility sent with organization secrets.
pub const ORG_VISIBILITY: &str = "all";
