//! Run configuration.
//!
//! Normalizes raw inputs (command-line flags or `INPUT_*` variables set by
//! the Actions runner) into the values one upsert needs.

use std::fmt;
use std::path::PathBuf;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::api::{ClientConfig, Credential};
use crate::core::scope::Scope;
use crate::core::types::SecretName;
use crate::core::validation;
use crate::error::{ConfigError, Result};

/// Inputs exactly as received; every field may be missing or blank.
#[derive(Default)]
pub struct RawInputs {
    pub token: Option<String>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub environment: Option<String>,
    pub secret_name: Option<String>,
    pub secret_value: Option<String>,
    pub overwrite: bool,
    pub client: ClientConfig,
    pub output_file: Option<PathBuf>,
}

impl fmt::Debug for RawInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawInputs")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("environment", &self.environment)
            .field("secret_name", &self.secret_name)
            .field("secret_value", &self.secret_value.as_ref().map(|_| "***"))
            .field("overwrite", &self.overwrite)
            .field("client", &self.client)
            .field("output_file", &self.output_file)
            .finish()
    }
}

/// Validated configuration of one run.
pub struct Inputs {
    /// `None` selects the unauthenticated client
    pub token: Option<Credential>,
    pub scope: Scope,
    pub secret_name: SecretName,
    /// Kept verbatim; may be empty
    pub secret_value: Zeroizing<String>,
    pub overwrite: bool,
    pub client: ClientConfig,
    /// File receiving `secret-existed=<bool>` (the runner's `GITHUB_OUTPUT`)
    pub output_file: Option<PathBuf>,
}

impl Inputs {
    /// Normalize and validate raw inputs.
    ///
    /// Names are trimmed and blank values count as missing. The secret value
    /// is the one input taken as-is.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for a missing owner, secret name, or secret value,
    /// and `ValidationError` for a secret name the store would reject.
    pub fn from_raw(raw: RawInputs) -> Result<Self> {
        let repo = normalize(raw.repo);
        let environment = normalize(raw.environment);
        let scope = Scope::resolve(&normalize(raw.owner), &repo, &environment)?;
        if repo.is_empty() && !environment.is_empty() {
            warn!(
                environment = %environment,
                "environment ignored without a repository, using organization scope"
            );
        }

        let secret_name = normalize(raw.secret_name);
        if secret_name.is_empty() {
            return Err(ConfigError::MissingInput("secret-name").into());
        }
        validation::validate_secret_name(&secret_name)?;

        let secret_value = raw
            .secret_value
            .map(Zeroizing::new)
            .ok_or(ConfigError::MissingInput("secret-value"))?;

        let token = Some(normalize(raw.token))
            .filter(|t| !t.is_empty())
            .map(Credential::new);

        debug!(
            scope = %scope,
            kind = scope.kind(),
            secret = %secret_name,
            overwrite = raw.overwrite,
            authenticated = token.is_some(),
            "inputs resolved"
        );

        Ok(Self {
            token,
            scope,
            secret_name,
            secret_value,
            overwrite: raw.overwrite,
            client: raw.client,
            output_file: raw.output_file,
        })
    }
}

/// Interpret a boolean-like input: only a case-insensitive `true` is true.
pub fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

fn normalize(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}
