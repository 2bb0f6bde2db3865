//! Command-line interface.
//!
//! Every input is a flag with a matching environment variable, so the binary
//! runs the same from a shell or as an Actions step (which passes inputs as
//! `INPUT_<NAME>` variables).

pub mod action;
pub mod output;
pub mod upsert;

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::core::api::ClientConfig;
use crate::core::config::{self, Inputs, RawInputs};
use crate::core::constants;
use crate::error::Result;

/// sealsecret - Seal and upsert a GitHub Actions secret.
#[derive(Parser, Debug)]
#[command(
    name = "sealsecret",
    about = "Seal a value and store it as an organization, repository, or environment secret",
    version
)]
pub struct Cli {
    /// API token; omit for unauthenticated requests
    #[arg(long, env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Organization or user that owns the secret
    #[arg(long, env = "INPUT_OWNER")]
    pub owner: Option<String>,

    /// Repository name; omit for an organization secret
    #[arg(long, env = "INPUT_REPO")]
    pub repo: Option<String>,

    /// Deployment environment of the repository
    #[arg(long, env = "INPUT_ENVIRONMENT")]
    pub environment: Option<String>,

    /// Secret name (e.g., DEPLOY_KEY)
    #[arg(long, env = "INPUT_SECRET-NAME")]
    pub secret_name: Option<String>,

    /// Secret value; may be empty
    #[arg(long, env = "INPUT_SECRET-VALUE", hide_env_values = true)]
    pub secret_value: Option<String>,

    /// Replace the secret if it already exists ("true" in any case)
    #[arg(
        long,
        env = "INPUT_OVERWRITE",
        default_value = "false",
        default_missing_value = "true",
        num_args = 0..=1,
        value_parser = parse_flag,
        action = ArgAction::Set
    )]
    pub overwrite: bool,

    /// REST API root (GitHub Enterprise Server or a mock)
    #[arg(long, env = "GITHUB_API_URL", default_value = constants::DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "INPUT_TIMEOUT")]
    pub timeout: Option<u64>,

    /// File to append `secret-existed=<bool>` to
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log record format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Log output formats.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

fn parse_flag(value: &str) -> std::result::Result<bool, String> {
    Ok(config::parse_flag(value))
}

impl Cli {
    /// Raw inputs carried by the parsed flags.
    pub fn raw_inputs(self) -> RawInputs {
        RawInputs {
            token: self.token,
            owner: self.owner,
            repo: self.repo,
            environment: self.environment,
            secret_name: self.secret_name,
            secret_value: self.secret_value,
            overwrite: self.overwrite,
            client: ClientConfig {
                base_url: self.api_url,
                timeout: self.timeout.map(Duration::from_secs),
                ..ClientConfig::default()
            },
            output_file: self.output_file,
        }
    }
}

/// Execute a run.
pub fn execute(cli: Cli) -> Result<()> {
    let inputs = Inputs::from_raw(cli.raw_inputs())?;
    upsert::execute(inputs)
}
