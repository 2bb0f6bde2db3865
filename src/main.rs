//! sealsecret - Seal a value and upsert it as a GitHub Actions secret.

use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sealsecret::cli::{execute, output, Cli, LogFormat};
use sealsecret::core::constants::LOG_ENV;
use sealsecret::error::{ConfigError, Error, RemoteError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("sealsecret=debug")
        } else {
            EnvFilter::new("sealsecret=info")
        }
    });

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time();
    match cli.log_format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .init(),
    }

    let authenticated = cli.token.as_deref().is_some_and(|t| !t.trim().is_empty());

    if let Err(e) = execute(cli) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Config(ConfigError::MissingOwner) => Some("pass --owner or set INPUT_OWNER"),
            Error::Remote(RemoteError::Status { status: 401, .. }) => {
                Some("the token was rejected, check that it is valid and not expired")
            }
            Error::Remote(RemoteError::Status {
                status: 403 | 404, ..
            }) if !authenticated => Some("private scopes need a token: pass --token"),
            Error::Remote(RemoteError::Status { status: 403, .. }) => {
                Some("the token needs admin access to the target scope's secrets")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
