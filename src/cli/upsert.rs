//! Upsert command.
//!
//! Builds the client, drives one upsert to completion, and reports the
//! `secret-existed` output.

use tracing::debug;

use crate::cli::{action, output};
use crate::core::api::GitHubClient;
use crate::core::config::Inputs;
use crate::core::constants::OUTPUT_SECRET_EXISTED;
use crate::core::domain::Action;
use crate::core::observer::TracingObserver;
use crate::core::secrets;
use crate::error::Result;

/// Seal and upsert the configured secret.
///
/// The output is only reported once the whole run has succeeded.
pub fn execute(inputs: Inputs) -> Result<()> {
    let client = GitHubClient::new(&inputs.client, inputs.token.clone())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let outcome = runtime.block_on(secrets::upsert(
        &client,
        &TracingObserver,
        &inputs.scope,
        &inputs.secret_name,
        &inputs.secret_value,
        inputs.overwrite,
    ))?;
    debug!(?outcome, "upsert finished");

    match outcome.action {
        Action::Written => output::success(&format!(
            "wrote {} to the {}",
            inputs.secret_name, inputs.scope
        )),
        Action::Skipped => output::warn(&format!(
            "{} already exists in the {}, left unchanged (use --overwrite to replace)",
            inputs.secret_name, inputs.scope
        )),
    }
    output::kv(&format!("{}:", OUTPUT_SECRET_EXISTED), outcome.existed);

    if let Some(path) = &inputs.output_file {
        action::set_output(path, OUTPUT_SECRET_EXISTED, outcome.existed)?;
    }

    Ok(())
}
