//! Secret operations (exists, seal, upsert).
//!
//! High-level operations for provisioning a sealed secret into one scope.
//! Steps run strictly in order: existence check, key fetch, seal, write. The
//! key is fetched right before sealing so the write uses the key of this run.

use tracing::debug;

use crate::core::api::SecretsApi;
use crate::core::cipher;
use crate::core::domain::{Action, Outcome, SealedPayload};
use crate::core::observer::{Event, Observer};
use crate::core::scope::Scope;
use crate::error::Result;

/// Check whether a secret exists in a scope.
///
/// # Errors
///
/// Propagates any store failure other than "not found".
pub async fn exists(
    api: &dyn SecretsApi,
    observer: &dyn Observer,
    scope: &Scope,
    name: &str,
) -> Result<bool> {
    observer.on_event(&Event::CheckingExistence { scope, name });

    match api.secret(scope, name).await? {
        Some(record) => {
            observer.on_event(&Event::Found { record: &record });
            Ok(true)
        }
        None => {
            observer.on_event(&Event::NotFound { name });
            Ok(false)
        }
    }
}

/// Fetch a scope's public key and seal a value for it.
///
/// # Errors
///
/// Returns `RemoteError`/`TransportError` if the key fetch fails, or
/// `CipherError` if the returned key is malformed.
pub async fn seal(
    api: &dyn SecretsApi,
    observer: &dyn Observer,
    scope: &Scope,
    plaintext: &str,
) -> Result<SealedPayload> {
    observer.on_event(&Event::FetchingKey { scope });

    let key = api.public_key(scope).await?;
    debug!(key_id = %key.key_id, "fetched public key");

    cipher::seal(plaintext, &key)
}

/// Create or update a secret.
///
/// Writes when `overwrite` is set or the secret does not exist yet. An
/// existing secret with `overwrite` off is left untouched.
///
/// # Returns
///
/// Whether the secret existed before the run, and whether it was written.
///
/// # Errors
///
/// Any failure aborts the run; nothing is retried.
pub async fn upsert(
    api: &dyn SecretsApi,
    observer: &dyn Observer,
    scope: &Scope,
    name: &str,
    value: &str,
    overwrite: bool,
) -> Result<Outcome> {
    let existed = exists(api, observer, scope, name).await?;

    if existed && !overwrite {
        observer.on_event(&Event::Skipped { scope, name });
        return Ok(Outcome {
            existed,
            action: Action::Skipped,
        });
    }

    let payload = seal(api, observer, scope, value).await?;

    observer.on_event(&Event::Writing { scope, name });
    api.put_secret(scope, name, &payload).await?;

    Ok(Outcome {
        existed,
        action: Action::Written,
    })
}
