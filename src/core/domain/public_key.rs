//! Scope public key.
//!
//! The key a scope publishes for sealing secrets, plus the identifier the
//! store needs to pick the matching private key on write.

use serde::Deserialize;

use crate::core::types::{KeyId, PublicKey};

/// Public key material fetched for one scope.
///
/// Fetched fresh on every run and used to seal exactly one value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublicKeyMaterial {
    /// Identifier echoed back on write
    pub key_id: KeyId,
    /// Base64 (standard alphabet) X25519 public key
    pub key: PublicKey,
}
