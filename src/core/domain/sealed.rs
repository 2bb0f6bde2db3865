//! Sealed secret payload.

use serde::Serialize;

use crate::core::types::{EncryptedValue, KeyId};

/// A secret value sealed for one scope's public key.
///
/// Sealing is randomized: two payloads for the same plaintext and key differ
/// byte-for-byte but open to the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SealedPayload {
    /// Base64 (standard alphabet) sealed-box ciphertext
    pub encrypted_value: EncryptedValue,
    /// Id of the public key used to seal
    pub key_id: KeyId,
}
