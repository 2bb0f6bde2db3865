//! Cryptographic operations.
//!
//! Provides the encryption abstraction and the sealed-box implementation
//! the store expects for secret values.
//!
//! ## Format
//!
//! Secrets are sealed with an anonymous X25519 / XSalsa20-Poly1305 sealed
//! box (libsodium `crypto_box_seal`). The ciphertext is the ephemeral public
//! key (32 bytes), followed by the MAC (16 bytes) and the encrypted message.
//! Keys and ciphertexts travel as standard-alphabet base64.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::trace;

use crate::core::domain::{PublicKeyMaterial, SealedPayload};
use crate::error::{CipherError, Result};

mod sealed_box;

pub use sealed_box::{SealedBox, SEAL_OVERHEAD};

/// Re-exported key types, for callers that hold raw keys.
pub use crypto_box::{PublicKey, SecretKey};

/// Cryptographic backend trait.
///
/// Abstracts encryption and decryption for a single recipient.
pub trait Cipher {
    /// Type representing a recipient public key.
    type Recipient;

    /// Type representing a private identity/key.
    type Identity;

    /// Encrypt plaintext bytes for one recipient.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if encryption fails.
    fn encrypt(&self, plaintext: &[u8], recipient: &Self::Recipient) -> Result<Vec<u8>>;

    /// Decrypt ciphertext bytes with a private identity.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if decryption fails or the key doesn't match.
    fn decrypt(&self, ciphertext: &[u8], identity: &Self::Identity) -> Result<Vec<u8>>;
}

/// Parse a base64 public key as published by the store.
///
/// # Errors
///
/// Returns `CipherError::InvalidPublicKey` if the key is not standard base64
/// or does not decode to 32 bytes.
pub fn parse_public_key(key: &str) -> Result<PublicKey> {
    let raw = STANDARD
        .decode(key)
        .map_err(|e| CipherError::InvalidPublicKey(format!("invalid base64: {}", e)))?;

    let bytes: [u8; crypto_box::KEY_SIZE] = raw.as_slice().try_into().map_err(|_| {
        CipherError::InvalidPublicKey(format!(
            "expected {} bytes, got {}",
            crypto_box::KEY_SIZE,
            raw.len()
        ))
    })?;

    Ok(PublicKey::from(bytes))
}

/// Seal a secret value for a scope's public key.
///
/// # Returns
///
/// The base64 ciphertext paired with the key's id, ready to be written.
///
/// # Errors
///
/// Returns `CipherError` if the key is malformed or sealing fails.
pub fn seal(plaintext: &str, key: &PublicKeyMaterial) -> Result<SealedPayload> {
    let recipient = parse_public_key(&key.key)?;
    let sealed = SealedBox.encrypt(plaintext.as_bytes(), &recipient)?;

    trace!(key_id = %key.key_id, sealed_len = sealed.len(), "sealed secret");

    Ok(SealedPayload {
        encrypted_value: STANDARD.encode(sealed),
        key_id: key.key_id.clone(),
    })
}

/// Open a base64 sealed value with the scope's private key.
///
/// The store does this on its side; this is here for round-trip checks.
///
/// # Errors
///
/// Returns `CipherError::DecryptionFailed` if the value is not base64, the
/// key doesn't match, or the plaintext isn't UTF-8.
pub fn open(encrypted_value: &str, identity: &SecretKey) -> Result<String> {
    let sealed = STANDARD
        .decode(encrypted_value)
        .map_err(|e| CipherError::DecryptionFailed(format!("invalid base64: {}", e)))?;
    let opened = SealedBox.decrypt(&sealed, identity)?;

    String::from_utf8(opened)
        .map_err(|e| CipherError::DecryptionFailed(format!("UTF-8 error: {}", e)).into())
}
