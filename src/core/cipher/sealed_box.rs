//! Sealed-box backend implementation.
//!
//! Anonymous public-key encryption: each seal uses a fresh ephemeral keypair,
//! so the sender is not authenticated and only the recipient can open it.

use crypto_box::aead::OsRng;
use crypto_box::{PublicKey, SecretKey};
use tracing::trace;

use super::Cipher;
use crate::error::{CipherError, Result};

/// Bytes a seal adds to the plaintext: ephemeral public key plus MAC.
pub const SEAL_OVERHEAD: usize = crypto_box::KEY_SIZE + 16;

/// libsodium-compatible sealed box over X25519 keys.
pub struct SealedBox;

impl Cipher for SealedBox {
    type Recipient = PublicKey;
    type Identity = SecretKey;

    fn encrypt(&self, plaintext: &[u8], recipient: &PublicKey) -> Result<Vec<u8>> {
        trace!(plaintext_len = plaintext.len(), "sealing");

        let sealed = recipient
            .seal(&mut OsRng, plaintext)
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        trace!(ciphertext_len = sealed.len(), "sealed");
        Ok(sealed)
    }

    fn decrypt(&self, ciphertext: &[u8], identity: &SecretKey) -> Result<Vec<u8>> {
        trace!(ciphertext_len = ciphertext.len(), "opening");

        if ciphertext.len() < SEAL_OVERHEAD {
            return Err(CipherError::DecryptionFailed(format!(
                "ciphertext shorter than {} bytes",
                SEAL_OVERHEAD
            ))
            .into());
        }

        identity
            .unseal(ciphertext)
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)).into())
    }
}
