//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A secret name (e.g., DATABASE_URL, DEPLOY_KEY).
///
/// Must satisfy the store's naming rules, see [`crate::core::validation`].
pub type SecretName = String;

/// A base64 sealed-box ciphertext.
pub type EncryptedValue = String;

/// A base64 X25519 public key as published by the store.
pub type PublicKey = String;

/// Identifier of a scope public key.
pub type KeyId = String;
