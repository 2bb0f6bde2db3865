//! Remote secret metadata.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::types::SecretName;

/// Metadata the store returns for an existing secret.
///
/// The value itself is never readable; only names and timestamps are.
/// Timestamps are informational and may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SecretRecord {
    pub name: SecretName,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SecretRecord {
    /// A record known only by name.
    pub fn named(name: impl Into<SecretName>) -> Self {
        Self {
            name: name.into(),
            created_at: None,
            updated_at: None,
        }
    }
}
