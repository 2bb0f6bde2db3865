//! Input validation for sealsecret.
//!
//! Rejects secret names the store would refuse, before any request is made.

use crate::core::constants::RESERVED_PREFIX;
use crate::error::{Result, ValidationError};

/// Validate a secret name.
///
/// Secret names follow the store's rules:
/// - Only A-Z, a-z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot start with the reserved `GITHUB_` prefix (any case)
/// - Cannot be empty
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_secret_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    if let Some(first_char) = name.chars().next() {
        if first_char.is_ascii_digit() {
            return Err(invalid(name, "cannot start with a digit".to_string()));
        }
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(invalid(
                name,
                format!(
                    "invalid character '{}' at position {}. Only A-Z, a-z, 0-9, and underscore are allowed",
                    ch,
                    i + 1
                ),
            ));
        }
    }

    let reserved = name
        .get(..RESERVED_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(RESERVED_PREFIX));
    if reserved {
        return Err(invalid(
            name,
            format!("the {} prefix is reserved", RESERVED_PREFIX),
        ));
    }

    Ok(())
}

fn invalid(name: &str, reason: String) -> crate::error::Error {
    ValidationError::InvalidName {
        name: name.to_string(),
        reason,
    }
    .into()
}
