//! API Credential Handling
//!
//! The text-generation credential lives only in process memory:
//! - never persisted, never logged (Debug is redacted)
//! - wiped from memory when the last copy is dropped

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Longest key we accept. Real keys are ~40 characters.
pub const MAX_API_KEY_LENGTH: usize = 512;

/// Credential policy violations, detected before any network call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialPolicyError {
    #[error("API key cannot be empty")]
    Empty,

    #[error("API key must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("API key contains whitespace or control characters")]
    InvalidCharacter,
}

/// Opaque API key for the text-generation service
///
/// Cloning is allowed so each request can own its copy; every copy is
/// zeroized on drop.
///
/// ## Examples
/// ```rust
/// use platform::secret::ApiKey;
///
/// let key = ApiKey::new("  AIza-example  ").unwrap();
/// assert_eq!(key.expose(), "AIza-example");
/// assert_eq!(format!("{key:?}"), "ApiKey(\"[REDACTED]\")");
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validate and wrap raw user input. Surrounding whitespace is trimmed.
    pub fn new(raw: impl Into<String>) -> Result<Self, CredentialPolicyError> {
        let mut raw = raw.into();
        let trimmed = raw.trim();

        let result = if trimmed.is_empty() {
            Err(CredentialPolicyError::Empty)
        } else if trimmed.chars().count() > MAX_API_KEY_LENGTH {
            Err(CredentialPolicyError::TooLong {
                max: MAX_API_KEY_LENGTH,
                actual: trimmed.chars().count(),
            })
        } else if trimmed
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            Err(CredentialPolicyError::InvalidCharacter)
        } else {
            Ok(Self(trimmed.to_string()))
        };

        raw.zeroize();
        result
    }

    /// Raw key, for building the outgoing request header only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_input() {
        let key = ApiKey::new("\tabc123\n").unwrap();
        assert_eq!(key.expose(), "abc123");
    }

    #[test]
    fn test_rejects_empty_and_blank() {
        assert_eq!(ApiKey::new("").unwrap_err(), CredentialPolicyError::Empty);
        assert_eq!(ApiKey::new("   ").unwrap_err(), CredentialPolicyError::Empty);
    }

    #[test]
    fn test_rejects_inner_whitespace() {
        assert_eq!(
            ApiKey::new("abc def").unwrap_err(),
            CredentialPolicyError::InvalidCharacter
        );
    }

    #[test]
    fn test_rejects_oversized_key() {
        let raw = "k".repeat(MAX_API_KEY_LENGTH + 1);
        assert!(matches!(
            ApiKey::new(raw),
            Err(CredentialPolicyError::TooLong { .. })
        ));
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = ApiKey::new("super-secret").unwrap();
        let debug = format!("{key:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
