//! Credential resolution from configuration.
//!
//! The API key is resolved on every request and never cached, so a key
//! exported after startup is picked up by the next submission.

use super::types::GenerationConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    Configured(SecureString),
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl GenerationConfig {
    /// Resolve the API key: `api_key` first, then the `api_key_env` variable.
    /// Empty values count as missing.
    pub fn resolve_credential(&self) -> CredentialStatus {
        if let Some(key) = self.api_key.as_deref().filter(|key| !key.is_empty()) {
            return CredentialStatus::Configured(SecureString::new(key.to_string()));
        }

        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.is_empty() => CredentialStatus::Configured(SecureString::new(key)),
            _ => CredentialStatus::Unconfigured {
                reason: format!("api_key is not set and ${} is empty", self.api_key_env),
            },
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.resolve_credential(), CredentialStatus::Configured(_))
    }
}
