//! Credential resolution from configuration.
//!
//! The RapidAPI key is never compiled in. It comes from the config file or
//! from the environment, and is resolved when a request is built.

use super::types::ApiConfig;

/// Environment variable that overrides `api.api_key`.
pub const API_KEY_ENV: &str = "KANJIVIEW_API_KEY";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
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
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// API key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl ApiConfig {
    /// Resolve the API key from the environment, then the config file.
    ///
    /// Called on every request and not cached.
    pub fn resolve_credential(&self) -> CredentialStatus {
        self.resolve_credential_with(std::env::var(API_KEY_ENV).ok())
    }

    /// Resolution with an explicit environment value.
    pub fn resolve_credential_with(&self, env_value: Option<String>) -> CredentialStatus {
        let candidates = [env_value, self.api_key.clone()];
        for key in candidates.into_iter().flatten() {
            let key = key.trim();
            if !key.is_empty() {
                return CredentialStatus::Configured(SecureString::new(key.to_string()));
            }
        }
        CredentialStatus::Unconfigured {
            reason: format!("set api.api_key in the config file or {}", API_KEY_ENV),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_string_does_not_leak() {
        let secret = SecureString::new("my-secret-key".to_string());

        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("my-secret-key"));
        assert!(debug_output.contains("••••••••"));

        let display_output = format!("{}", secret);
        assert!(!display_output.contains("my-secret-key"));

        assert_eq!(secret.expose(), "my-secret-key");
    }

    #[test]
    fn env_value_wins_over_config() {
        let api = ApiConfig {
            api_key: Some("from-file".to_string()),
            ..ApiConfig::default()
        };
        let status = api.resolve_credential_with(Some("from-env".to_string()));
        assert_eq!(
            status,
            CredentialStatus::Configured(SecureString::new("from-env".to_string()))
        );
    }

    #[test]
    fn blank_env_value_falls_back_to_config() {
        let api = ApiConfig {
            api_key: Some("from-file".to_string()),
            ..ApiConfig::default()
        };
        let status = api.resolve_credential_with(Some("   ".to_string()));
        assert_eq!(
            status,
            CredentialStatus::Configured(SecureString::new("from-file".to_string()))
        );
    }

    #[test]
    fn missing_key_is_unconfigured() {
        let api = ApiConfig::default();
        let status = api.resolve_credential_with(None);
        match status {
            CredentialStatus::Unconfigured { reason } => assert!(reason.contains(API_KEY_ENV)),
            other => panic!("expected Unconfigured, got {:?}", other),
        }
    }
}
