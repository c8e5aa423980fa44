//! Auth support types
//!
//! Token caching and credential checks shared by the authenticators.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authentication scheme identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthType {
    /// No authentication
    NoAuth,
    /// HTTP Basic authentication
    Basic,
    /// Static bearer token
    BearerToken,
    /// IAM API key exchanged for an access token
    Iam,
}

impl std::fmt::Display for AuthType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AuthType::NoAuth => "noAuth",
            AuthType::Basic => "basic",
            AuthType::BearerToken => "bearerToken",
            AuthType::Iam => "iam",
        };
        f.write_str(name)
    }
}

/// Cached token with expiration
#[derive(Debug, Clone)]
pub struct CachedToken {
    /// The access token
    pub token: String,
    /// When the token expires
    pub expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    /// Create a new cached token
    pub fn new(token: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { token, expires_at }
    }

    /// Create a token that expires in N seconds from now
    pub fn expires_in(token: String, seconds: i64) -> Self {
        let expires_at = Utc::now() + chrono::Duration::seconds(seconds);
        Self {
            token,
            expires_at: Some(expires_at),
        }
    }

    /// Check if the token is expired (with 30 second buffer)
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => {
                let buffer = chrono::Duration::seconds(30);
                Utc::now() + buffer >= expires_at
            }
            None => false, // No expiration = never expires
        }
    }
}

/// Reject empty credentials and values still wrapped in braces or quotes
///
/// Catches templated values such as `{apikey}` or `"secret"` copied verbatim
/// from a configuration file.
pub fn validate_credential(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::auth(format!("the {name} property is required")));
    }

    let bad_first = value.starts_with('{') || value.starts_with('"');
    let bad_last = value.ends_with('}') || value.ends_with('"');
    if bad_first || bad_last {
        return Err(Error::auth(format!(
            "the {name} property must not start or end with '{{', '}}' or '\"'"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_cached_token_not_expired() {
        let token = CachedToken::expires_in("test".to_string(), 3600);
        assert!(!token.is_expired());
    }

    #[test]
    fn test_cached_token_expired() {
        let token = CachedToken::expires_in("test".to_string(), -100);
        assert!(token.is_expired());
    }

    #[test]
    fn test_cached_token_inside_buffer() {
        let token = CachedToken::expires_in("test".to_string(), 10);
        assert!(token.is_expired());
    }

    #[test]
    fn test_cached_token_no_expiration() {
        let token = CachedToken::new("test".to_string(), None);
        assert!(!token.is_expired());
    }

    #[test]
    fn test_validate_credential() {
        assert!(validate_credential("apikey", "abc123").is_ok());
        assert!(validate_credential("apikey", "").is_err());
        assert!(validate_credential("apikey", "{apikey}").is_err());
        assert!(validate_credential("apikey", "\"abc\"").is_err());
        assert!(validate_credential("apikey", "ab{c").is_ok());
    }

    #[test]
    fn test_auth_type_display() {
        assert_eq!(AuthType::Iam.to_string(), "iam");
        assert_eq!(AuthType::NoAuth.to_string(), "noAuth");
    }
}
