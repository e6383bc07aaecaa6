//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Pxshot API key.
///
/// This newtype ensures the API key is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the key value, displaying only
/// `ApiKey(*****)` instead of the actual credential.
///
/// # Example
///
/// ```rust
/// use pxshot::ApiKey;
///
/// let key = ApiKey::new("px_test_key").unwrap();
/// assert_eq!(key.as_ref(), "px_test_key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// Surrounding whitespace is trimmed before validation, so a
    /// whitespace-only key is rejected the same way an empty one is.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty or
    /// whitespace-only.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated base URL for the Pxshot API.
///
/// This newtype validates the URL scheme on construction and normalizes
/// the value by trimming any trailing slash, so endpoint paths can be
/// appended without double slashes.
///
/// # Example
///
/// ```rust
/// use pxshot::BaseUrl;
///
/// let url = BaseUrl::new("https://api.pxshot.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.pxshot.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

/// The production Pxshot API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.pxshot.com";

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL does not start
    /// with `http://` or `https://`.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();
        if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }
        Ok(Self(trimmed.trim_end_matches('/').to_string()))
    }

    /// Returns the default production endpoint.
    #[must_use]
    pub fn production() -> Self {
        Self(DEFAULT_BASE_URL.to_string())
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self::production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_accepts_non_empty_value() {
        let key = ApiKey::new("px_live_abc123").unwrap();
        assert_eq!(key.as_ref(), "px_live_abc123");
    }

    #[test]
    fn test_api_key_rejects_empty_value() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_rejects_whitespace_only_value() {
        assert!(matches!(ApiKey::new("   "), Err(ConfigError::EmptyApiKey)));
        assert!(matches!(ApiKey::new("\t\n"), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_trims_surrounding_whitespace() {
        let key = ApiKey::new("  px_test_key  ").unwrap();
        assert_eq!(key.as_ref(), "px_test_key");
    }

    #[test]
    fn test_api_key_debug_is_masked() {
        let key = ApiKey::new("px_live_secret").unwrap();
        let debug = format!("{key:?}");
        assert_eq!(debug, "ApiKey(*****)");
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_base_url_accepts_https() {
        let url = BaseUrl::new("https://api.pxshot.com").unwrap();
        assert_eq!(url.as_ref(), "https://api.pxshot.com");
    }

    #[test]
    fn test_base_url_accepts_http_for_local_testing() {
        let url = BaseUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let url = BaseUrl::new("https://api.pxshot.com/").unwrap();
        assert_eq!(url.as_ref(), "https://api.pxshot.com");
    }

    #[test]
    fn test_base_url_rejects_missing_scheme() {
        assert!(matches!(
            BaseUrl::new("api.pxshot.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_base_url_default_is_production() {
        assert_eq!(BaseUrl::default().as_ref(), DEFAULT_BASE_URL);
    }
}
