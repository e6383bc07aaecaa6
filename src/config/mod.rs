//! Configuration types for the Pxshot SDK.
//!
//! This module provides the core configuration types used to initialize
//! the client for API communication with the Pxshot service.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`PxshotConfig`]: The main configuration struct holding all client settings
//! - [`PxshotConfigBuilder`]: A builder for constructing [`PxshotConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseUrl`]: A validated service endpoint URL
//!
//! # Example
//!
//! ```rust
//! use pxshot::{ApiKey, PxshotConfig};
//! use std::time::Duration;
//!
//! let config = PxshotConfig::builder()
//!     .api_key(ApiKey::new("px_test_key").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .max_retries(3)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl, DEFAULT_BASE_URL};

use crate::error::ConfigError;
use std::time::Duration;

/// Default request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of retries for transient failures.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Configuration for the Pxshot SDK.
///
/// This struct holds all configuration needed for client operations:
/// the API credential, the service endpoint, the per-request timeout,
/// and the retry budget for transient failures.
///
/// # Thread Safety
///
/// `PxshotConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use pxshot::{ApiKey, BaseUrl, PxshotConfig};
///
/// let config = PxshotConfig::builder()
///     .api_key(ApiKey::new("px_test_key").unwrap())
///     .base_url(BaseUrl::new("https://staging.pxshot.com").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url().as_ref(), "https://staging.pxshot.com");
/// ```
#[derive(Clone, Debug)]
pub struct PxshotConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    timeout: Duration,
    max_retries: u32,
}

// Verify PxshotConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PxshotConfig>();
};

impl PxshotConfig {
    /// Creates a new builder for constructing a `PxshotConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pxshot::{ApiKey, PxshotConfig};
    ///
    /// let config = PxshotConfig::builder()
    ///     .api_key(ApiKey::new("px_test_key").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> PxshotConfigBuilder {
        PxshotConfigBuilder::new()
    }

    /// Creates a configuration with defaults for everything but the key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty or
    /// whitespace-only.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder().api_key(ApiKey::new(api_key)?).build()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the service base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the maximum number of retries for transient failures.
    ///
    /// A value of `n` allows up to `n + 1` attempts per operation.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }
}

/// Builder for constructing [`PxshotConfig`] instances.
///
/// The only required field is `api_key`; all other fields have defaults.
///
/// # Defaults
///
/// - `base_url`: the production endpoint (`https://api.pxshot.com`)
/// - `timeout`: 30 seconds
/// - `max_retries`: 2
///
/// # Example
///
/// ```rust
/// use pxshot::{ApiKey, PxshotConfig};
/// use std::time::Duration;
///
/// let config = PxshotConfig::builder()
///     .api_key(ApiKey::new("px_test_key").unwrap())
///     .timeout(Duration::from_secs(5))
///     .max_retries(0)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct PxshotConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    max_retries: Option<u32>,
}

impl PxshotConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the service base URL.
    ///
    /// Overriding the default is useful for staging environments and for
    /// pointing the client at a mock server in tests.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the per-request timeout.
    ///
    /// The timeout covers a single transport attempt; a timed-out attempt
    /// surfaces as a transport error and counts against the retry budget.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the maximum number of retries for transient failures.
    ///
    /// A value of `0` disables retries entirely.
    #[must_use]
    pub const fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Builds the [`PxshotConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<PxshotConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(PxshotConfig {
            api_key,
            base_url: self.base_url.unwrap_or_default(),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = PxshotConfigBuilder::new().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_applies_defaults() {
        let config = PxshotConfig::builder()
            .api_key(ApiKey::new("px_test_key").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.max_retries(), DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_builder_overrides_defaults() {
        let config = PxshotConfig::builder()
            .api_key(ApiKey::new("px_test_key").unwrap())
            .base_url(BaseUrl::new("http://localhost:9000").unwrap())
            .timeout(Duration::from_secs(5))
            .max_retries(0)
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "http://localhost:9000");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.max_retries(), 0);
    }

    #[test]
    fn test_config_new_rejects_empty_key() {
        assert!(matches!(
            PxshotConfig::new(""),
            Err(ConfigError::EmptyApiKey)
        ));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PxshotConfig>();
    }
}
