//! Blocking client for the Pxshot API.
//!
//! This module provides [`Pxshot`], the synchronous client facade. It shares
//! all contract logic with [`AsyncPxshot`](crate::AsyncPxshot) and differs
//! only in that transport calls and backoff delays occupy the calling thread.

use std::sync::Mutex;

use crate::clients::errors::Error;
use crate::clients::protocol::{self, HEALTH_PATH, SCREENSHOT_PATH, USAGE_PATH};
use crate::clients::request::ScreenshotRequest;
use crate::clients::response::ApiResponse;
use crate::clients::retry::RetryPolicy;
use crate::config::PxshotConfig;
use crate::error::ConfigError;
use crate::models::{HealthStatus, RateLimitInfo, ScreenshotResult, UsageStats};

/// Blocking client for the Pxshot screenshot API.
///
/// Every operation occupies the calling thread until the underlying
/// transport call, including all retries, completes. The client owns its
/// transport connection pool for its lifetime; it is released when the
/// client is dropped, even if an operation returned an error.
///
/// Do not use this client inside an async runtime; use
/// [`AsyncPxshot`](crate::AsyncPxshot) there instead.
///
/// # Example
///
/// ```rust,no_run
/// use pxshot::{Pxshot, ScreenshotRequest, ScreenshotResult};
///
/// # fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Pxshot::new("px_live_abc123")?;
///
/// let request = ScreenshotRequest::builder("https://example.com").build();
/// if let ScreenshotResult::Image(bytes) = client.screenshot(&request)? {
///     std::fs::write("shot.png", bytes)?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Pxshot {
    config: PxshotConfig,
    client: reqwest::blocking::Client,
    retry: RetryPolicy,
    rate_limit: Mutex<Option<RateLimitInfo>>,
}

// Verify Pxshot is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Pxshot>();
};

impl Pxshot {
    /// Creates a client with default configuration for the given API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty or
    /// whitespace-only. Fails before any network activity.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self::with_config(PxshotConfig::new(api_key)?))
    }

    /// Creates a client from an explicit configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn with_config(config: PxshotConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        let retry = RetryPolicy::new(config.max_retries());

        Self {
            config,
            client,
            retry,
            rate_limit: Mutex::new(None),
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &PxshotConfig {
        &self.config
    }

    /// Returns the most recently observed rate-limit counters.
    ///
    /// `None` until the first call completes with rate-limit headers.
    /// Overwritten last-writer-wins on every call; treat it as best-effort
    /// telemetry.
    #[must_use]
    pub fn rate_limit(&self) -> Option<RateLimitInfo> {
        self.rate_limit.lock().ok().and_then(|guard| *guard)
    }

    /// Captures a screenshot of a URL.
    ///
    /// Issues `POST /v1/screenshot` with the set request fields. The result
    /// shape follows the response content type: inline image bytes, or a
    /// [`StoredScreenshot`](crate::StoredScreenshot) reference when the
    /// service persisted the image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Request`] if the request fails local validation
    /// (empty URL), the mapped taxonomy error for a non-success response,
    /// [`Error::Transport`] for network failures, or [`Error::Decode`] if a
    /// JSON success body is malformed.
    pub fn screenshot(&self, request: &ScreenshotRequest) -> Result<ScreenshotResult, Error> {
        request.verify()?;
        let body = serde_json::to_value(request)?;
        let response = self.send(SCREENSHOT_PATH, Some(&body))?;
        protocol::decode_screenshot(response)
    }

    /// Fetches account usage statistics via `GET /v1/usage`.
    ///
    /// # Errors
    ///
    /// Returns the mapped taxonomy error for a non-success response,
    /// [`Error::Transport`] for network failures, or [`Error::Decode`] if
    /// the body is malformed.
    pub fn usage(&self) -> Result<UsageStats, Error> {
        let response = self.send(USAGE_PATH, None)?;
        protocol::decode_json(&response)
    }

    /// Checks service health via `GET /health`.
    ///
    /// # Errors
    ///
    /// Returns the mapped taxonomy error for a non-success response,
    /// [`Error::Transport`] for network failures, or [`Error::Decode`] if
    /// the body is malformed.
    pub fn health(&self) -> Result<HealthStatus, Error> {
        let response = self.send(HEALTH_PATH, None)?;
        protocol::decode_json(&response)
    }

    /// Sends a request with retry handling, returning the final response.
    ///
    /// The retained rate-limit snapshot is updated from every attempt's
    /// response headers, success or failure.
    fn send(&self, path: &str, body: Option<&serde_json::Value>) -> Result<ApiResponse, Error> {
        let url = protocol::endpoint_url(&self.config, path);

        let mut attempt: u32 = 0;
        loop {
            tracing::debug!(url = %url, attempt, "sending request");

            let error = match self.execute(&url, body) {
                Ok(response) => {
                    self.record_rate_limit(&response);
                    if response.is_ok() {
                        return Ok(response);
                    }
                    protocol::map_error(&response)
                }
                Err(transport) => Error::Transport(transport),
            };

            match self.retry.next_delay(attempt, &error) {
                Some(delay) => {
                    tracing::warn!(
                        url = %url,
                        attempt,
                        delay_secs = delay.as_secs(),
                        error = %error,
                        "transient failure, retrying"
                    );
                    std::thread::sleep(delay);
                    attempt += 1;
                }
                None => return Err(error),
            }
        }
    }

    /// Performs a single transport attempt.
    fn execute(
        &self,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<ApiResponse, reqwest::Error> {
        let builder = match body {
            Some(body) => self.client.post(url).json(body),
            None => self.client.get(url),
        };

        let response = builder
            .header("Authorization", protocol::bearer_auth(&self.config))
            .header("User-Agent", protocol::user_agent())
            .send()?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let bytes = response.bytes()?;

        Ok(ApiResponse::from_parts(status, &headers, bytes.to_vec()))
    }

    /// Overwrites the retained snapshot when the response carried one.
    fn record_rate_limit(&self, response: &ApiResponse) {
        if let Some(info) = response.rate_limit {
            if let Ok(mut guard) = self.rate_limit.lock() {
                *guard = Some(info);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_api_key() {
        assert!(matches!(Pxshot::new(""), Err(ConfigError::EmptyApiKey)));
        assert!(matches!(Pxshot::new(" \t"), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_rate_limit_is_none_before_first_call() {
        let client = Pxshot::new("px_test_key").unwrap();
        assert!(client.rate_limit().is_none());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Pxshot>();
    }
}
