//! Response models for the Pxshot API.
//!
//! This module contains the typed results returned by the client
//! operations: screenshot outcomes, usage statistics, and health status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A screenshot persisted by the service and referenced by URL.
///
/// Returned instead of inline bytes when a screenshot request asks the
/// service to store the image. The reference expires at `expires_at`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredScreenshot {
    /// Public URL of the stored image.
    pub url: String,
    /// When the stored image expires and the URL stops resolving.
    pub expires_at: DateTime<Utc>,
    /// Rendered image width in pixels.
    pub width: u32,
    /// Rendered image height in pixels.
    pub height: u32,
    /// Size of the stored image in bytes.
    pub size_bytes: u64,
}

/// The outcome of a screenshot operation.
///
/// Which variant is produced is determined by the response content type,
/// not by the `store` flag the caller sent; the service is authoritative.
/// Downstream code must handle both cases.
///
/// # Example
///
/// ```rust,ignore
/// match client.screenshot(&request).await? {
///     ScreenshotResult::Image(bytes) => std::fs::write("shot.png", bytes)?,
///     ScreenshotResult::Stored(stored) => println!("stored at {}", stored.url),
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenshotResult {
    /// Raw image bytes, returned unmodified from the response body.
    Image(Vec<u8>),
    /// A reference to an image persisted by the service.
    Stored(StoredScreenshot),
}

impl ScreenshotResult {
    /// Returns the raw image bytes, if this result is inline data.
    #[must_use]
    pub fn as_image(&self) -> Option<&[u8]> {
        match self {
            Self::Image(bytes) => Some(bytes),
            Self::Stored(_) => None,
        }
    }

    /// Returns the stored-screenshot reference, if the image was persisted.
    #[must_use]
    pub const fn as_stored(&self) -> Option<&StoredScreenshot> {
        match self {
            Self::Image(_) => None,
            Self::Stored(stored) => Some(stored),
        }
    }
}

/// Account usage statistics for the current billing period.
///
/// The `screenshots_remaining` and `usage_percentage` values are computed
/// locally from the transmitted counters, not sent by the service.
///
/// # Example
///
/// ```rust
/// use pxshot::UsageStats;
///
/// let usage = UsageStats {
///     period: "2024-01".to_string(),
///     screenshots_used: 100,
///     screenshots_limit: 1000,
///     storage_used_bytes: 5_000_000,
/// };
///
/// assert_eq!(usage.screenshots_remaining(), 900);
/// assert!((usage.usage_percentage() - 10.0).abs() < f64::EPSILON);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    /// The billing period, e.g. `"2024-01"`.
    pub period: String,
    /// Screenshots taken in this period.
    pub screenshots_used: u64,
    /// Screenshots allowed per period on the current plan.
    pub screenshots_limit: u64,
    /// Bytes of stored screenshots currently held.
    pub storage_used_bytes: u64,
}

impl UsageStats {
    /// Returns the number of screenshots left in this period.
    ///
    /// Saturates at zero when usage exceeds the plan limit.
    #[must_use]
    pub const fn screenshots_remaining(&self) -> u64 {
        self.screenshots_limit.saturating_sub(self.screenshots_used)
    }

    /// Returns the fraction of the plan limit used, as a percentage.
    ///
    /// Returns `0.0` when the limit is zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn usage_percentage(&self) -> f64 {
        if self.screenshots_limit == 0 {
            return 0.0;
        }
        self.screenshots_used as f64 / self.screenshots_limit as f64 * 100.0
    }
}

/// Service health report from `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Service status, e.g. `"ok"`.
    pub status: String,
    /// Service version. Some deployments omit it; reported as an empty
    /// string in that case rather than failing the call.
    #[serde(default)]
    pub version: String,
}

/// The service's rate-limit counters as of the most recent response.
///
/// Parsed from the `x-ratelimit-limit`, `x-ratelimit-remaining`, and
/// `x-ratelimit-reset` response headers after every call. The client keeps
/// only the latest observation; treat it as best-effort telemetry, not a
/// synchronization primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Requests allowed per window.
    pub limit: u64,
    /// Requests remaining in the current window.
    pub remaining: u64,
    /// When the window resets, as epoch seconds.
    pub reset: u64,
}
