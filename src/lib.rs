//! # Pxshot Rust SDK
//!
//! A Rust SDK for the Pxshot screenshot API, providing type-safe
//! configuration, authenticated request handling, and typed results for
//! screenshot capture, usage introspection, and health checks.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`PxshotConfig`] and [`PxshotConfigBuilder`]
//! - A validated, log-masked [`ApiKey`] credential newtype
//! - A blocking client ([`Pxshot`]) and an async client ([`AsyncPxshot`])
//!   sharing one contract implementation
//! - Automatic retry with backoff for rate limits and transport failures
//! - A typed error taxonomy mapped from HTTP status codes
//! - Rate-limit state tracking from response headers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pxshot::{AsyncPxshot, ScreenshotRequest, ScreenshotResult};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AsyncPxshot::new("px_live_abc123")?;
//!
//! let request = ScreenshotRequest::builder("https://example.com")
//!     .width(1920)
//!     .height(1080)
//!     .build();
//!
//! match client.screenshot(&request).await? {
//!     ScreenshotResult::Image(bytes) => std::fs::write("example.png", bytes)?,
//!     ScreenshotResult::Stored(stored) => println!("stored at {}", stored.url),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Blocking Usage
//!
//! Outside an async runtime, use the blocking facade with the same API:
//!
//! ```rust,no_run
//! use pxshot::{Pxshot, ScreenshotRequest};
//!
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Pxshot::new("px_live_abc123")?;
//! let usage = client.usage()?;
//! println!(
//!     "{} of {} screenshots used ({:.1}%)",
//!     usage.screenshots_used,
//!     usage.screenshots_limit,
//!     usage.usage_percentage(),
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Stored Screenshots
//!
//! Asking the service to persist the image returns a reference instead of
//! inline bytes. The response content type is authoritative for which
//! variant is produced, so callers must handle both:
//!
//! ```rust,no_run
//! use pxshot::{AsyncPxshot, ScreenshotRequest, ScreenshotResult};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AsyncPxshot::new("px_live_abc123")?;
//! let request = ScreenshotRequest::builder("https://example.com")
//!     .store(true)
//!     .build();
//!
//! if let ScreenshotResult::Stored(stored) = client.screenshot(&request).await? {
//!     println!("{} expires at {}", stored.url, stored.expires_at);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every failure maps to one variant of [`Error`]. Rate limits and
//! transport failures are retried automatically up to the configured
//! budget; everything else fails on first occurrence:
//!
//! ```rust,no_run
//! use pxshot::{AsyncPxshot, Error, ScreenshotRequest};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AsyncPxshot::new("px_live_abc123")?;
//! let request = ScreenshotRequest::builder("https://example.com").build();
//!
//! match client.screenshot(&request).await {
//!     Ok(result) => { /* handle result */ }
//!     Err(Error::RateLimit { retry_after, .. }) => {
//!         eprintln!("rate limited; retry after {retry_after:?} seconds");
//!     }
//!     Err(Error::Authentication { message }) => {
//!         eprintln!("check your API key: {message}");
//!     }
//!     Err(other) => return Err(other.into()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Credentials are validated at construction,
//!   before any network activity
//! - **Thread-safe**: Both clients are `Send + Sync`
//! - **One contract**: The blocking and async facades share the request
//!   building, retry decision, and error mapping logic

pub mod clients;
pub mod config;
pub mod error;
pub mod models;

// Re-export public types at crate root for convenience
pub use clients::{
    ApiResponse, AsyncPxshot, Error, ImageFormat, InvalidRequestError, Pxshot, RetryPolicy,
    ScreenshotRequest, ScreenshotRequestBuilder, WaitUntil,
};
pub use config::{
    ApiKey, BaseUrl, PxshotConfig, PxshotConfigBuilder, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES,
    DEFAULT_TIMEOUT,
};
pub use error::ConfigError;
pub use models::{
    HealthStatus, RateLimitInfo, ScreenshotResult, StoredScreenshot, UsageStats,
};
