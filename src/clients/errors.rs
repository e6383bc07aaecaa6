//! Error taxonomy for Pxshot API operations.
//!
//! This module contains the error types returned by client operations,
//! covering server-reported failures, transport failures, and local
//! request validation.
//!
//! # Error Handling
//!
//! Every failed operation yields exactly one of the variants of [`Error`]:
//!
//! - [`Error::Authentication`]: 401, invalid or missing API key
//! - [`Error::QuotaExceeded`]: 403, plan quota exhausted
//! - [`Error::Validation`]: 422, request rejected by server-side validation
//! - [`Error::RateLimit`]: 429, carries the `retry-after` value when present
//! - [`Error::Api`]: any other 4xx/5xx, carries status and message
//! - [`Error::Transport`]: timeout, connection refused, DNS failure
//! - [`Error::Decode`]: malformed structured body on an otherwise-successful response
//! - [`Error::Request`]: local validation failure, raised before any network call
//!
//! # Example
//!
//! ```rust,ignore
//! match client.screenshot(&request).await {
//!     Ok(result) => { /* handle result */ }
//!     Err(Error::RateLimit { retry_after, .. }) => {
//!         println!("rate limited, retry after {retry_after:?}s");
//!     }
//!     Err(Error::Authentication { message }) => {
//!         println!("check your API key: {message}");
//!     }
//!     Err(other) => return Err(other.into()),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request fails local validation.
///
/// These failures are detected before any network activity and are never
/// retried or wrapped in a transport error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// The target URL is empty.
    #[error("Screenshot URL cannot be empty.")]
    EmptyUrl,
}

/// Unified error type for all Pxshot API operations.
///
/// Server-reported failures are mapped from the HTTP status code once per
/// failed attempt; after retries are exhausted the last observed failure is
/// surfaced unchanged in kind.
#[derive(Debug, Error)]
pub enum Error {
    /// The API key was rejected (HTTP 401).
    #[error("Authentication failed: {message}")]
    Authentication {
        /// Server-provided message, or a generic description.
        message: String,
    },

    /// The plan quota is exhausted (HTTP 403).
    #[error("Quota exceeded: {message}")]
    QuotaExceeded {
        /// Server-provided message, or a generic description.
        message: String,
    },

    /// The request was rejected by server-side validation (HTTP 422).
    #[error("Validation failed: {message}")]
    Validation {
        /// Server-provided message, or a generic description.
        message: String,
    },

    /// The rate limit was hit (HTTP 429).
    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        /// Server-provided message, or a generic description.
        message: String,
        /// Seconds to wait before retrying, from the `retry-after` header.
        /// `None` when the header was absent on the final attempt.
        retry_after: Option<u64>,
    },

    /// Any other non-success response (4xx/5xx).
    #[error("API error (status {status}): {message}")]
    Api {
        /// The HTTP status code of the response.
        status: u16,
        /// Server-provided message, or a generic description.
        message: String,
    },

    /// Network-level failure: timeout, connection refused, DNS.
    ///
    /// Never carries a status code; no response was received.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A successful response carried a malformed structured body.
    ///
    /// Fatal for the call; never retried.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request failed local validation before any network call.
    #[error(transparent)]
    Request(#[from] InvalidRequestError),
}

impl Error {
    /// Returns the HTTP status code that produced this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { .. } => Some(401),
            Self::QuotaExceeded { .. } => Some(403),
            Self::Validation { .. } => Some(422),
            Self::RateLimit { .. } => Some(429),
            Self::Api { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) | Self::Request(_) => None,
        }
    }

    /// Returns the `retry-after` value in seconds, for rate-limit errors.
    #[must_use]
    pub const fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}
