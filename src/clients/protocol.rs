//! Shared request/response contract for the Pxshot API.
//!
//! Both client facades delegate here for everything that does not touch the
//! transport: endpoint paths, default headers, success decoding, and the
//! mapping of failed responses onto the error taxonomy. Keeping the contract
//! in one place guarantees the blocking and async clients cannot drift.

use serde::de::DeserializeOwned;

use crate::clients::errors::Error;
use crate::clients::response::ApiResponse;
use crate::config::PxshotConfig;
use crate::models::{ScreenshotResult, StoredScreenshot};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Screenshot capture endpoint (`POST`).
pub const SCREENSHOT_PATH: &str = "/v1/screenshot";

/// Usage statistics endpoint (`GET`).
pub const USAGE_PATH: &str = "/v1/usage";

/// Health check endpoint (`GET`).
pub const HEALTH_PATH: &str = "/health";

/// Builds the full URL for an endpoint path.
#[must_use]
pub fn endpoint_url(config: &PxshotConfig, path: &str) -> String {
    format!("{}{path}", config.base_url().as_ref())
}

/// Builds the `Authorization` header value for the configured credential.
#[must_use]
pub fn bearer_auth(config: &PxshotConfig) -> String {
    format!("Bearer {}", config.api_key().as_ref())
}

/// Builds the `User-Agent` header value.
#[must_use]
pub fn user_agent() -> String {
    let rust_version = env!("CARGO_PKG_RUST_VERSION");
    format!("Pxshot Rust SDK v{SDK_VERSION} | Rust {rust_version}")
}

/// Maps a non-success response onto the error taxonomy.
///
/// Consulted once per failed attempt, after the retry policy has decided
/// not to (or can no longer) retry. The message prefers the server's
/// `error.message` field when the body carries one.
#[must_use]
pub fn map_error(response: &ApiResponse) -> Error {
    let message = error_message(response);
    match response.status {
        401 => Error::Authentication { message },
        403 => Error::QuotaExceeded { message },
        422 => Error::Validation { message },
        429 => Error::RateLimit {
            message,
            retry_after: response.retry_after,
        },
        status => Error::Api { status, message },
    }
}

/// Extracts a human-readable message from an error response body.
///
/// The service reports errors as `{"error": {"message": string}}`; anything
/// else falls back to a generic description of the status.
fn error_message(response: &ApiResponse) -> String {
    serde_json::from_slice::<serde_json::Value>(&response.body)
        .ok()
        .as_ref()
        .and_then(|body| body.get("error"))
        .and_then(|error| error.get("message"))
        .and_then(serde_json::Value::as_str)
        .map_or_else(
            || format!("Request failed with status {}", response.status),
            ToString::to_string,
        )
}

/// Decodes a successful screenshot response.
///
/// The response content type is authoritative: a JSON body is parsed as a
/// [`StoredScreenshot`] reference, anything else is returned verbatim as
/// image bytes. A malformed JSON body is a fatal decode error for the call.
pub fn decode_screenshot(response: ApiResponse) -> Result<ScreenshotResult, Error> {
    if response.is_json() {
        let stored: StoredScreenshot = serde_json::from_slice(&response.body)?;
        Ok(ScreenshotResult::Stored(stored))
    } else {
        Ok(ScreenshotResult::Image(response.body))
    }
}

/// Decodes a successful JSON response body into a typed model.
pub fn decode_json<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, Error> {
    Ok(serde_json::from_slice(&response.body)?)
}
