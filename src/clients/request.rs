//! Screenshot request types for the Pxshot SDK.
//!
//! This module provides the [`ScreenshotRequest`] type and its builder for
//! describing a capture to the service.

use serde::Serialize;
use std::fmt;

use crate::clients::errors::InvalidRequestError;

/// Output image format for a screenshot.
///
/// Defaults to PNG on the server when not specified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Lossless PNG.
    Png,
    /// Lossy JPEG; honors the `quality` option.
    Jpeg,
    /// WebP; honors the `quality` option.
    Webp,
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Png => write!(f, "png"),
            Self::Jpeg => write!(f, "jpeg"),
            Self::Webp => write!(f, "webp"),
        }
    }
}

/// Page readiness condition to wait for before capturing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WaitUntil {
    /// Wait for the `load` event.
    Load,
    /// Wait for the `DOMContentLoaded` event.
    DomContentLoaded,
    /// Wait until the network has been idle.
    NetworkIdle,
}

/// A screenshot capture request.
///
/// Use [`ScreenshotRequest::builder`] to construct requests. Only the target
/// URL is required; every other option is omitted from the serialized
/// payload when unset, leaving the server's defaults in effect. Range and
/// enum correctness of the options is validated by the server, which keeps
/// this client from drifting when server-side rules change.
///
/// # Example
///
/// ```rust
/// use pxshot::{ImageFormat, ScreenshotRequest, WaitUntil};
///
/// let request = ScreenshotRequest::builder("https://example.com")
///     .format(ImageFormat::Jpeg)
///     .quality(80)
///     .width(1920)
///     .height(1080)
///     .full_page(true)
///     .wait_until(WaitUntil::NetworkIdle)
///     .build();
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScreenshotRequest {
    /// The URL of the page to capture.
    pub url: String,
    /// Output image format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ImageFormat>,
    /// Compression quality, 0–100. Meaningful only for lossy formats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,
    /// Viewport width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Viewport height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Capture the full scrollable page instead of the viewport.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_page: Option<bool>,
    /// Page readiness condition to wait for before capturing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_until: Option<WaitUntil>,
    /// CSS selector to wait for before capturing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for_selector: Option<String>,
    /// Additional wait in milliseconds before capturing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for_timeout: Option<u64>,
    /// Device scale factor (e.g. `2.0` for retina output).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_scale_factor: Option<f64>,
    /// Ask the service to persist the image and return a reference
    /// instead of inline bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<bool>,
}

impl ScreenshotRequest {
    /// Creates a request for the given URL with no options set.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            format: None,
            quality: None,
            width: None,
            height: None,
            full_page: None,
            wait_until: None,
            wait_for_selector: None,
            wait_for_timeout: None,
            device_scale_factor: None,
            store: None,
        }
    }

    /// Creates a new builder for constructing a `ScreenshotRequest`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pxshot::ScreenshotRequest;
    ///
    /// let request = ScreenshotRequest::builder("https://example.com")
    ///     .store(true)
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder(url: impl Into<String>) -> ScreenshotRequestBuilder {
        ScreenshotRequestBuilder::new(url)
    }

    /// Validates the request before it is sent.
    ///
    /// The only local check is that the URL is non-empty; syntactic URL
    /// validation is deferred to the server, which rejects malformed URLs
    /// with a validation error.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::EmptyUrl`] if the URL is empty or
    /// whitespace-only.
    pub fn verify(&self) -> Result<(), InvalidRequestError> {
        if self.url.trim().is_empty() {
            return Err(InvalidRequestError::EmptyUrl);
        }
        Ok(())
    }
}

/// Builder for constructing [`ScreenshotRequest`] instances.
///
/// Provides a fluent API over the optional capture settings.
#[derive(Debug)]
pub struct ScreenshotRequestBuilder {
    request: ScreenshotRequest,
}

impl ScreenshotRequestBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            request: ScreenshotRequest::new(url),
        }
    }

    /// Sets the output image format.
    #[must_use]
    pub const fn format(mut self, format: ImageFormat) -> Self {
        self.request.format = Some(format);
        self
    }

    /// Sets the compression quality (0–100, lossy formats only).
    #[must_use]
    pub const fn quality(mut self, quality: u8) -> Self {
        self.request.quality = Some(quality);
        self
    }

    /// Sets the viewport width in pixels.
    #[must_use]
    pub const fn width(mut self, width: u32) -> Self {
        self.request.width = Some(width);
        self
    }

    /// Sets the viewport height in pixels.
    #[must_use]
    pub const fn height(mut self, height: u32) -> Self {
        self.request.height = Some(height);
        self
    }

    /// Captures the full scrollable page instead of the viewport.
    #[must_use]
    pub const fn full_page(mut self, full_page: bool) -> Self {
        self.request.full_page = Some(full_page);
        self
    }

    /// Sets the page readiness condition to wait for.
    #[must_use]
    pub const fn wait_until(mut self, wait_until: WaitUntil) -> Self {
        self.request.wait_until = Some(wait_until);
        self
    }

    /// Waits for the given CSS selector before capturing.
    #[must_use]
    pub fn wait_for_selector(mut self, selector: impl Into<String>) -> Self {
        self.request.wait_for_selector = Some(selector.into());
        self
    }

    /// Waits an additional number of milliseconds before capturing.
    #[must_use]
    pub const fn wait_for_timeout(mut self, millis: u64) -> Self {
        self.request.wait_for_timeout = Some(millis);
        self
    }

    /// Sets the device scale factor.
    #[must_use]
    pub const fn device_scale_factor(mut self, factor: f64) -> Self {
        self.request.device_scale_factor = Some(factor);
        self
    }

    /// Asks the service to persist the image and return a reference.
    #[must_use]
    pub const fn store(mut self, store: bool) -> Self {
        self.request.store = Some(store);
        self
    }

    /// Builds the [`ScreenshotRequest`].
    #[must_use]
    pub fn build(self) -> ScreenshotRequest {
        self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_payload_contains_only_url() {
        let request = ScreenshotRequest::new("https://example.com");
        let payload = serde_json::to_value(&request).unwrap();

        assert_eq!(
            payload,
            serde_json::json!({ "url": "https://example.com" })
        );
    }

    #[test]
    fn test_set_fields_are_serialized() {
        let request = ScreenshotRequest::builder("https://example.com")
            .format(ImageFormat::Jpeg)
            .quality(80)
            .width(1920)
            .height(1080)
            .full_page(true)
            .wait_until(WaitUntil::NetworkIdle)
            .wait_for_selector(".content")
            .wait_for_timeout(5000)
            .device_scale_factor(2.0)
            .store(true)
            .build();

        let payload = serde_json::to_value(&request).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({
                "url": "https://example.com",
                "format": "jpeg",
                "quality": 80,
                "width": 1920,
                "height": 1080,
                "full_page": true,
                "wait_until": "networkidle",
                "wait_for_selector": ".content",
                "wait_for_timeout": 5000,
                "device_scale_factor": 2.0,
                "store": true,
            })
        );
    }

    #[test]
    fn test_wait_until_serializes_to_lowercase_names() {
        assert_eq!(
            serde_json::to_value(WaitUntil::Load).unwrap(),
            serde_json::json!("load")
        );
        assert_eq!(
            serde_json::to_value(WaitUntil::DomContentLoaded).unwrap(),
            serde_json::json!("domcontentloaded")
        );
        assert_eq!(
            serde_json::to_value(WaitUntil::NetworkIdle).unwrap(),
            serde_json::json!("networkidle")
        );
    }

    #[test]
    fn test_verify_rejects_empty_url() {
        let request = ScreenshotRequest::new("");
        assert!(matches!(
            request.verify(),
            Err(InvalidRequestError::EmptyUrl)
        ));

        let request = ScreenshotRequest::new("   ");
        assert!(matches!(
            request.verify(),
            Err(InvalidRequestError::EmptyUrl)
        ));
    }

    #[test]
    fn test_verify_accepts_non_empty_url() {
        let request = ScreenshotRequest::new("https://example.com");
        assert!(request.verify().is_ok());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(ImageFormat::Png.to_string(), "png");
        assert_eq!(ImageFormat::Jpeg.to_string(), "jpeg");
        assert_eq!(ImageFormat::Webp.to_string(), "webp");
    }
}
