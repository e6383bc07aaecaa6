//! HTTP response representation shared by both client facades.
//!
//! This module provides the [`ApiResponse`] type: a transport-agnostic
//! snapshot of a completed HTTP exchange, with the Pxshot-specific headers
//! parsed out on construction.

use std::collections::HashMap;

use crate::models::RateLimitInfo;

/// A completed HTTP response from the Pxshot API.
///
/// Both the blocking and async facades lower their transport responses into
/// this shape, so the contract logic (decoding, error mapping, retry
/// decisions) is written once against it.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers, keys lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
    /// Seconds to wait before retrying (from the `retry-after` header).
    pub retry_after: Option<u64>,
    /// Rate-limit counters (from the `x-ratelimit-*` headers).
    pub rate_limit: Option<RateLimitInfo>,
}

impl ApiResponse {
    /// Creates a new `ApiResponse` with automatic header parsing.
    ///
    /// Parses the Pxshot-specific headers on construction:
    /// - `retry-after` -> `retry_after`
    /// - `x-ratelimit-limit` / `x-ratelimit-remaining` / `x-ratelimit-reset`
    ///   -> `rate_limit` (all three must parse for a snapshot to be recorded)
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        let retry_after = header_value(&headers, "retry-after").and_then(|v| v.parse().ok());
        let rate_limit = parse_rate_limit(&headers);

        Self {
            status,
            headers,
            body,
            retry_after,
            rate_limit,
        }
    }

    /// Lowers a reqwest header map into the shared representation.
    #[must_use]
    pub fn from_parts(status: u16, headers: &reqwest::header::HeaderMap, body: Vec<u8>) -> Self {
        let mut parsed: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            parsed.entry(key).or_default().push(value);
        }
        Self::new(status, parsed, body)
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns the `content-type` header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        header_value(&self.headers, "content-type")
    }

    /// Returns `true` if the response body is structured JSON.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type()
            .is_some_and(|ct| ct.split(';').next().unwrap_or("").trim() == "application/json")
    }
}

/// Returns the first value of the given lowercased header name.
fn header_value<'a>(headers: &'a HashMap<String, Vec<String>>, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|values| values.first())
        .map(String::as_str)
}

/// Parses the `x-ratelimit-*` headers into a [`RateLimitInfo`] snapshot.
///
/// Returns `None` unless all three headers are present and numeric, so a
/// partial snapshot is never recorded.
fn parse_rate_limit(headers: &HashMap<String, Vec<String>>) -> Option<RateLimitInfo> {
    let limit = header_value(headers, "x-ratelimit-limit")?.parse().ok()?;
    let remaining = header_value(headers, "x-ratelimit-remaining")?.parse().ok()?;
    let reset = header_value(headers, "x-ratelimit-reset")?.parse().ok()?;

    Some(RateLimitInfo {
        limit,
        remaining,
        reset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            map.entry((*key).to_string())
                .or_default()
                .push((*value).to_string());
        }
        map
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for status in [200, 201, 204, 299] {
            let response = ApiResponse::new(status, HashMap::new(), Vec::new());
            assert!(response.is_ok(), "expected is_ok() for status {status}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for status in [400, 401, 422, 429, 500, 503] {
            let response = ApiResponse::new(status, HashMap::new(), Vec::new());
            assert!(!response.is_ok(), "expected !is_ok() for status {status}");
        }
    }

    #[test]
    fn test_retry_after_parsing() {
        let response = ApiResponse::new(429, headers(&[("retry-after", "60")]), Vec::new());
        assert_eq!(response.retry_after, Some(60));
    }

    #[test]
    fn test_retry_after_absent_or_malformed_is_none() {
        let response = ApiResponse::new(429, HashMap::new(), Vec::new());
        assert_eq!(response.retry_after, None);

        let response = ApiResponse::new(429, headers(&[("retry-after", "soon")]), Vec::new());
        assert_eq!(response.retry_after, None);
    }

    #[test]
    fn test_rate_limit_headers_parsed() {
        let response = ApiResponse::new(
            200,
            headers(&[
                ("x-ratelimit-limit", "100"),
                ("x-ratelimit-remaining", "99"),
                ("x-ratelimit-reset", "1704067200"),
            ]),
            Vec::new(),
        );

        let info = response.rate_limit.unwrap();
        assert_eq!(info.limit, 100);
        assert_eq!(info.remaining, 99);
        assert_eq!(info.reset, 1_704_067_200);
    }

    #[test]
    fn test_partial_rate_limit_headers_are_ignored() {
        let response = ApiResponse::new(
            200,
            headers(&[("x-ratelimit-limit", "100")]),
            Vec::new(),
        );
        assert!(response.rate_limit.is_none());
    }

    #[test]
    fn test_content_type_detection() {
        let response = ApiResponse::new(
            200,
            headers(&[("content-type", "application/json; charset=utf-8")]),
            Vec::new(),
        );
        assert!(response.is_json());

        let response = ApiResponse::new(
            200,
            headers(&[("content-type", "image/png")]),
            Vec::new(),
        );
        assert!(!response.is_json());
        assert_eq!(response.content_type(), Some("image/png"));

        let response = ApiResponse::new(200, HashMap::new(), Vec::new());
        assert!(!response.is_json());
    }
}
