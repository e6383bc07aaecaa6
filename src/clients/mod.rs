//! Client types for Pxshot API communication.
//!
//! This module provides the two client facades and the shared contract
//! layer they are built on.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`AsyncPxshot`]: the asynchronous (Tokio) client
//! - [`Pxshot`]: the blocking client
//! - [`ScreenshotRequest`]: a capture request and its builder
//! - [`ApiResponse`]: the transport-agnostic response representation
//! - [`RetryPolicy`]: transient-failure classification and backoff delays
//! - [`Error`]: the operation error taxonomy
//!
//! Both facades share the contract implementation in [`protocol`]: payload
//! building, status-to-error mapping, and response decoding are written once
//! and cannot drift between execution models.
//!
//! # Retry Behavior
//!
//! Operations retry automatically for transient failures only:
//!
//! - **429 (Rate Limited)**: waits the `retry-after` header value, or
//!   exponential backoff starting at 1 second when the header is absent
//! - **Transport failures** (timeout, connection refused, DNS): exponential
//!   backoff starting at 1 second, capped at 30 seconds
//! - **Everything else** (401, 403, 422, other 4xx/5xx, decode failures):
//!   fails immediately without retry
//!
//! The retry budget defaults to 2 and is configured via
//! [`PxshotConfigBuilder::max_retries`](crate::PxshotConfigBuilder::max_retries).

mod async_client;
mod errors;
pub mod protocol;
mod request;
mod response;
mod retry;
mod sync_client;

pub use async_client::AsyncPxshot;
pub use errors::{Error, InvalidRequestError};
pub use request::{ImageFormat, ScreenshotRequest, ScreenshotRequestBuilder, WaitUntil};
pub use response::ApiResponse;
pub use retry::{RetryPolicy, BASE_DELAY, MAX_DELAY};
pub use sync_client::Pxshot;
