//! Retry policy for transient failures.
//!
//! A call is retried only for transient conditions: 429 responses and
//! transport-level failures. Everything else fails on first occurrence.
//! The policy only decides *whether* and *how long*; the facades own the
//! actual waiting so each execution model can await the delay its own way.

use std::time::Duration;

use crate::clients::errors::Error;

/// Starting delay for exponential backoff.
pub const BASE_DELAY: Duration = Duration::from_secs(1);

/// Ceiling on any single backoff delay.
pub const MAX_DELAY: Duration = Duration::from_secs(30);

/// Decides whether a failed attempt should be retried and after what delay.
///
/// `max_retries = n` allows `n` retries after the first attempt, so at most
/// `n + 1` attempts per call. A 429 carrying a `retry-after` header waits
/// exactly that many seconds; a 429 without one, or a transport failure,
/// backs off exponentially from [`BASE_DELAY`] up to [`MAX_DELAY`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
}

impl RetryPolicy {
    /// Creates a policy with the given retry budget.
    #[must_use]
    pub const fn new(max_retries: u32) -> Self {
        Self { max_retries }
    }

    /// Returns the configured retry budget.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns `true` if the failure class is likely to succeed on retry.
    #[must_use]
    pub const fn is_transient(error: &Error) -> bool {
        matches!(error, Error::RateLimit { .. } | Error::Transport(_))
    }

    /// Decides the delay before the next attempt, or `None` to give up.
    ///
    /// `attempt` is the zero-based index of the attempt that just failed,
    /// so the first failure consults the policy with `attempt = 0`.
    #[must_use]
    pub fn next_delay(&self, attempt: u32, error: &Error) -> Option<Duration> {
        if !Self::is_transient(error) || attempt >= self.max_retries {
            return None;
        }

        if let Error::RateLimit {
            retry_after: Some(seconds),
            ..
        } = error
        {
            return Some(Duration::from_secs(*seconds));
        }

        Some(Self::backoff_delay(attempt))
    }

    /// Exponential backoff: `BASE_DELAY * 2^attempt`, capped at [`MAX_DELAY`].
    #[must_use]
    fn backoff_delay(attempt: u32) -> Duration {
        let exponent = attempt.min(u32::BITS - 1);
        BASE_DELAY
            .saturating_mul(1_u32 << exponent)
            .min(MAX_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::InvalidRequestError;

    fn rate_limit(retry_after: Option<u64>) -> Error {
        Error::RateLimit {
            message: "Rate limit exceeded".to_string(),
            retry_after,
        }
    }

    /// Builds a real transport error without touching the network.
    fn transport() -> Error {
        let error = reqwest::Client::new().get("http://").build().unwrap_err();
        Error::Transport(error)
    }

    #[test]
    fn test_non_transient_errors_are_never_retried() {
        let policy = RetryPolicy::new(5);

        let auth = Error::Authentication {
            message: String::new(),
        };
        assert_eq!(policy.next_delay(0, &auth), None);

        let quota = Error::QuotaExceeded {
            message: String::new(),
        };
        assert_eq!(policy.next_delay(0, &quota), None);

        let validation = Error::Validation {
            message: String::new(),
        };
        assert_eq!(policy.next_delay(0, &validation), None);

        let api = Error::Api {
            status: 500,
            message: String::new(),
        };
        assert_eq!(policy.next_delay(0, &api), None);

        let request = Error::Request(InvalidRequestError::EmptyUrl);
        assert_eq!(policy.next_delay(0, &request), None);
    }

    #[test]
    fn test_rate_limit_is_transient() {
        assert!(RetryPolicy::is_transient(&rate_limit(None)));
        assert!(RetryPolicy::is_transient(&rate_limit(Some(60))));
    }

    #[test]
    fn test_transport_failure_is_transient() {
        assert!(RetryPolicy::is_transient(&transport()));
    }

    #[test]
    fn test_transport_failure_uses_backoff_until_budget_runs_out() {
        let policy = RetryPolicy::new(2);
        let error = transport();

        assert_eq!(policy.next_delay(0, &error), Some(Duration::from_secs(1)));
        assert_eq!(policy.next_delay(1, &error), Some(Duration::from_secs(2)));
        assert_eq!(policy.next_delay(2, &error), None);
    }

    #[test]
    fn test_retry_after_header_sets_the_delay() {
        let policy = RetryPolicy::new(2);
        assert_eq!(
            policy.next_delay(0, &rate_limit(Some(60))),
            Some(Duration::from_secs(60))
        );
        // Header wins over backoff on later attempts too
        assert_eq!(
            policy.next_delay(1, &rate_limit(Some(7))),
            Some(Duration::from_secs(7))
        );
    }

    #[test]
    fn test_backoff_doubles_and_caps() {
        let policy = RetryPolicy::new(10);
        let error = rate_limit(None);

        assert_eq!(policy.next_delay(0, &error), Some(Duration::from_secs(1)));
        assert_eq!(policy.next_delay(1, &error), Some(Duration::from_secs(2)));
        assert_eq!(policy.next_delay(2, &error), Some(Duration::from_secs(4)));
        assert_eq!(policy.next_delay(3, &error), Some(Duration::from_secs(8)));
        assert_eq!(policy.next_delay(4, &error), Some(Duration::from_secs(16)));
        assert_eq!(policy.next_delay(5, &error), Some(Duration::from_secs(30)));
        assert_eq!(policy.next_delay(9, &error), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_budget_exhaustion_gives_up() {
        let policy = RetryPolicy::new(1);
        let error = rate_limit(None);

        assert!(policy.next_delay(0, &error).is_some());
        assert_eq!(policy.next_delay(1, &error), None);
    }

    #[test]
    fn test_zero_budget_never_retries() {
        let policy = RetryPolicy::new(0);
        assert_eq!(policy.next_delay(0, &rate_limit(Some(60))), None);
    }
}
