//! Retry policy
//!
//! Retries are bounded twice: by attempt count and by the total time spent
//! waiting between attempts. Whichever bound is hit first ends the loop and
//! the last observed error is returned.

use crate::types::BackoffType;
use reqwest::Response;
use std::time::Duration;

/// Status codes retried when no explicit list is configured
pub const DEFAULT_RETRYABLE_STATUSES: &[u16] = &[429, 500, 502, 503, 504];

/// Retry configuration for transient failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of retries after the first attempt
    pub max_retries: u32,
    /// Maximum cumulative time spent on retries
    pub max_retry_duration: Duration,
    /// Initial delay for backoff
    pub initial_backoff: Duration,
    /// Maximum delay for a single backoff
    pub max_backoff: Duration,
    /// Type of backoff strategy
    pub backoff_type: BackoffType,
    /// Status codes that trigger a retry
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 4,
            max_retry_duration: Duration::from_secs(30),
            initial_backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(8),
            backoff_type: BackoffType::Exponential,
            retryable_statuses: DEFAULT_RETRYABLE_STATUSES.to_vec(),
        }
    }
}

impl RetryPolicy {
    /// Create a policy with the given bounds and default backoff
    pub fn new(max_retries: u32, max_retry_duration: Duration) -> Self {
        Self {
            max_retries,
            max_retry_duration,
            ..Default::default()
        }
    }

    /// Set backoff configuration
    #[must_use]
    pub fn backoff(mut self, backoff_type: BackoffType, initial: Duration, max: Duration) -> Self {
        self.backoff_type = backoff_type;
        self.initial_backoff = initial;
        self.max_backoff = max;
        self
    }

    /// Replace the list of retryable status codes
    #[must_use]
    pub fn retryable_statuses(mut self, statuses: impl Into<Vec<u16>>) -> Self {
        self.retryable_statuses = statuses.into();
        self
    }

    /// Check if a status code should be retried
    pub fn is_retryable_status(&self, status: u16) -> bool {
        self.retryable_statuses.contains(&status)
    }

    /// Calculate backoff delay for a given attempt
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        let delay = match self.backoff_type {
            BackoffType::Constant => self.initial_backoff,
            BackoffType::Linear => self.initial_backoff * (attempt + 1),
            BackoffType::Exponential => {
                let factor = 2u32.saturating_pow(attempt);
                self.initial_backoff.saturating_mul(factor)
            }
        };

        std::cmp::min(delay, self.max_backoff)
    }
}

/// Extract a numeric `Retry-After` header value
pub(crate) fn extract_retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

#[cfg(test)]
mod retry_tests {
    use super::*;

    #[test]
    fn test_retry_policy_default() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 4);
        assert_eq!(policy.max_retry_duration, Duration::from_secs(30));
        assert!(policy.is_retryable_status(503));
        assert!(!policy.is_retryable_status(501));
        assert!(!policy.is_retryable_status(404));
    }

    #[test]
    fn test_custom_statuses() {
        let policy = RetryPolicy::new(1, Duration::from_secs(1)).retryable_statuses(vec![409]);
        assert!(policy.is_retryable_status(409));
        assert!(!policy.is_retryable_status(503));
    }

    #[test]
    fn test_calculate_backoff_constant() {
        let policy = RetryPolicy::default().backoff(
            BackoffType::Constant,
            Duration::from_millis(100),
            Duration::from_secs(10),
        );
        assert_eq!(policy.calculate_backoff(0), Duration::from_millis(100));
        assert_eq!(policy.calculate_backoff(5), Duration::from_millis(100));
    }

    #[test]
    fn test_calculate_backoff_linear() {
        let policy = RetryPolicy::default().backoff(
            BackoffType::Linear,
            Duration::from_millis(100),
            Duration::from_secs(10),
        );
        assert_eq!(policy.calculate_backoff(0), Duration::from_millis(100));
        assert_eq!(policy.calculate_backoff(2), Duration::from_millis(300));
    }

    #[test]
    fn test_calculate_backoff_exponential_capped() {
        let policy = RetryPolicy::default().backoff(
            BackoffType::Exponential,
            Duration::from_millis(100),
            Duration::from_millis(500),
        );
        assert_eq!(policy.calculate_backoff(0), Duration::from_millis(100));
        assert_eq!(policy.calculate_backoff(2), Duration::from_millis(400));
        assert_eq!(policy.calculate_backoff(3), Duration::from_millis(500));
        assert_eq!(policy.calculate_backoff(40), Duration::from_millis(500));
    }
}
