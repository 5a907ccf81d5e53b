use backon::ExponentialBuilder;
use std::time::Duration;

use crate::error::AdsError;

/// Default number of attempts per fetch
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
/// Default backoff factor, in seconds
pub const DEFAULT_BACKOFF_FACTOR: f64 = 0.2;

/// Which failures the fetch loop retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryOn {
    /// Every transport or non-2xx failure, 4xx included
    #[default]
    AnyFailure,
    /// Only timeouts, connect errors and 408/409/429/5xx
    Transient,
}

/// Bounded exponential-backoff policy for the fetch loop
///
/// Attempt `n` that fails (for `n < max_attempts`) is followed by a sleep of
/// `backoff_factor * 2^(n-1)` seconds. With the defaults that is
/// 0.2s, 0.4s, 0.8s, 1.6s before attempts 2 through 5.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,
    /// Base delay in seconds
    pub backoff_factor: f64,
    /// Failure classes that are retried
    pub retry_on: RetryOn,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
            retry_on: RetryOn::AnyFailure,
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with the given attempt count and factor, retrying any failure
    #[must_use]
    pub fn new(max_attempts: u32, backoff_factor: f64) -> Self {
        Self {
            max_attempts,
            backoff_factor,
            retry_on: RetryOn::AnyFailure,
        }
    }

    /// Sets which failures are retried
    #[must_use]
    pub const fn with_retry_on(mut self, retry_on: RetryOn) -> Self {
        self.retry_on = retry_on;
        self
    }

    /// Checks `max_attempts >= 1` and a finite, positive factor.
    ///
    /// # Errors
    ///
    /// Returns [`AdsError::Config`] describing the offending field.
    pub fn validate(&self) -> Result<(), AdsError> {
        if self.max_attempts == 0 {
            return Err(AdsError::Config("max_attempts must be at least 1".into()));
        }
        if !self.backoff_factor.is_finite() || self.backoff_factor <= 0.0 {
            return Err(AdsError::Config(format!(
                "backoff_factor must be a positive number, got {}",
                self.backoff_factor
            )));
        }
        Ok(())
    }

    /// Sleep after failed attempt `attempt` (1-based), saturating at [`Duration::MAX`].
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exp = i32::try_from(attempt.saturating_sub(1)).unwrap_or(i32::MAX);
        Duration::try_from_secs_f64(self.backoff_factor * 2f64.powi(exp)).unwrap_or(Duration::MAX)
    }

    /// Whether `err` should be followed by another attempt under this policy
    #[must_use]
    pub fn should_retry(&self, err: &AdsError) -> bool {
        match err {
            AdsError::Cancelled | AdsError::Config(_) | AdsError::InvalidRequest(_) => false,
            _ => match self.retry_on {
                RetryOn::AnyFailure => true,
                RetryOn::Transient => err.is_transient(),
            },
        }
    }

    /// Renders the policy as a jitter-free backon builder
    #[must_use]
    pub fn backoff_builder(&self) -> ExponentialBuilder {
        let retries = self.max_attempts.saturating_sub(1);
        ExponentialBuilder::default()
            .with_min_delay(self.delay_for(1))
            .with_max_delay(self.delay_for(retries.max(1)))
            .with_factor(2.0)
            .with_max_times(retries as usize)
    }
}

/// Determines if an HTTP status code should trigger a retry under [`RetryOn::Transient`]
///
/// Retries on: 408, 409, 429, and 5xx
#[must_use]
pub const fn is_retryable_status(code: u16) -> bool {
    matches!(code, 408 | 409 | 429 | 500..=599)
}
