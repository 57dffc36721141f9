//! Retry utilities with exponential backoff for transport calls.

use std::time::Duration;
use tokio::time::{sleep, timeout};

use crate::sources::SourceError;

/// Configuration for retry behavior
#[derive(Debug, Clone, Copy)]
pub struct RetryConfig {
    /// Maximum number of attempts, the first one included
    pub max_attempts: u32,
    /// Initial delay between retries
    pub initial_delay: Duration,
    /// Maximum delay between retries
    pub max_delay: Duration,
    /// Multiplier for exponential backoff
    pub backoff_multiplier: f64,
    /// Upper bound for a single attempt
    pub attempt_timeout: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
            attempt_timeout: Duration::from_secs(60),
        }
    }
}

impl RetryConfig {
    /// Set the maximum number of attempts (at least one)
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Backoff before the attempt following attempt number `attempt` (1-based)
    fn backoff(&self, attempt: u32, transient: &TransientError) -> Duration {
        let exp = self.initial_delay.as_secs_f64()
            * self.backoff_multiplier.powf(attempt.saturating_sub(1) as f64);
        let delay = Duration::from_secs_f64(exp.min(self.max_delay.as_secs_f64()));
        delay.max(transient.recommended_delay()).min(self.max_delay)
    }
}

/// Transient errors that should trigger a retry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransientError {
    /// Network connectivity issues
    Network,
    /// Too many requests (429)
    RateLimit,
    /// Server error (5xx)
    ServerError,
    /// Request timeout
    Timeout,
}

impl TransientError {
    /// Classify a transport error; `None` means retrying will not help
    pub fn from_source_error(err: &SourceError) -> Option<Self> {
        match err {
            SourceError::Network(_) => Some(TransientError::Network),
            SourceError::Timeout => Some(TransientError::Timeout),
            SourceError::RateLimit => Some(TransientError::RateLimit),
            SourceError::Api { status } if *status >= 500 => Some(TransientError::ServerError),
            _ => None,
        }
    }

    /// Minimum delay before retrying after this error
    pub fn recommended_delay(&self) -> Duration {
        match self {
            // arXiv asks clients to wait a few seconds between calls
            TransientError::RateLimit => Duration::from_secs(3),
            TransientError::ServerError => Duration::from_secs(1),
            TransientError::Network | TransientError::Timeout => Duration::ZERO,
        }
    }
}

/// Execute an async operation, retrying transient failures with backoff.
///
/// Permanent errors are returned immediately; the last transient error is
/// returned once `max_attempts` is reached.
pub async fn with_retry<T, F, Fut>(config: RetryConfig, mut operation: F) -> Result<T, SourceError>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, SourceError>>,
{
    let mut attempts = 0;

    loop {
        attempts += 1;

        let error = match timeout(config.attempt_timeout, operation()).await {
            Ok(Ok(result)) => {
                if attempts > 1 {
                    tracing::info!("Request succeeded on attempt {}", attempts);
                }
                return Ok(result);
            }
            Ok(Err(error)) => error,
            Err(_) => SourceError::Timeout,
        };

        let Some(transient) = TransientError::from_source_error(&error) else {
            return Err(error);
        };

        if attempts >= config.max_attempts {
            tracing::warn!("Request failed after {} attempts: {}", attempts, error);
            return Err(error);
        }

        let delay = config.backoff(attempts, &transient);
        tracing::debug!(
            "Transient error on attempt {}: {:?}, retrying in {:?}",
            attempts,
            transient,
            delay
        );
        sleep(delay).await;
    }
}

/// Retry configuration used by [`crate::sources::ArxivSource`]
pub fn api_retry_config(max_attempts: u32) -> RetryConfig {
    RetryConfig::default().max_attempts(max_attempts)
}
