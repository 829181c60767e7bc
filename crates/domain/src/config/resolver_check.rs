use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timeout and retry settings for resolver queries, as read from configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverCheckConfig {
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl ResolverCheckConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            max_retries: self.max_retries,
            retry_delay: Duration::from_millis(self.retry_delay_ms),
        }
    }
}

impl Default for ResolverCheckConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: default_request_timeout_ms(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

fn default_request_timeout_ms() -> u64 {
    3000
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    3000
}

/// Per-attempt timeout, retry budget and delay handed to the query engine.
///
/// A query makes at most `max_retries + 1` attempts; only timeouts are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub request_timeout: Duration,
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl RetryPolicy {
    pub fn new(request_timeout: Duration, max_retries: u32, retry_delay: Duration) -> Self {
        Self {
            request_timeout,
            max_retries,
            retry_delay,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        ResolverCheckConfig::default().retry_policy()
    }
}
