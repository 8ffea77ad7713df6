//! Per-source configuration value objects.

use std::time::Duration;

/// Exponential backoff policy for transient source failures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Retries after the first attempt (0 = a single attempt)
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub multiplier: f64,
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_backoff: Duration::from_millis(200),
            multiplier: 2.0,
            max_backoff: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }

    /// Delay before retry number `retry` (0-based): `initial * multiplier^retry`,
    /// capped at `max_backoff`.
    pub fn backoff_for(&self, retry: u32) -> Duration {
        let factor = self.multiplier.max(1.0).powi(retry.min(30) as i32);
        let millis = self.initial_backoff.as_millis() as f64 * factor;
        let capped = millis.min(self.max_backoff.as_millis() as f64);
        Duration::from_millis(capped as u64)
    }
}

/// Configuration handed to a source adapter for one query
#[derive(Clone, PartialEq)]
pub struct SourceAdapterConfig {
    /// Upper bound on the whole query, retries included
    pub timeout: Duration,
    pub retry: RetryPolicy,
    /// Static priority weight multiplied into each candidate's composite score
    pub priority_weight: f64,
    pub enabled: bool,
    /// Provider credential, if the provider needs one
    pub api_key: Option<String>,
    /// Most candidates the adapter should return
    pub max_results: usize,
}

impl Default for SourceAdapterConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            retry: RetryPolicy::default(),
            priority_weight: 1.0,
            enabled: true,
            api_key: None,
            max_results: 3,
        }
    }
}

impl SourceAdapterConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.priority_weight = weight;
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

impl std::fmt::Debug for SourceAdapterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceAdapterConfig")
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .field("priority_weight", &self.priority_weight)
            .field("enabled", &self.enabled)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("max_results", &self.max_results)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_grows_exponentially() {
        let policy = RetryPolicy {
            max_retries: 5,
            initial_backoff: Duration::from_millis(100),
            multiplier: 2.0,
            max_backoff: Duration::from_secs(10),
        };
        assert_eq!(policy.backoff_for(0), Duration::from_millis(100));
        assert_eq!(policy.backoff_for(1), Duration::from_millis(200));
        assert_eq!(policy.backoff_for(3), Duration::from_millis(800));
    }

    #[test]
    fn test_backoff_is_capped() {
        let policy = RetryPolicy {
            max_retries: 10,
            initial_backoff: Duration::from_millis(500),
            multiplier: 3.0,
            max_backoff: Duration::from_secs(2),
        };
        assert_eq!(policy.backoff_for(5), Duration::from_secs(2));
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let config = SourceAdapterConfig::default().with_api_key("secret-key");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_builder() {
        let config = SourceAdapterConfig::default()
            .with_timeout(Duration::ZERO)
            .with_weight(1.5)
            .disabled();
        assert!(config.timeout.is_zero());
        assert_eq!(config.priority_weight, 1.5);
        assert!(!config.enabled);
    }
}
