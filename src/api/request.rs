//! Per-call request options.

use std::time::Duration;

use crate::traits::Headers;

/// Timeout applied when neither the call nor the client overrides it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for generation calls, which can take minutes server-side.
pub const GENERATION_TIMEOUT: Duration = Duration::from_secs(600);

/// Pause between retry attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Overrides for a single request.
///
/// `timeout: None` means the client's default timeout. Headers are merged
/// over the client defaults, matching names case-insensitively.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub timeout: Option<Duration>,
    pub retries: u32,
    pub retry_delay: Duration,
    pub headers: Headers,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            retries: 0,
            retry_delay: DEFAULT_RETRY_DELAY,
            headers: Headers::new(),
        }
    }
}

impl RequestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options used by the generation endpoints.
    pub fn generation() -> Self {
        Self::default().with_timeout(GENERATION_TIMEOUT)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RequestConfig::default();
        assert_eq!(config.timeout, None);
        assert_eq!(config.retries, 0);
        assert_eq!(config.retry_delay, Duration::from_secs(1));
        assert!(config.headers.is_empty());
    }

    #[test]
    fn test_generation_uses_long_timeout() {
        let config = RequestConfig::generation();
        assert_eq!(config.timeout, Some(Duration::from_secs(600)));
        assert_eq!(config.retries, 0);
    }

    #[test]
    fn test_builder() {
        let config = RequestConfig::new()
            .with_timeout(Duration::from_millis(50))
            .with_retries(2)
            .with_retry_delay(Duration::ZERO)
            .with_header("X-Trace", "1");
        assert_eq!(config.timeout, Some(Duration::from_millis(50)));
        assert_eq!(config.retries, 2);
        assert_eq!(config.retry_delay, Duration::ZERO);
        assert_eq!(config.headers.get("X-Trace").map(String::as_str), Some("1"));
    }
}
