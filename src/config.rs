//! Configuration for the management API client.

use std::time::Duration;

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for creating a [`BackupDrClient`](crate::BackupDrClient).
///
/// Use the builder pattern for ergonomic configuration:
///
/// ```
/// use backupdr::Config;
/// use std::time::Duration;
///
/// let config = Config::new("https://gbdr.example.test/actifio")
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-automation/2.1");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Google Backup and DR management API
    pub api_url: String,

    /// Per-request timeout (default: 30 seconds)
    pub timeout: Duration,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Config {
    /// Creates a new configuration for the given management API base URL.
    ///
    /// The URL is validated when the client is constructed, not here.
    ///
    /// # Example
    ///
    /// ```
    /// use backupdr::Config;
    ///
    /// let config = Config::new("https://gbdr.example.test/actifio");
    /// assert_eq!(config.api_url, "https://gbdr.example.test/actifio");
    /// ```
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("backupdr/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Sets the per-request timeout.
    ///
    /// This bounds every individual request the client makes, including the
    /// session handshake and lookups. There is no retry on timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = Config::new("https://example.test/actifio")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test-agent/0.1");

        assert_eq!(config.api_url, "https://example.test/actifio");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent/0.1");
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::new("https://example.test/actifio");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("backupdr/"));
    }
}
