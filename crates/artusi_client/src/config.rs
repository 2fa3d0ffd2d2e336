//! Configuration for the recipe backend connection.

use artusi_error::ConfigError;
use std::time::Duration;

/// Base URL used when `ARTUSI_API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Per-call timeout in milliseconds used when `ARTUSI_REQUEST_TIMEOUT_MS`
/// is not set.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Configuration for the recipe backend connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientConfig {
    /// Base URL of the backend API (e.g., "http://localhost:8080/api")
    pub base_url: String,
    /// Per-call timeout; an elapsed timeout cancels the call
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `ARTUSI_API_BASE_URL` (default: "http://localhost:8080/api")
    /// - `ARTUSI_REQUEST_TIMEOUT_MS` (default: 10000)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the timeout variable is present but not a
    /// positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            std::env::var("ARTUSI_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = match std::env::var("ARTUSI_REQUEST_TIMEOUT_MS") {
            Ok(raw) => timeout_from_str(&raw)?,
            Err(_) => Duration::from_millis(DEFAULT_TIMEOUT_MS),
        };

        Ok(Self { base_url, timeout })
    }

    /// Set the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Parse a millisecond timeout value from its environment representation.
fn timeout_from_str(raw: &str) -> Result<Duration, ConfigError> {
    let millis: u64 = raw.trim().parse().map_err(|_| {
        ConfigError::new(format!(
            "ARTUSI_REQUEST_TIMEOUT_MS must be a positive integer, got '{raw}'"
        ))
    })?;
    if millis == 0 {
        return Err(ConfigError::new(
            "ARTUSI_REQUEST_TIMEOUT_MS must be greater than zero",
        ));
    }
    Ok(Duration::from_millis(millis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.timeout, Duration::from_millis(10_000));
    }

    #[test]
    fn with_timeout_overrides_default() {
        let config = ClientConfig::new("http://example.test/api")
            .with_timeout(Duration::from_secs(2));
        assert_eq!(config.timeout, Duration::from_secs(2));
    }

    #[test]
    fn timeout_parses_positive_millis() {
        assert_eq!(
            timeout_from_str("2500").unwrap(),
            Duration::from_millis(2500)
        );
        assert_eq!(timeout_from_str(" 100 ").unwrap(), Duration::from_millis(100));
    }

    #[test]
    fn timeout_rejects_garbage_and_zero() {
        assert!(timeout_from_str("abc").is_err());
        assert!(timeout_from_str("-5").is_err());
        assert!(timeout_from_str("0").is_err());
    }
}
