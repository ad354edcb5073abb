//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::time::Duration;

/// Default timeout for requests forwarded to the backend
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the students REST backend
    /// Example: http://localhost:3001
    pub backend_url: Option<String>,

    /// Timeout for proxied backend requests
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("BACKEND_URL").ok(),
            std::env::var("REQUEST_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(backend_url: Option<String>, timeout_secs: Option<String>) -> Self {
        let backend_url = backend_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        let timeout_secs = timeout_secs
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            backend_url,
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Check if the backend proxy is configured
    pub fn has_backend(&self) -> bool {
        self.backend_url.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // No env var reads here, so these stay thread safe

    #[test]
    fn test_backend_url_is_normalised() {
        let config = Config::from_values(Some(" http://localhost:3001/ ".into()), None);
        assert_eq!(config.backend_url.as_deref(), Some("http://localhost:3001"));
        assert!(config.has_backend());
    }

    #[test]
    fn test_blank_backend_url_is_unset() {
        let config = Config::from_values(Some("   ".into()), None);
        assert!(!config.has_backend());

        let config = Config::from_values(None, None);
        assert!(config.backend_url.is_none());
    }

    #[test]
    fn test_timeout_parsing() {
        let config = Config::from_values(None, Some("5".into()));
        assert_eq!(config.request_timeout, Duration::from_secs(5));

        for bad in ["", "zero", "-1", "0"] {
            let config = Config::from_values(None, Some(bad.into()));
            assert_eq!(
                config.request_timeout,
                Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
            );
        }
    }
}
