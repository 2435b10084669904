//! API configuration.
//!
//! Resolved once at startup and handed to whatever talks to the API; nothing
//! below this module reads the environment.

use std::time::Duration;

use crate::error::{FinexusError, FinexusResult};

/// Environment variable selecting the API base URL.
pub const API_URL_ENV: &str = "FINEXUS_API_URL";

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the finance API lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    timeout: Duration,
}

impl ApiConfig {
    /// Create a config for `base_url`, which must be an http(s) URL.
    ///
    /// Trailing slashes are dropped so endpoint paths can always start with `/`.
    pub fn new(base_url: impl AsRef<str>) -> FinexusResult<Self> {
        let trimmed = base_url.as_ref().trim().trim_end_matches('/');
        let rest = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .ok_or_else(|| {
                FinexusError::Config(format!(
                    "API base URL must start with http:// or https:// (got '{}')",
                    trimmed
                ))
            })?;
        if rest.is_empty() {
            return Err(FinexusError::Config("API base URL has no host".to_string()));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Loads the base URL from `FINEXUS_API_URL` (default: `http://localhost:8000`).
    pub fn from_env() -> FinexusResult<Self> {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self::new(base_url)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL for a resource path such as `/assets`.
    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
