//! Client configuration types.

use serde::Deserialize;
use std::time::Duration;

/// Default request timeout, in milliseconds
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default cap on a registry response body
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Configuration shared by the registry clients.
///
/// Deserializable so callers can embed it in their own config files:
///
/// ```toml
/// base_url = "https://whois.example.test/search/"
/// timeout_ms = 10000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Overrides the registry's lookup endpoint (useful for testing)
    pub base_url: Option<String>,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Largest response body accepted, in bytes
    pub max_body_bytes: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: default_user_agent(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

fn default_user_agent() -> String {
    format!("domain-expiry/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Create a configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lookup endpoint
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set the largest accepted response body
    #[must_use]
    pub const fn max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = limit;
        self
    }

    /// Request timeout as a [`Duration`]
    #[must_use]
    pub const fn timeout_duration(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// The configured endpoint, or `default` when none is set
    #[must_use]
    pub fn endpoint_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.base_url.as_deref().unwrap_or(default)
    }
}
