//! Shared HTTP transport.

use crate::config::ClientConfig;
use domain_expiry_core::{ExpiryError, Result};
use reqwest::Client as HttpClient;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

/// Pooled HTTP transport used by the registry clients.
///
/// Cloning is cheap and shares the connection pool, so one transport can
/// back any number of clients.
#[derive(Clone)]
pub struct HttpTransport {
    inner: Arc<TransportInner>,
}

struct TransportInner {
    http: HttpClient,
    timeout: Duration,
    max_body_bytes: usize,
}

impl HttpTransport {
    /// Create a transport from client configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        HttpTransportBuilder::new()
            .timeout(config.timeout_duration())
            .user_agent(config.user_agent.clone())
            .max_body_bytes(config.max_body_bytes)
            .build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::new()
    }

    /// Perform a GET request with query parameters and return the body text.
    ///
    /// Cancelling `ctx` drops the in-flight request. Connection failures,
    /// timeouts, cancellation, non-success statuses and bodies larger than
    /// the configured limit all map to
    /// [`ExpiryError::Transport`] tagged with `registry` and `domain`.
    pub async fn get_text(
        &self,
        ctx: &CancellationToken,
        registry: &'static str,
        domain: &str,
        endpoint: &Url,
        params: &[(&str, &str)],
    ) -> Result<String> {
        let fail = |status: Option<u16>, message: String| ExpiryError::Transport {
            registry,
            domain: domain.to_string(),
            status,
            message,
        };

        let mut url = endpoint.clone();
        url.query_pairs_mut().extend_pairs(params);
        debug!(url = %url, "GET request");

        let request = async {
            let mut response = self
                .inner
                .http
                .get(url)
                .send()
                .await
                .map_err(|e| fail(None, self.describe(&e)))?;

            let status = response.status();
            if !status.is_success() {
                warn!(registry, domain, status = status.as_u16(), "registry returned an error status");
                return Err(fail(Some(status.as_u16()), format!("registry returned {status}")));
            }

            let limit = self.inner.max_body_bytes;
            let too_large = || fail(None, format!("response body exceeds {limit} bytes"));
            if response.content_length().is_some_and(|len| len > u64::try_from(limit).unwrap_or(u64::MAX)) {
                return Err(too_large());
            }

            let mut body = Vec::new();
            while let Some(chunk) = response
                .chunk()
                .await
                .map_err(|e| fail(None, self.describe(&e)))?
            {
                if body.len() + chunk.len() > limit {
                    return Err(too_large());
                }
                body.extend_from_slice(&chunk);
            }

            Ok(String::from_utf8_lossy(&body).into_owned())
        };

        tokio::select! {
            biased;
            () = ctx.cancelled() => {
                debug!(registry, domain, "request cancelled");
                Err(fail(None, "request cancelled".to_string()))
            }
            result = request => result,
        }
    }

    fn describe(&self, err: &reqwest::Error) -> String {
        if err.is_timeout() {
            format!("request timed out after {:?}", self.inner.timeout)
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else {
            err.to_string()
        }
    }
}

/// Builder for configuring an [`HttpTransport`]
pub struct HttpTransportBuilder {
    timeout: Duration,
    user_agent: String,
    max_body_bytes: usize,
}

impl HttpTransportBuilder {
    /// Create a builder with default settings
    #[must_use]
    pub fn new() -> Self {
        let defaults = ClientConfig::default();
        Self {
            timeout: defaults.timeout_duration(),
            user_agent: defaults.user_agent,
            max_body_bytes: defaults.max_body_bytes,
        }
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
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

    /// Build the transport
    pub fn build(self) -> Result<HttpTransport> {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| ExpiryError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(HttpTransport {
            inner: Arc::new(TransportInner {
                http,
                timeout: self.timeout,
                max_body_bytes: self.max_body_bytes,
            }),
        })
    }
}

impl Default for HttpTransportBuilder {
    fn default() -> Self {
        Self::new()
    }
}
