//! EURid, the registry for `.eu` and its Cyrillic and Greek variants.
//!
//! The EURid WHOIS page shows only the registration date. `.eu` names are
//! registered for one year and renewed yearly on that anniversary, so the
//! expiry is the next anniversary after today.

use super::check_suffix;
use crate::config::ClientConfig;
use crate::extract::ExtractionRule;
use crate::transport::HttpTransport;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain_expiry_core::{DateKind, ExpiryError, ExpiryResolver, RenewalTerm, Result, SuffixSet};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, Instrument, Span};
use url::Url;

const NAME: &str = "eurid";

/// EURid WHOIS search page
const DEFAULT_BASE_URL: &str = "https://whois.eurid.eu/en/search/";

/// `.eu`, `.ею` and `.ευ`, each with its punycode form
const SUFFIXES: SuffixSet = SuffixSet::new(&["eu", "ею", "xn--e1a4c", "ευ", "xn--qxa6a"]);

const REGISTERED_PATTERN: &str =
    r#">Registered</div>\r?\n[ \t]*<div class="stat-value">([^<]+)<"#;

const DATE_FORMAT: &str = "%d %b %Y";

/// Client for the EURid WHOIS search page
#[derive(Clone)]
pub struct EuridClient {
    transport: HttpTransport,
    endpoint: Url,
    rule: Arc<ExtractionRule>,
    span: Span,
}

impl EuridClient {
    /// Create a client with its own HTTP transport
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Self::with_transport(HttpTransport::new(config)?, config)
    }

    /// Create a client sharing an existing transport
    pub fn with_transport(transport: HttpTransport, config: &ClientConfig) -> Result<Self> {
        let base = config.endpoint_or(DEFAULT_BASE_URL);
        let endpoint = Url::parse(base)
            .map_err(|e| ExpiryError::Config(format!("invalid base URL {base:?}: {e}")))?;
        let rule = ExtractionRule::new(
            REGISTERED_PATTERN,
            1,
            DATE_FORMAT,
            DateKind::Registered {
                term: RenewalTerm::ONE_YEAR,
            },
        )?;

        Ok(Self {
            transport,
            endpoint,
            rule: Arc::new(rule),
            span: tracing::debug_span!("registry", name = NAME, suffix = SUFFIXES.canonical()),
        })
    }

    /// Log lookups under the given span instead of the client's own
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Lookup endpoint in use
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn lookup(&self, ctx: &CancellationToken, domain: &str) -> Result<DateTime<Utc>> {
        debug!(domain, "trying eurid client");
        let name = check_suffix(NAME, &SUFFIXES, domain)?;

        let body = self
            .transport
            .get_text(ctx, NAME, domain, &self.endpoint, &[("domain", name.as_str())])
            .await?;

        let expires = self.rule.resolve(NAME, domain, &body, Utc::now())?;
        debug!(domain, expires = %expires, "domain will expire");
        Ok(expires)
    }
}

#[async_trait]
impl ExpiryResolver for EuridClient {
    fn name(&self) -> &'static str {
        NAME
    }

    fn supports(&self, domain: &str) -> bool {
        check_suffix(NAME, &SUFFIXES, domain).is_ok()
    }

    async fn expire_time(&self, ctx: &CancellationToken, domain: &str) -> Result<DateTime<Utc>> {
        self.lookup(ctx, domain).instrument(self.span.clone()).await
    }
}
