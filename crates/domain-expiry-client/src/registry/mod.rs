//! Registry clients.
//!
//! Each sub-module implements [`ExpiryResolver`](domain_expiry_core::ExpiryResolver)
//! for one registry: the suffixes it serves, its lookup endpoint and the
//! [`ExtractionRule`](crate::ExtractionRule) applied to its responses.

mod eurid;

pub use eurid::EuridClient;

use domain_expiry_core::{DomainName, ExpiryError, Result, SuffixSet};

/// Normalise `domain` and check it against the registry's suffixes
pub(crate) fn check_suffix(
    registry: &'static str,
    suffixes: &SuffixSet,
    domain: &str,
) -> Result<DomainName> {
    let unsupported = |suffix: &str| ExpiryError::UnsupportedDomain {
        registry,
        domain: domain.to_string(),
        suffix: suffix.to_string(),
    };

    let name = DomainName::parse(domain).ok_or_else(|| unsupported(""))?;
    if !suffixes.matches(&name) {
        return Err(unsupported(name.suffix()));
    }
    Ok(name)
}
