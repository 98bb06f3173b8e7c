use thiserror::Error;

/// Result type alias for expiry lookups
pub type Result<T> = std::result::Result<T, ExpiryError>;

/// Coarse classification of an [`ExpiryError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The domain's suffix is not served by the client
    UnsupportedDomain,
    /// The registry could not be reached or answered with a failure
    Transport,
    /// The registry answered but the date field was not found
    Extraction,
    /// The date field was found but did not match the expected format
    DateParse,
    /// The client could not be constructed
    Config,
}

/// Errors that can occur while resolving a domain's expiry date
#[derive(Error, Debug)]
pub enum ExpiryError {
    /// The domain's suffix matches none of the accepted spellings
    #[error("{registry}: unsupported suffix {suffix:?} for domain {domain:?}")]
    UnsupportedDomain {
        /// Registry client that rejected the domain
        registry: &'static str,
        /// Domain as given by the caller
        domain: String,
        /// Suffix that failed the check (empty when none could be found)
        suffix: String,
    },

    /// The registry fetch did not complete
    #[error("{registry}: request for {domain:?} failed: {message}")]
    Transport {
        /// Registry client that issued the request
        registry: &'static str,
        /// Domain being resolved
        domain: String,
        /// HTTP status, when the registry answered with a non-success code
        status: Option<u16>,
        /// Underlying cause
        message: String,
    },

    /// The response did not contain the expected date field
    #[error("{registry}: no date field found in response for {domain:?}")]
    Extraction {
        /// Registry client that scraped the response
        registry: &'static str,
        /// Domain being resolved
        domain: String,
    },

    /// The extracted date text did not match the registry's format
    #[error("{registry}: could not parse date {value:?} for {domain:?} with format {format:?}: {reason}")]
    DateParse {
        /// Registry client that parsed the date
        registry: &'static str,
        /// Domain being resolved
        domain: String,
        /// Extracted text
        value: String,
        /// Expected `chrono` format string
        format: &'static str,
        /// Parser message
        reason: String,
    },

    /// Client construction failed
    #[error("configuration error: {0}")]
    Config(String),
}

impl ExpiryError {
    /// Returns the kind of failure
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedDomain { .. } => ErrorKind::UnsupportedDomain,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Extraction { .. } => ErrorKind::Extraction,
            Self::DateParse { .. } => ErrorKind::DateParse,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// Returns true if a caller may reasonably retry the lookup.
    ///
    /// Only transport failures qualify; the client itself never retries.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Returns the domain the failed call was about, if any
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        match self {
            Self::UnsupportedDomain { domain, .. }
            | Self::Transport { domain, .. }
            | Self::Extraction { domain, .. }
            | Self::DateParse { domain, .. } => Some(domain),
            Self::Config(_) => None,
        }
    }

    /// Returns the HTTP status code if the registry answered with one
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transport_is_retryable() {
        let transport = ExpiryError::Transport {
            registry: "eurid",
            domain: "example.eu".into(),
            status: Some(503),
            message: "service unavailable".into(),
        };
        let extraction = ExpiryError::Extraction {
            registry: "eurid",
            domain: "example.eu".into(),
        };

        assert!(transport.is_retryable());
        assert!(!extraction.is_retryable());
        assert_eq!(transport.status_code(), Some(503));
        assert_eq!(extraction.status_code(), None);
    }

    #[test]
    fn errors_carry_domain() {
        let err = ExpiryError::UnsupportedDomain {
            registry: "eurid",
            domain: "example.de".into(),
            suffix: "de".into(),
        };
        assert_eq!(err.kind(), ErrorKind::UnsupportedDomain);
        assert_eq!(err.domain(), Some("example.de"));
        assert!(err.to_string().contains("\"de\""));

        assert_eq!(ExpiryError::Config("bad".into()).domain(), None);
    }
}
