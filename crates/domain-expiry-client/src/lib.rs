//! HTTP registry clients resolving domain expiry dates.
//!
//! Each registry client implements [`ExpiryResolver`]; see [`registry`] for
//! the available ones. Clients share an [`HttpTransport`] and are configured
//! through [`ClientConfig`].

#![doc(html_root_url = "https://docs.rs/domain-expiry-client/0.1.0")]

mod config;
mod extract;
pub mod registry;
mod transport;

pub use config::ClientConfig;
pub use domain_expiry_core::{ExpiryError, ExpiryResolver, Result};
pub use extract::ExtractionRule;
pub use registry::EuridClient;
pub use transport::{HttpTransport, HttpTransportBuilder};
