//! Resolve when a domain's registration expires.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use domain_expiry::{ClientConfig, EuridClient, ExpiryResolver};
//! use domain_expiry::tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> domain_expiry::Result<()> {
//!     let client = EuridClient::new(&ClientConfig::default())?;
//!
//!     if client.supports("example.eu") {
//!         let expires = client
//!             .expire_time(&CancellationToken::new(), "example.eu")
//!             .await?;
//!         println!("example.eu expires at {expires}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/domain-expiry/0.1.0")]

// Re-export core types
pub use domain_expiry_core::*;

// Re-export clients
pub use domain_expiry_client::{
    registry, ClientConfig, EuridClient, ExtractionRule, HttpTransport, HttpTransportBuilder,
};

// Re-export runtime for convenience
pub use chrono;
pub use tokio;
pub use tokio_util;
