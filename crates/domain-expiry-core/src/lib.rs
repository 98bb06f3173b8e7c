//! Core types and traits for domain expiry lookups.
//!
//! This crate provides the foundations shared by every registry client:
//!
//! - **Contract**: the [`ExpiryResolver`] trait implemented once per registry
//! - **Types**: [`DomainName`], [`SuffixSet`], [`DateKind`], [`RenewalTerm`]
//! - **Rollover**: [`next_anniversary`] for registries that only publish a
//!   registration date
//! - **Errors**: [`ExpiryError`] and its [`ErrorKind`]
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_expiry_core::{ExpiryResolver, Result};
//! use tokio_util::sync::CancellationToken;
//!
//! async fn report(client: &dyn ExpiryResolver, domain: &str) -> Result<()> {
//!     let expires = client.expire_time(&CancellationToken::new(), domain).await?;
//!     println!("{domain} expires at {expires}");
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/domain-expiry-core/0.1.0")]

mod error;
mod resolver;
mod rollover;
pub mod types;

pub use error::{ErrorKind, ExpiryError, Result};
pub use resolver::ExpiryResolver;
pub use rollover::next_anniversary;
pub use types::*;
