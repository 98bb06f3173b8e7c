//! The registry client contract.

use crate::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// A registry-specific client able to tell when a domain expires.
///
/// Implementations hold no mutable state and may be shared between tasks.
/// Callers pick the implementation for a domain's suffix, usually by probing
/// [`supports`](Self::supports), which never touches the network.
#[async_trait]
pub trait ExpiryResolver: Send + Sync {
    /// Short registry identifier, used in logs and errors
    fn name(&self) -> &'static str;

    /// Returns true if the domain's suffix is served by this registry
    fn supports(&self, domain: &str) -> bool;

    /// Resolve the expiry date of `domain`.
    ///
    /// Rejects unsupported suffixes before any request is made. Issues a
    /// single request otherwise, with no retries. Cancelling `ctx` aborts the
    /// request and yields a transport error.
    async fn expire_time(&self, ctx: &CancellationToken, domain: &str) -> Result<DateTime<Utc>>;
}

#[async_trait]
impl<T: ExpiryResolver + ?Sized> ExpiryResolver for Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn supports(&self, domain: &str) -> bool {
        (**self).supports(domain)
    }

    async fn expire_time(&self, ctx: &CancellationToken, domain: &str) -> Result<DateTime<Utc>> {
        (**self).expire_time(ctx, domain).await
    }
}
