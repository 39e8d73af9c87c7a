//! Hostname resolution contract.

use async_trait::async_trait;

/// Answers whether a hostname currently resolves to at least one address.
///
/// Used as a best-effort liveness signal when accepting a URL. A positive
/// answer says nothing about HTTP reachability.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::DnsResolver`] - System resolver via Tokio
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Performs a single forward lookup for `host`.
    ///
    /// Any failure (unknown name, timeout, I/O error, empty answer) is `false`.
    async fn resolves(&self, host: &str) -> bool;
}
