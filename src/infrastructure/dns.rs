//! System DNS resolver backed by Tokio.

use async_trait::async_trait;
use tokio::net::lookup_host;
use tracing::debug;

use crate::domain::resolver::HostResolver;

/// Resolves hostnames with [`tokio::net::lookup_host`].
///
/// Performs one forward lookup per call with no address-family preference,
/// so either an A or an AAAA answer counts. No timeout is applied beyond
/// what the system resolver enforces.
#[derive(Debug, Clone, Default)]
pub struct DnsResolver;

impl DnsResolver {
    /// Creates a new resolver.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for DnsResolver {
    async fn resolves(&self, host: &str) -> bool {
        match lookup_host((host, 0)).await {
            Ok(mut addrs) => {
                let resolved = addrs.next().is_some();
                if !resolved {
                    debug!("DNS lookup for {} returned no addresses", host);
                }
                resolved
            }
            Err(e) => {
                debug!("DNS lookup for {} failed: {}", host, e);
                false
            }
        }
    }
}
