use async_trait::async_trait;
use std::net::Ipv4Addr;
use std::time::Duration;
use vetted_dns_domain::{DnsQuery, DomainError, Lookup};

/// A resolver client bound to exactly one target server.
///
/// `lookup` returns `Ok` only when the answer section holds at least one
/// record of the requested type. NXDOMAIN, empty NOERROR, SERVFAIL/REFUSED,
/// timeouts and wire failures are all errors.
#[async_trait]
pub trait ResolverClient: Send + Sync {
    async fn lookup(&self, query: &DnsQuery) -> Result<Lookup, DomainError>;

    fn server(&self) -> Ipv4Addr;
}

/// Builds a fresh [`ResolverClient`] per probe; clients are never shared.
pub trait ResolverConnector: Send + Sync {
    fn connect(&self, server: Ipv4Addr, timeout: Duration) -> Box<dyn ResolverClient>;
}
