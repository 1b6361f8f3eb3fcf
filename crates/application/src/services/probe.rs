use async_trait::async_trait;
use std::fmt;
use std::net::Ipv4Addr;
use std::time::Duration;
use vetted_dns_domain::{DnsQuery, DomainError, Lookup};

use crate::ports::ResolverClient;

/// Why a probe produced no outcome of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Abandoned {
    /// The probe task panicked or was aborted.
    Crashed(String),
    /// The batch was cancelled first.
    Cancelled,
}

impl fmt::Display for Abandoned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Abandoned::Crashed(cause) => write!(f, "probe crashed: {}", cause),
            Abandoned::Cancelled => f.write_str("cancelled"),
        }
    }
}

/// One independent check against one resolver address.
///
/// `probe` must classify every failure itself; `abandoned` supplies the
/// outcome when the task running `probe` never returns one.
#[async_trait]
pub trait Probe: Send + Sync + 'static {
    type Outcome: Send + 'static;

    async fn probe(&self, target: Ipv4Addr) -> Self::Outcome;

    fn abandoned(&self, target: Ipv4Addr, cause: Abandoned) -> Self::Outcome;

    fn name(&self) -> &'static str;
}

/// Runs a lookup with the per-query deadline enforced on top of the client's own.
pub(crate) async fn bounded_lookup(
    client: &dyn ResolverClient,
    query: &DnsQuery,
    timeout: Duration,
) -> Result<Lookup, DomainError> {
    match tokio::time::timeout(timeout, client.lookup(query)).await {
        Ok(result) => result,
        Err(_) => Err(DomainError::QueryTimeout),
    }
}
