use async_trait::async_trait;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use vetted_dns_domain::{DnsQuery, RecordType, ToleranceOutcome};

use super::probe::{bounded_lookup, Abandoned, Probe};
use crate::ports::ResolverConnector;

/// Single NS query against a zone that lacks an SOA record.
///
/// Any answer means tolerant; every error, including ones outside the
/// expected NXDOMAIN / no-answer / no-nameserver / timeout set, means intolerant.
pub struct SoaToleranceProbe {
    connector: Arc<dyn ResolverConnector>,
    query_timeout: Duration,
    test_domain: Arc<str>,
}

impl SoaToleranceProbe {
    pub fn new(
        connector: Arc<dyn ResolverConnector>,
        query_timeout: Duration,
        test_domain: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            connector,
            query_timeout,
            test_domain: test_domain.into(),
        }
    }
}

#[async_trait]
impl Probe for SoaToleranceProbe {
    type Outcome = ToleranceOutcome;

    async fn probe(&self, target: Ipv4Addr) -> ToleranceOutcome {
        let client = self.connector.connect(target, self.query_timeout);
        let query = DnsQuery::new(Arc::clone(&self.test_domain), RecordType::NS);

        match bounded_lookup(client.as_ref(), &query, self.query_timeout).await {
            Ok(lookup) if !lookup.is_empty() => ToleranceOutcome::Tolerant,
            Ok(_) => ToleranceOutcome::Intolerant("empty answer".to_string()),
            Err(e) => {
                debug!(server = %target, query = %query, error = %e, "Resolver failed check");
                ToleranceOutcome::Intolerant(e.to_string())
            }
        }
    }

    fn abandoned(&self, _target: Ipv4Addr, cause: Abandoned) -> ToleranceOutcome {
        ToleranceOutcome::Intolerant(cause.to_string())
    }

    fn name(&self) -> &'static str {
        "soa_tolerance"
    }
}
