use async_trait::async_trait;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use vetted_dns_domain::{
    DnsQuery, FailureReason, GarbageHostname, KnownGoodTarget, ProbeOutcome, RecordType,
};

use super::probe::{bounded_lookup, Abandoned, Probe};
use crate::ports::{ResolverClient, ResolverConnector};

/// Two-phase correctness check of a single resolver.
///
/// 1. The known-good host must resolve to its expected A and AAAA literals.
/// 2. A freshly generated, non-existent hostname must fail for both A and AAAA.
///
/// Phases run in order and the first failure decides the outcome.
pub struct ResolverProbe {
    connector: Arc<dyn ResolverConnector>,
    query_timeout: Duration,
    known_good: KnownGoodTarget,
}

impl ResolverProbe {
    pub fn new(connector: Arc<dyn ResolverConnector>, query_timeout: Duration) -> Self {
        Self {
            connector,
            query_timeout,
            known_good: KnownGoodTarget::default(),
        }
    }

    pub fn with_known_good(mut self, known_good: KnownGoodTarget) -> Self {
        self.known_good = known_good;
        self
    }

    pub async fn probe_with(
        &self,
        client: &dyn ResolverClient,
        garbage: &GarbageHostname,
    ) -> ProbeOutcome {
        if let Err(reason) = self.check_known_good(client).await {
            return ProbeOutcome::Failed(reason);
        }
        if self.answers_garbage(client, garbage).await {
            return ProbeOutcome::Failed(FailureReason::GarbageAnswer);
        }
        ProbeOutcome::Valid
    }

    async fn check_known_good(&self, client: &dyn ResolverClient) -> Result<(), FailureReason> {
        let expectations = [
            (RecordType::A, self.known_good.expected_v4()),
            (RecordType::AAAA, self.known_good.expected_v6()),
        ];

        for (record_type, expected) in expectations {
            let query = DnsQuery::new(self.known_good.host.as_str(), record_type);
            match bounded_lookup(client, &query, self.query_timeout).await {
                Ok(lookup) if lookup.contains_address(&expected) => {}
                Ok(lookup) => {
                    debug!(
                        server = %client.server(),
                        query = %query,
                        answers = ?lookup.addresses,
                        "Known-good answer missing expected address"
                    );
                    return Err(FailureReason::IncorrectAnswer);
                }
                Err(e) if e.is_timeout() => {
                    debug!(server = %client.server(), query = %query, "Known-good query timed out");
                    return Err(FailureReason::Timeout);
                }
                Err(e) => {
                    debug!(server = %client.server(), query = %query, error = %e, "Known-good query failed");
                    return Err(FailureReason::IncorrectAnswer);
                }
            }
        }
        Ok(())
    }

    async fn answers_garbage(&self, client: &dyn ResolverClient, garbage: &GarbageHostname) -> bool {
        for record_type in [RecordType::A, RecordType::AAAA] {
            let query = DnsQuery::new(garbage.as_str(), record_type);
            // Any error, timeouts included, is the expected result here.
            if let Ok(lookup) = bounded_lookup(client, &query, self.query_timeout).await {
                debug!(
                    server = %client.server(),
                    query = %query,
                    answers = lookup.len(),
                    "Resolver returned garbage data"
                );
                return true;
            }
        }
        false
    }
}

#[async_trait]
impl Probe for ResolverProbe {
    type Outcome = ProbeOutcome;

    async fn probe(&self, target: Ipv4Addr) -> ProbeOutcome {
        let client = self.connector.connect(target, self.query_timeout);
        let garbage = GarbageHostname::generate();
        self.probe_with(client.as_ref(), &garbage).await
    }

    fn abandoned(&self, _target: Ipv4Addr, cause: Abandoned) -> ProbeOutcome {
        match cause {
            Abandoned::Cancelled => ProbeOutcome::Failed(FailureReason::Cancelled),
            Abandoned::Crashed(_) => ProbeOutcome::Failed(FailureReason::Unexpected),
        }
    }

    fn name(&self) -> &'static str {
        "correctness"
    }
}
