use std::collections::{BTreeMap, HashMap};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, info, warn};
use vetted_dns_domain::{CandidateSet, FailureReason, ProbeOutcome, ValidatedSet};

use crate::services::{BoundedVerifier, ResolverProbe};

#[derive(Debug, Clone, Default)]
pub struct VerificationReport {
    pub outcomes: HashMap<Ipv4Addr, ProbeOutcome>,
    pub validated: ValidatedSet,
    /// Set when the batch was cancelled; `outcomes` then holds `Cancelled` failures.
    pub cancelled: bool,
}

impl VerificationReport {
    pub fn failures_by_reason(&self) -> BTreeMap<&'static str, usize> {
        let mut tally = BTreeMap::new();
        for reason in self.outcomes.values().filter_map(ProbeOutcome::failure_reason) {
            *tally.entry(reason.as_str()).or_insert(0) += 1;
        }
        tally
    }

    pub fn count(&self, reason: FailureReason) -> usize {
        self.outcomes
            .values()
            .filter(|outcome| outcome.failure_reason() == Some(reason))
            .count()
    }
}

/// Probes every candidate for correctness and keeps the ones that pass.
pub struct VerifyResolversUseCase {
    probe: Arc<ResolverProbe>,
    verifier: BoundedVerifier,
}

impl VerifyResolversUseCase {
    pub fn new(probe: Arc<ResolverProbe>, verifier: BoundedVerifier) -> Self {
        Self { probe, verifier }
    }

    pub async fn execute(&self, candidates: &CandidateSet) -> VerificationReport {
        info!(
            candidates = candidates.len(),
            concurrency = self.verifier.concurrency(),
            "Validating nameservers"
        );

        let outcomes = self
            .verifier
            .run(Arc::clone(&self.probe), candidates.iter().copied())
            .await;

        for (server, outcome) in &outcomes {
            debug!(server = %server, outcome = %outcome, "Resolver checked");
        }

        let validated = ValidatedSet::from_addresses(
            outcomes
                .iter()
                .filter(|(_, outcome)| outcome.is_valid())
                .map(|(server, _)| *server),
        );

        let report = VerificationReport {
            outcomes,
            validated,
            cancelled: self.verifier.is_cancelled(),
        };

        info!(
            validated = report.validated.len(),
            checked = report.outcomes.len(),
            failures = ?report.failures_by_reason(),
            "Validation complete"
        );

        if report.cancelled {
            warn!("Validation cancelled, results are incomplete");
        } else if report.validated.is_empty() {
            warn!("Unable to reach any nameservers, check network connectivity");
        }

        report
    }
}
