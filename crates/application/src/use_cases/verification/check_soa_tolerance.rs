use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, info, warn};
use vetted_dns_domain::{ToleranceOutcome, ToleranceSet, ValidatedSet};

use crate::services::{BoundedVerifier, SoaToleranceProbe};

#[derive(Debug, Clone, Default)]
pub struct ToleranceReport {
    pub outcomes: HashMap<Ipv4Addr, ToleranceOutcome>,
    pub tolerant: ToleranceSet,
    pub cancelled: bool,
}

/// Classifies validated resolvers by how they handle a zone without an SOA.
///
/// Only addresses already in the [`ValidatedSet`] are ever probed.
pub struct CheckSoaToleranceUseCase {
    probe: Arc<SoaToleranceProbe>,
    verifier: BoundedVerifier,
}

impl CheckSoaToleranceUseCase {
    pub fn new(probe: Arc<SoaToleranceProbe>, verifier: BoundedVerifier) -> Self {
        Self { probe, verifier }
    }

    pub async fn execute(&self, validated: &ValidatedSet) -> ToleranceReport {
        info!(
            resolvers = validated.len(),
            concurrency = self.verifier.concurrency(),
            "Checking missing-SOA tolerance"
        );

        let outcomes = self
            .verifier
            .run(Arc::clone(&self.probe), validated.iter().copied())
            .await;

        for (server, outcome) in &outcomes {
            debug!(server = %server, outcome = %outcome, "Tolerance checked");
        }

        let tolerant = ToleranceSet::from_addresses(
            outcomes
                .iter()
                .filter(|(_, outcome)| outcome.is_tolerant())
                .map(|(server, _)| *server),
        );

        info!(
            tolerant = tolerant.len(),
            checked = outcomes.len(),
            "Tolerance check complete"
        );

        let cancelled = self.verifier.is_cancelled();
        if cancelled {
            warn!("Tolerance check cancelled, results are incomplete");
        }

        ToleranceReport {
            outcomes,
            tolerant,
            cancelled,
        }
    }
}
