use std::sync::Arc;
use tracing::info;
use vetted_dns_domain::ValidatedSet;

use super::check_soa_tolerance::{CheckSoaToleranceUseCase, ToleranceReport};
use crate::errors::PipelineError;
use crate::ports::{ResolverList, ResolverListSink, ResolverListSource};

/// Re-runs the tolerance pass over a previously published validated list.
pub struct RefreshToleranceListUseCase {
    list_source: Arc<dyn ResolverListSource>,
    sink: Arc<dyn ResolverListSink>,
    tolerance: CheckSoaToleranceUseCase,
}

impl RefreshToleranceListUseCase {
    pub fn new(
        list_source: Arc<dyn ResolverListSource>,
        sink: Arc<dyn ResolverListSink>,
        tolerance: CheckSoaToleranceUseCase,
    ) -> Self {
        Self {
            list_source,
            sink,
            tolerance,
        }
    }

    pub async fn execute(&self) -> Result<ToleranceReport, PipelineError> {
        let addresses = self
            .list_source
            .read(ResolverList::Validated)
            .await
            .map_err(PipelineError::Source)?;

        let validated = ValidatedSet::from_addresses(addresses);
        info!(resolvers = validated.len(), "Loaded validated nameservers");
        if validated.is_empty() {
            return Err(PipelineError::NoCandidates);
        }

        let report = self.tolerance.execute(&validated).await;
        if report.cancelled {
            return Err(PipelineError::Cancelled);
        }

        self.sink
            .write(ResolverList::SoaTolerant, report.tolerant.addresses())
            .await
            .map_err(PipelineError::Output)?;

        Ok(report)
    }
}
