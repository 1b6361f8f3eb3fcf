use std::sync::Arc;
use tracing::info;
use vetted_dns_domain::CandidateSet;

use super::check_soa_tolerance::CheckSoaToleranceUseCase;
use super::verify_resolvers::VerifyResolversUseCase;
use crate::errors::PipelineError;
use crate::ports::{CandidateSource, ResolverList, ResolverListSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurationSummary {
    pub candidates: usize,
    pub validated: usize,
    /// `None` when the tolerance pass was not run.
    pub tolerant: Option<usize>,
}

/// Full pipeline: fetch, filter, verify, gate, publish, then the optional
/// tolerance pass over the published list.
pub struct CurateResolversUseCase {
    source: Arc<dyn CandidateSource>,
    sink: Arc<dyn ResolverListSink>,
    verify: VerifyResolversUseCase,
    tolerance: Option<CheckSoaToleranceUseCase>,
    min_reliability: f64,
    min_validated: usize,
}

impl CurateResolversUseCase {
    pub fn new(
        source: Arc<dyn CandidateSource>,
        sink: Arc<dyn ResolverListSink>,
        verify: VerifyResolversUseCase,
        min_reliability: f64,
        min_validated: usize,
    ) -> Self {
        Self {
            source,
            sink,
            verify,
            tolerance: None,
            min_reliability,
            min_validated,
        }
    }

    pub fn with_tolerance(mut self, tolerance: CheckSoaToleranceUseCase) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    pub async fn execute(&self) -> Result<CurationSummary, PipelineError> {
        info!(source = %self.source.describe(), "Loading candidate nameservers");
        let records = self.source.fetch().await.map_err(PipelineError::Source)?;

        let candidates = CandidateSet::build(&records, self.min_reliability);
        info!(
            records = records.len(),
            candidates = candidates.len(),
            min_reliability = self.min_reliability,
            "Loaded candidate nameservers"
        );
        if candidates.is_empty() {
            return Err(PipelineError::NoCandidates);
        }

        let report = self.verify.execute(&candidates).await;
        if report.cancelled {
            return Err(PipelineError::Cancelled);
        }

        // Zero validated is never enough, whatever the configured minimum.
        let required = self.min_validated.max(1);
        if report.validated.len() < required {
            return Err(PipelineError::InsufficientResults {
                found: report.validated.len(),
                required,
            });
        }

        self.sink
            .write(ResolverList::Validated, report.validated.addresses())
            .await
            .map_err(PipelineError::Output)?;

        let tolerant = match &self.tolerance {
            Some(tolerance) => {
                let tolerance_report = tolerance.execute(&report.validated).await;
                if tolerance_report.cancelled {
                    return Err(PipelineError::Cancelled);
                }
                self.sink
                    .write(ResolverList::SoaTolerant, tolerance_report.tolerant.addresses())
                    .await
                    .map_err(PipelineError::Output)?;
                Some(tolerance_report.tolerant.len())
            }
            None => None,
        };

        let summary = CurationSummary {
            candidates: candidates.len(),
            validated: report.validated.len(),
            tolerant,
        };
        info!(
            candidates = summary.candidates,
            validated = summary.validated,
            tolerant = ?summary.tolerant,
            "Curation finished"
        );
        Ok(summary)
    }
}
