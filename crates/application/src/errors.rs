use thiserror::Error;
use vetted_dns_domain::DomainError;

/// Batch-level failures; per-resolver problems never surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("No candidate nameservers passed static filtering")]
    NoCandidates,

    #[error("Not enough nameservers retrieved: {found} validated, {required} required")]
    InsufficientResults { found: usize, required: usize },

    #[error("Candidate source failed: {0}")]
    Source(DomainError),

    #[error("Verification cancelled before every resolver was checked")]
    Cancelled,

    #[error("Failed to publish resolver list: {0}")]
    Output(DomainError),
}
