use async_trait::async_trait;
use vetted_dns_domain::{DomainError, RawCandidate};

#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Raw feed entries. An unreadable feed is `Ok(vec![])`; an unreachable one is an error.
    async fn fetch(&self) -> Result<Vec<RawCandidate>, DomainError>;

    fn describe(&self) -> String;
}
