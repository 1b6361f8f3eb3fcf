use async_trait::async_trait;
use std::path::PathBuf;
use tracing::warn;
use vetted_dns_application::ports::CandidateSource;
use vetted_dns_domain::{DomainError, RawCandidate};

use super::feed::parse_candidate_records;

/// Reads the feed from a local file instead of downloading it.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CandidateSource for JsonFileSource {
    async fn fetch(&self) -> Result<Vec<RawCandidate>, DomainError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            DomainError::SourceUnavailable(format!("{}: {}", self.path.display(), e))
        })?;

        match parse_candidate_records(&bytes) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to load nameserver list");
                Ok(vec![])
            }
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
