use async_trait::async_trait;
use etcetera::BaseStrategy;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};
use vetted_dns_application::ports::CandidateSource;
use vetted_dns_domain::{DomainError, RawCandidate};

use super::feed::parse_candidate_records;

const CACHE_DIR: &str = "public-dns-servers";
const CACHE_FILE: &str = "public_dns_servers.json";

/// The public-dns.info feed, downloaded over HTTP into an on-disk cache.
///
/// A failed download falls back to whatever the cache already holds. A
/// cached file that does not parse is removed so the next run starts clean.
pub struct PublicDnsInfoSource {
    url: String,
    cache_path: PathBuf,
    client: reqwest::Client,
}

impl PublicDnsInfoSource {
    pub fn new(
        url: impl Into<String>,
        cache_path: impl Into<PathBuf>,
        fetch_timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(fetch_timeout)
            .build()
            .map_err(|e| DomainError::SourceUnavailable(format!("HTTP client: {}", e)))?;

        Ok(Self {
            url: url.into(),
            cache_path: cache_path.into(),
            client,
        })
    }

    /// `<user cache dir>/public-dns-servers/public_dns_servers.json`
    pub fn default_cache_path() -> Result<PathBuf, DomainError> {
        let strategy = etcetera::base_strategy::choose_base_strategy()
            .map_err(|e| DomainError::IoError(format!("no home directory: {}", e)))?;
        Ok(strategy.cache_dir().join(CACHE_DIR).join(CACHE_FILE))
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    async fn download(&self) -> Result<(), DomainError> {
        let mut response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DomainError::SourceUnavailable(e.to_string()))?;

        let status = response.status();
        info!(url = %self.url, status = status.as_u16(), "Download result");
        if !status.is_success() {
            return Err(DomainError::SourceUnavailable(format!("HTTP {}", status)));
        }

        if let Some(parent) = self.cache_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::IoError(e.to_string()))?;
        }

        // Stream into a sibling file so a broken transfer never clobbers a good cache.
        let partial = self.cache_path.with_extension("json.part");
        let mut file = tokio::fs::File::create(&partial)
            .await
            .map_err(|e| DomainError::IoError(e.to_string()))?;

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| DomainError::SourceUnavailable(e.to_string()))?
        {
            file.write_all(&chunk)
                .await
                .map_err(|e| DomainError::IoError(e.to_string()))?;
        }
        file.flush()
            .await
            .map_err(|e| DomainError::IoError(e.to_string()))?;
        drop(file);

        tokio::fs::rename(&partial, &self.cache_path)
            .await
            .map_err(|e| DomainError::IoError(e.to_string()))
    }
}

#[async_trait]
impl CandidateSource for PublicDnsInfoSource {
    async fn fetch(&self) -> Result<Vec<RawCandidate>, DomainError> {
        if let Err(e) = self.download().await {
            warn!(url = %self.url, error = %e, "Failed to download nameserver list");
            if !tokio::fs::try_exists(&self.cache_path).await.unwrap_or(false) {
                return Err(DomainError::SourceUnavailable(format!(
                    "{} could not be downloaded and no cached copy exists at {}",
                    self.url,
                    self.cache_path.display()
                )));
            }
            info!(path = %self.cache_path.display(), "Using cached nameserver list");
        }

        let bytes = tokio::fs::read(&self.cache_path)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", self.cache_path.display(), e)))?;

        match parse_candidate_records(&bytes) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(
                    path = %self.cache_path.display(),
                    error = %e,
                    "Failed to load nameserver list, removing cached copy"
                );
                if let Err(e) = tokio::fs::remove_file(&self.cache_path).await {
                    warn!(path = %self.cache_path.display(), error = %e, "Failed to remove cached list");
                }
                Ok(vec![])
            }
        }
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
