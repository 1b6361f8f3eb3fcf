use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use vetted_dns_application::ports::{
    CandidateSource, ResolverConnector, ResolverListSink, ResolverListSource,
};
use vetted_dns_domain::Config;
use vetted_dns_infrastructure::dns::UpstreamConnector;
use vetted_dns_infrastructure::output::{ListPaths, TextListSink, TextListSource};
use vetted_dns_infrastructure::sources::{JsonFileSource, PublicDnsInfoSource};

pub struct Adapters {
    pub connector: Arc<dyn ResolverConnector>,
    pub sink: Arc<dyn ResolverListSink>,
    pub list_source: Arc<dyn ResolverListSource>,
}

impl Adapters {
    pub fn new(config: &Config) -> Self {
        let paths = ListPaths::new(
            &config.output.validated_path,
            &config.output.soa_tolerant_path,
        );

        Self {
            connector: Arc::new(UpstreamConnector::new(config.verification.port)),
            sink: Arc::new(TextListSink::new(paths.clone())),
            list_source: Arc::new(TextListSource::new(paths)),
        }
    }

    pub fn candidate_source(config: &Config) -> anyhow::Result<Arc<dyn CandidateSource>> {
        if let Some(file) = &config.source.file {
            info!(path = %file, "Using local candidate file");
            return Ok(Arc::new(JsonFileSource::new(file)));
        }

        let cache_path: PathBuf = match &config.source.cache_path {
            Some(path) => path.into(),
            None => PublicDnsInfoSource::default_cache_path()?,
        };

        Ok(Arc::new(PublicDnsInfoSource::new(
            config.source.url.clone(),
            cache_path,
            Duration::from_secs(config.source.fetch_timeout),
        )?))
    }
}
