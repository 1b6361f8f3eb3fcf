use super::Adapters;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use vetted_dns_application::ports::ResolverConnector;
use vetted_dns_application::services::{BoundedVerifier, ResolverProbe, SoaToleranceProbe};
use vetted_dns_application::use_cases::{
    CheckSoaToleranceUseCase, CurateResolversUseCase, RefreshToleranceListUseCase,
    VerifyResolversUseCase,
};
use vetted_dns_domain::Config;

pub struct UseCases;

impl UseCases {
    pub fn curate(
        config: &Config,
        cancel: &CancellationToken,
    ) -> anyhow::Result<CurateResolversUseCase> {
        let adapters = Adapters::new(config);
        let source = Adapters::candidate_source(config)?;

        let probe = ResolverProbe::new(
            Arc::clone(&adapters.connector),
            Duration::from_millis(config.verification.query_timeout_ms),
        );
        let verify = VerifyResolversUseCase::new(
            Arc::new(probe),
            BoundedVerifier::new(config.verification.concurrency)
                .with_cancellation(cancel.clone()),
        );

        let mut curate = CurateResolversUseCase::new(
            source,
            adapters.sink,
            verify,
            config.verification.min_reliability,
            config.verification.min_validated,
        );
        if config.tolerance.enabled {
            curate = curate.with_tolerance(Self::tolerance(config, &adapters.connector, cancel));
        }
        Ok(curate)
    }

    pub fn refresh_tolerance(
        config: &Config,
        cancel: &CancellationToken,
    ) -> RefreshToleranceListUseCase {
        let adapters = Adapters::new(config);
        let tolerance = Self::tolerance(config, &adapters.connector, cancel);
        RefreshToleranceListUseCase::new(adapters.list_source, adapters.sink, tolerance)
    }

    fn tolerance(
        config: &Config,
        connector: &Arc<dyn ResolverConnector>,
        cancel: &CancellationToken,
    ) -> CheckSoaToleranceUseCase {
        let probe = SoaToleranceProbe::new(
            Arc::clone(connector),
            Duration::from_millis(config.tolerance.query_timeout_ms),
            config.tolerance.test_domain.as_str(),
        );
        CheckSoaToleranceUseCase::new(
            Arc::new(probe),
            BoundedVerifier::new(config.tolerance.concurrency).with_cancellation(cancel.clone()),
        )
    }
}
