use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, registry, EnvFilter};
use vetted_dns_domain::Config;

/// `RUST_LOG` wins over the configured level. Output goes to stderr.
pub fn init_logging(config: &Config) {
    let _ = registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
