use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use vetted_dns_domain::CliOverrides;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "vetted-dns")]
#[command(version)]
#[command(about = "Curates public DNS resolvers that answer honestly")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch candidates, verify them and publish the resolver lists
    Curate {
        /// Local JSON feed instead of downloading one
        #[arg(long, value_name = "FILE")]
        candidates: Option<String>,

        /// Probes in flight at once
        #[arg(long)]
        concurrency: Option<usize>,

        /// Per-query timeout in milliseconds
        #[arg(long, value_name = "MS")]
        timeout_ms: Option<u64>,

        /// Fail when fewer resolvers than this validate
        #[arg(long, value_name = "N")]
        min_validated: Option<usize>,

        /// Do not produce the missing-SOA tolerant list
        #[arg(long)]
        skip_tolerance: bool,
    },

    /// Re-run the missing-SOA tolerance check over an existing validated list
    Soa {
        /// Validated list to read
        #[arg(long, value_name = "FILE")]
        input: Option<String>,

        /// Probes in flight at once
        #[arg(long)]
        concurrency: Option<usize>,

        /// Per-query timeout in milliseconds
        #[arg(long, value_name = "MS")]
        timeout_ms: Option<u64>,
    },
}

impl Command {
    fn overrides(&self, log_level: Option<String>) -> CliOverrides {
        match self {
            Command::Curate {
                candidates,
                concurrency,
                timeout_ms,
                min_validated,
                skip_tolerance,
            } => CliOverrides {
                candidates_file: candidates.clone(),
                concurrency: *concurrency,
                query_timeout_ms: *timeout_ms,
                min_validated: *min_validated,
                skip_tolerance: *skip_tolerance,
                log_level,
                ..Default::default()
            },
            Command::Soa {
                input,
                concurrency,
                timeout_ms,
            } => CliOverrides {
                tolerance_concurrency: *concurrency,
                tolerance_timeout_ms: *timeout_ms,
                validated_path: input.clone(),
                log_level,
                ..Default::default()
            },
        }
    }
}

fn cancel_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling outstanding probes");
            trigger.cancel();
        }
    });
    token
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = cli.command.overrides(cli.log_level.clone());
    let mut config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    if matches!(cli.command, Command::Soa { .. }) {
        config.tolerance.enabled = true;
    }
    config.validate()?;

    bootstrap::init_logging(&config);
    info!("Starting Vetted DNS v{}", env!("CARGO_PKG_VERSION"));
    match bootstrap::config_source(cli.config.as_deref()) {
        Some(path) => info!(path = %path, "Configuration loaded"),
        None => info!("No configuration file found, using defaults"),
    }

    let cancel = cancel_on_ctrl_c();

    match cli.command {
        Command::Curate { .. } => {
            let summary = di::UseCases::curate(&config, &cancel)?.execute().await?;
            info!(
                candidates = summary.candidates,
                validated = summary.validated,
                tolerant = ?summary.tolerant,
                "Done"
            );
        }
        Command::Soa { .. } => {
            let report = di::UseCases::refresh_tolerance(&config, &cancel)
                .execute()
                .await?;
            info!(
                checked = report.outcomes.len(),
                tolerant = report.tolerant.len(),
                "Done"
            );
        }
    }

    Ok(())
}
