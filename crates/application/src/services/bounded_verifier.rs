use futures::stream::{self, StreamExt};
use std::collections::{BTreeSet, HashMap};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::probe::{Abandoned, Probe};

/// Runs one probe per distinct target with at most `concurrency` in flight.
///
/// Every probe runs on its own task, so a panic in one target is reported
/// as that target's abandoned outcome and never reaches the others. The
/// returned map holds exactly one entry per distinct input address.
pub struct BoundedVerifier {
    concurrency: usize,
    cancel: Option<CancellationToken>,
}

impl BoundedVerifier {
    pub fn new(concurrency: usize) -> Self {
        Self {
            concurrency: concurrency.max(1),
            cancel: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    pub async fn run<P, I>(&self, probe: Arc<P>, targets: I) -> HashMap<Ipv4Addr, P::Outcome>
    where
        P: Probe,
        I: IntoIterator<Item = Ipv4Addr>,
    {
        let targets: BTreeSet<Ipv4Addr> = targets.into_iter().collect();
        if targets.is_empty() {
            return HashMap::new();
        }

        debug!(
            probe = probe.name(),
            targets = targets.len(),
            concurrency = self.concurrency,
            "Starting verification batch"
        );

        let cancel = self.cancel.clone().unwrap_or_default();

        stream::iter(targets)
            .map(|target| {
                let probe = Arc::clone(&probe);
                let cancel = cancel.clone();
                async move {
                    let outcome = Self::run_one(probe, target, cancel).await;
                    (target, outcome)
                }
            })
            .buffer_unordered(self.concurrency)
            .collect::<HashMap<_, _>>()
            .await
    }

    async fn run_one<P: Probe>(
        probe: Arc<P>,
        target: Ipv4Addr,
        cancel: CancellationToken,
    ) -> P::Outcome {
        if cancel.is_cancelled() {
            return probe.abandoned(target, Abandoned::Cancelled);
        }

        let task_probe = Arc::clone(&probe);
        let mut handle = tokio::spawn(async move { task_probe.probe(target).await });

        tokio::select! {
            joined = &mut handle => match joined {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(probe = probe.name(), server = %target, error = %e, "Probe task failed");
                    probe.abandoned(target, Abandoned::Crashed(e.to_string()))
                }
            },
            _ = cancel.cancelled() => {
                handle.abort();
                probe.abandoned(target, Abandoned::Cancelled)
            }
        }
    }
}
