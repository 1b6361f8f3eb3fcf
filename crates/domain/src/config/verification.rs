use crate::candidate::DEFAULT_MIN_RELIABILITY;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Probes in flight at once
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Per-query timeout in milliseconds
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    #[serde(default = "default_min_reliability")]
    pub min_reliability: f64,

    /// Fewer validated resolvers than this fails the run
    #[serde(default = "default_min_validated")]
    pub min_validated: usize,

    /// DNS port probed on every candidate
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            query_timeout_ms: default_query_timeout_ms(),
            min_reliability: default_min_reliability(),
            min_validated: default_min_validated(),
            port: default_port(),
        }
    }
}

fn default_concurrency() -> usize {
    100
}

fn default_query_timeout_ms() -> u64 {
    1000
}

fn default_min_reliability() -> f64 {
    DEFAULT_MIN_RELIABILITY
}

fn default_min_validated() -> usize {
    1000
}

fn default_port() -> u16 {
    53
}
