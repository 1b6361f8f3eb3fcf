use crate::probe_target::DEFAULT_SOA_TEST_DOMAIN;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToleranceConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Zone configured without an SOA record somewhere in its chain
    #[serde(default = "default_test_domain")]
    pub test_domain: String,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            concurrency: default_concurrency(),
            query_timeout_ms: default_query_timeout_ms(),
            test_domain: default_test_domain(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_concurrency() -> usize {
    5
}

fn default_query_timeout_ms() -> u64 {
    1000
}

fn default_test_domain() -> String {
    DEFAULT_SOA_TEST_DOMAIN.to_string()
}
