use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_validated_path")]
    pub validated_path: String,

    #[serde(default = "default_soa_tolerant_path")]
    pub soa_tolerant_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            validated_path: default_validated_path(),
            soa_tolerant_path: default_soa_tolerant_path(),
        }
    }
}

fn default_validated_path() -> String {
    "nameservers.txt".to_string()
}

fn default_soa_tolerant_path() -> String {
    "nameservers-no_soa_friendly.txt".to_string()
}
