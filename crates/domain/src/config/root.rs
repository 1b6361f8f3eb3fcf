use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::output::OutputConfig;
use super::source::SourceConfig;
use super::tolerance::ToleranceConfig;
use super::verification::VerificationConfig;

const LOCAL_CONFIG_PATH: &str = "vetted-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/vetted-dns/config.toml";

/// Main configuration structure for Vetted DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Where candidate resolvers come from
    #[serde(default)]
    pub source: SourceConfig,

    /// Correctness probe and batch settings
    #[serde(default)]
    pub verification: VerificationConfig,

    /// Missing-SOA tolerance pass
    #[serde(default)]
    pub tolerance: ToleranceConfig,

    /// Result list locations
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. vetted-dns.toml in current directory
    /// 3. /etc/vetted-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(file) = overrides.candidates_file {
            self.source.file = Some(file);
        }
        if let Some(concurrency) = overrides.concurrency {
            self.verification.concurrency = concurrency;
        }
        if let Some(timeout) = overrides.query_timeout_ms {
            self.verification.query_timeout_ms = timeout;
        }
        if let Some(min) = overrides.min_validated {
            self.verification.min_validated = min;
        }
        if let Some(concurrency) = overrides.tolerance_concurrency {
            self.tolerance.concurrency = concurrency;
        }
        if let Some(timeout) = overrides.tolerance_timeout_ms {
            self.tolerance.query_timeout_ms = timeout;
        }
        if overrides.skip_tolerance {
            self.tolerance.enabled = false;
        }
        if let Some(path) = overrides.validated_path {
            self.output.validated_path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.verification.concurrency == 0 {
            return Err(ConfigError::Validation(
                "verification.concurrency must be at least 1".to_string(),
            ));
        }
        if self.verification.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "verification.query_timeout_ms cannot be 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.verification.min_reliability) {
            return Err(ConfigError::Validation(format!(
                "verification.min_reliability must be within [0, 1], got {}",
                self.verification.min_reliability
            )));
        }
        if self.verification.port == 0 {
            return Err(ConfigError::Validation(
                "verification.port cannot be 0".to_string(),
            ));
        }
        if self.tolerance.enabled {
            if self.tolerance.concurrency == 0 {
                return Err(ConfigError::Validation(
                    "tolerance.concurrency must be at least 1".to_string(),
                ));
            }
            if self.tolerance.query_timeout_ms == 0 {
                return Err(ConfigError::Validation(
                    "tolerance.query_timeout_ms cannot be 0".to_string(),
                ));
            }
            if self.tolerance.test_domain.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "tolerance.test_domain cannot be empty".to_string(),
                ));
            }
        }
        if self.source.file.is_none() && self.source.url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "No candidate source configured".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub candidates_file: Option<String>,
    pub concurrency: Option<usize>,
    pub query_timeout_ms: Option<u64>,
    pub min_validated: Option<usize>,
    pub tolerance_concurrency: Option<usize>,
    pub tolerance_timeout_ms: Option<u64>,
    pub skip_tolerance: bool,
    pub validated_path: Option<String>,
    pub log_level: Option<String>,
}
