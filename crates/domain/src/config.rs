pub mod errors;
pub mod logging;
pub mod output;
pub mod root;
pub mod source;
pub mod tolerance;
pub mod verification;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use output::OutputConfig;
pub use root::{CliOverrides, Config};
pub use source::SourceConfig;
pub use tolerance::ToleranceConfig;
pub use verification::VerificationConfig;
