//! Vetted DNS Application Layer
pub mod errors;
pub mod ports;
pub mod services;
pub mod use_cases;

pub use errors::PipelineError;
