pub mod bounded_verifier;
pub mod probe;
pub mod resolver_probe;
pub mod soa_tolerance_probe;

pub use bounded_verifier::BoundedVerifier;
pub use probe::{Abandoned, Probe};
pub use resolver_probe::ResolverProbe;
pub use soa_tolerance_probe::SoaToleranceProbe;
