//! Vetted DNS Domain Layer
pub mod candidate;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod lookup;
pub mod outcome;
pub mod probe_target;
pub mod random_label;
pub mod resolver_set;

pub use candidate::{Candidate, CandidateSet, RawCandidate};
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::DnsQuery;
pub use dns_record::RecordType;
pub use errors::DomainError;
pub use lookup::Lookup;
pub use outcome::{FailureReason, ProbeOutcome, ToleranceOutcome};
pub use probe_target::{GarbageHostname, KnownGoodTarget};
pub use random_label::{random_label, random_label_with, LabelAlphabet};
pub use resolver_set::{ToleranceSet, ValidatedSet};
