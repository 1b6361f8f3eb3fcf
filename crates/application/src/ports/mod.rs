mod candidate_source;
mod resolver_client;
mod resolver_list;

pub use candidate_source::CandidateSource;
pub use resolver_client::{ResolverClient, ResolverConnector};
pub use resolver_list::{ResolverList, ResolverListSink, ResolverListSource};

// Re-export for convenience
pub use vetted_dns_domain::{DnsQuery, Lookup};
