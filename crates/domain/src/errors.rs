use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Failed to encode DNS query: {0}")]
    WireEncoding(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Domain not found (NXDOMAIN)")]
    NxDomain,

    #[error("No answer for the requested record type")]
    NoAnswer,

    #[error("No nameserver could answer the query ({0})")]
    NoNameservers(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Candidate source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, DomainError::QueryTimeout)
    }
}
