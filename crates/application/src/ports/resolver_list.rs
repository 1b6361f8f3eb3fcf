use async_trait::async_trait;
use std::collections::BTreeSet;
use std::fmt;
use std::net::Ipv4Addr;
use vetted_dns_domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolverList {
    Validated,
    SoaTolerant,
}

impl ResolverList {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolverList::Validated => "validated",
            ResolverList::SoaTolerant => "soa_tolerant",
        }
    }
}

impl fmt::Display for ResolverList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[async_trait]
pub trait ResolverListSink: Send + Sync {
    async fn write(
        &self,
        list: ResolverList,
        addresses: &BTreeSet<Ipv4Addr>,
    ) -> Result<(), DomainError>;
}

#[async_trait]
pub trait ResolverListSource: Send + Sync {
    async fn read(&self, list: ResolverList) -> Result<BTreeSet<Ipv4Addr>, DomainError>;
}
