use std::collections::BTreeSet;
use std::net::Ipv4Addr;
use std::str::FromStr;

pub const DEFAULT_MIN_RELIABILITY: f64 = 0.99;

/// One feed entry with its fields rendered to text, before any validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCandidate {
    pub ip: Option<String>,
    pub reliability: Option<String>,
}

impl RawCandidate {
    pub fn new(ip: impl Into<String>, reliability: impl Into<String>) -> Self {
        Self {
            ip: Some(ip.into()),
            reliability: Some(reliability.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub address: Ipv4Addr,
    pub reliability: f64,
}

impl Candidate {
    /// Returns `None` for a missing or non-IPv4 address, or an unparsable reliability.
    ///
    /// `Ipv4Addr::from_str` only accepts canonical dotted-quad notation, so
    /// hostnames, IPv6 literals, short forms and leading zeros are all rejected.
    pub fn parse(raw: &RawCandidate) -> Option<Self> {
        let address = Ipv4Addr::from_str(raw.ip.as_deref()?.trim()).ok()?;
        let reliability = f64::from_str(raw.reliability.as_deref()?.trim()).ok()?;
        if reliability.is_nan() {
            return None;
        }
        Some(Self {
            address,
            reliability,
        })
    }

    pub fn meets(&self, min_reliability: f64) -> bool {
        self.reliability >= min_reliability
    }
}

/// Unique candidate addresses that passed static filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    addresses: BTreeSet<Ipv4Addr>,
}

impl CandidateSet {
    pub fn build<'a, I>(records: I, min_reliability: f64) -> Self
    where
        I: IntoIterator<Item = &'a RawCandidate>,
    {
        let addresses = records
            .into_iter()
            .filter_map(Candidate::parse)
            .filter(|candidate| candidate.meets(min_reliability))
            .map(|candidate| candidate.address)
            .collect();
        Self { addresses }
    }

    pub fn from_addresses(addresses: impl IntoIterator<Item = Ipv4Addr>) -> Self {
        Self {
            addresses: addresses.into_iter().collect(),
        }
    }

    pub fn addresses(&self) -> &BTreeSet<Ipv4Addr> {
        &self.addresses
    }

    pub fn contains(&self, address: &Ipv4Addr) -> bool {
        self.addresses.contains(address)
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ipv4Addr> {
        self.addresses.iter()
    }
}

impl IntoIterator for CandidateSet {
    type Item = Ipv4Addr;
    type IntoIter = std::collections::btree_set::IntoIter<Ipv4Addr>;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses.into_iter()
    }
}
