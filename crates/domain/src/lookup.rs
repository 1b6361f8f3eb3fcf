use super::RecordType;
use std::net::IpAddr;

/// Answer section of a successful query, reduced to what the probes inspect.
///
/// A `Lookup` is only produced when the resolver returned at least one record
/// of the requested type; an empty NOERROR response surfaces as
/// [`DomainError::NoAnswer`](crate::DomainError::NoAnswer) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub record_type: RecordType,
    pub addresses: Vec<IpAddr>,
    pub names: Vec<String>,
}

impl Lookup {
    pub fn from_addresses(record_type: RecordType, addresses: Vec<IpAddr>) -> Self {
        Self {
            record_type,
            addresses,
            names: vec![],
        }
    }

    pub fn from_names(record_type: RecordType, names: Vec<String>) -> Self {
        Self {
            record_type,
            addresses: vec![],
            names,
        }
    }

    pub fn contains_address(&self, address: &IpAddr) -> bool {
        self.addresses.contains(address)
    }

    pub fn len(&self) -> usize {
        self.addresses.len() + self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
