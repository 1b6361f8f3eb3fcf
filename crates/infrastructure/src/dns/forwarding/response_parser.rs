use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use std::net::IpAddr;
use tracing::debug;
use vetted_dns_domain::{DomainError, Lookup, RecordType};

/// Answer section of a response, reduced to the record data the probes read.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub addresses: Vec<IpAddr>,

    /// NS targets, in answer order.
    pub ns_names: Vec<String>,
}

impl DnsResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    /// Classifies the response for a query of `record_type`.
    ///
    /// Only records of the queried type count as an answer; a NOERROR
    /// response carrying none of them is [`DomainError::NoAnswer`].
    pub fn into_lookup(self, record_type: RecordType) -> Result<Lookup, DomainError> {
        if self.is_nxdomain() {
            return Err(DomainError::NxDomain);
        }
        if self.rcode != ResponseCode::NoError {
            return Err(DomainError::NoNameservers(
                ResponseParser::rcode_to_status(self.rcode).to_string(),
            ));
        }

        let lookup = match record_type {
            RecordType::A => Lookup::from_addresses(
                record_type,
                self.addresses.into_iter().filter(IpAddr::is_ipv4).collect(),
            ),
            RecordType::AAAA => Lookup::from_addresses(
                record_type,
                self.addresses.into_iter().filter(IpAddr::is_ipv6).collect(),
            ),
            RecordType::NS => Lookup::from_names(record_type, self.ns_names),
        };

        if lookup.is_empty() {
            return Err(DomainError::NoAnswer);
        }
        Ok(lookup)
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let mut addresses = Vec::new();
        let mut ns_names = Vec::new();

        for record in &message.answers {
            match &record.data {
                RData::A(a) => addresses.push(IpAddr::V4(a.0)),
                RData::AAAA(aaaa) => addresses.push(IpAddr::V6(aaaa.0)),
                RData::NS(ns) => ns_names.push(ns.0.to_utf8()),
                _ => {}
            }
        }

        let response = DnsResponse {
            id: message.id,
            rcode: message.response_code,
            truncated: message.truncation,
            addresses,
            ns_names,
        };

        debug!(
            rcode = ?response.rcode,
            addresses = response.addresses.len(),
            ns = response.ns_names.len(),
            truncated = response.truncated,
            "DNS response parsed"
        );

        Ok(response)
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
