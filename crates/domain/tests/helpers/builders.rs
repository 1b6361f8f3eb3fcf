#![allow(dead_code)]
use vetted_dns_domain::RawCandidate;

pub struct RawCandidateBuilder {
    ip: Option<String>,
    reliability: Option<String>,
}

impl RawCandidateBuilder {
    pub fn new() -> Self {
        Self {
            ip: None,
            reliability: None,
        }
    }

    pub fn ip(mut self, ip: &str) -> Self {
        self.ip = Some(ip.to_string());
        self
    }

    pub fn reliability(mut self, reliability: &str) -> Self {
        self.reliability = Some(reliability.to_string());
        self
    }

    pub fn build(self) -> RawCandidate {
        RawCandidate {
            ip: self.ip,
            reliability: self.reliability,
        }
    }
}
