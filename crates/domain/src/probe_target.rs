use crate::random_label::{random_label, random_label_with, LabelAlphabet};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Hostname whose A and AAAA answers are operator-controlled and stable.
pub const KNOWN_GOOD_HOST: &str = "dns.google";
pub const KNOWN_GOOD_IPV4: Ipv4Addr = Ipv4Addr::new(8, 8, 8, 8);
pub const KNOWN_GOOD_IPV6: Ipv6Addr = Ipv6Addr::new(0x2001, 0x4860, 0x4860, 0, 0, 0, 0, 0x8888);

pub const GARBAGE_PREFIX: &str = "www-m";
pub const GARBAGE_SUFFIX: &str = "com";
pub const GARBAGE_FIRST_LABEL_LEN: usize = 9;
pub const GARBAGE_SECOND_LABEL_LEN: usize = 10;

/// Domain whose delegation chain deliberately omits an SOA record.
pub const DEFAULT_SOA_TEST_DOMAIN: &str = "hackplanet.earth";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownGoodTarget {
    pub host: String,
    pub ipv4: Ipv4Addr,
    pub ipv6: Ipv6Addr,
}

impl KnownGoodTarget {
    pub fn expected_v4(&self) -> IpAddr {
        IpAddr::V4(self.ipv4)
    }

    pub fn expected_v6(&self) -> IpAddr {
        IpAddr::V6(self.ipv6)
    }
}

impl Default for KnownGoodTarget {
    fn default() -> Self {
        Self {
            host: KNOWN_GOOD_HOST.to_string(),
            ipv4: KNOWN_GOOD_IPV4,
            ipv6: KNOWN_GOOD_IPV6,
        }
    }
}

/// A hostname that cannot exist: `www-m.<9 letters>.<10 letters>.com`.
///
/// Generated fresh for every probe so a hostile resolver cannot special-case it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GarbageHostname(String);

impl GarbageHostname {
    pub fn generate() -> Self {
        Self::compose(
            random_label(GARBAGE_FIRST_LABEL_LEN, LabelAlphabet::Letters),
            random_label(GARBAGE_SECOND_LABEL_LEN, LabelAlphabet::Letters),
        )
    }

    pub fn generate_with(rng: &mut fastrand::Rng) -> Self {
        Self::compose(
            random_label_with(rng, GARBAGE_FIRST_LABEL_LEN, LabelAlphabet::Letters),
            random_label_with(rng, GARBAGE_SECOND_LABEL_LEN, LabelAlphabet::Letters),
        )
    }

    fn compose(first: String, second: String) -> Self {
        Self(format!(
            "{}.{}.{}.{}",
            GARBAGE_PREFIX, first, second, GARBAGE_SUFFIX
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GarbageHostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
