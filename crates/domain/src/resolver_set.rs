use std::collections::BTreeSet;
use std::net::Ipv4Addr;

macro_rules! resolver_set {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            addresses: BTreeSet<Ipv4Addr>,
        }

        impl $name {
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
    };
}

resolver_set!(
    /// Candidates whose correctness probe came back `Valid`.
    ValidatedSet
);

resolver_set!(
    /// Validated resolvers that answer for a zone lacking an SOA record.
    ToleranceSet
);
