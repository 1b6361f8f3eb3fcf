use std::net::Ipv4Addr;
use std::time::Duration;
use vetted_dns_application::ports::{ResolverClient, ResolverConnector};

use super::client::UpstreamResolverClient;

const DNS_PORT: u16 = 53;

/// Hands out a fresh [`UpstreamResolverClient`] per probe; nothing is shared between them.
#[derive(Debug, Clone, Copy)]
pub struct UpstreamConnector {
    port: u16,
}

impl UpstreamConnector {
    pub fn new(port: u16) -> Self {
        Self { port }
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl Default for UpstreamConnector {
    fn default() -> Self {
        Self::new(DNS_PORT)
    }
}

impl ResolverConnector for UpstreamConnector {
    fn connect(&self, server: Ipv4Addr, timeout: Duration) -> Box<dyn ResolverClient> {
        Box::new(UpstreamResolverClient::new(server, self.port, timeout))
    }
}
