use async_trait::async_trait;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;
use tracing::debug;
use vetted_dns_application::ports::ResolverClient;
use vetted_dns_domain::{DnsQuery, DomainError, Lookup};

use super::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use super::transport::{DnsTransport, TcpTransport, UdpTransport};

/// Stub resolver bound to exactly one upstream server.
///
/// Queries go out over UDP and are retried once over TCP when the UDP
/// answer comes back truncated. There are no retries otherwise.
pub struct UpstreamResolverClient {
    server: Ipv4Addr,
    server_addr: SocketAddr,
    timeout: Duration,
}

impl UpstreamResolverClient {
    pub fn new(server: Ipv4Addr, port: u16, timeout: Duration) -> Self {
        Self {
            server,
            server_addr: SocketAddr::V4(SocketAddrV4::new(server, port)),
            timeout,
        }
    }

    async fn exchange(&self, query: &DnsQuery) -> Result<DnsResponse, DomainError> {
        let (id, request) = MessageBuilder::build_query(&query.domain, &query.record_type)?;

        let udp = UdpTransport::new(self.server_addr);
        let response = self.send_over(&udp, id, &request).await?;
        if !response.truncated {
            return Ok(response);
        }

        debug!(server = %self.server_addr, query = %query, "Truncated UDP answer, retrying over TCP");
        let tcp = TcpTransport::new(self.server_addr);
        self.send_over(&tcp, id, &request).await
    }

    async fn send_over(
        &self,
        transport: &dyn DnsTransport,
        id: u16,
        request: &[u8],
    ) -> Result<DnsResponse, DomainError> {
        let raw = transport.send(request, self.timeout).await?;
        let response = ResponseParser::parse(&raw.bytes)?;

        if response.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "{} response ID {} does not match query ID {}",
                raw.protocol_used, response.id, id
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl ResolverClient for UpstreamResolverClient {
    async fn lookup(&self, query: &DnsQuery) -> Result<Lookup, DomainError> {
        let response = self.exchange(query).await?;
        let result = response.into_lookup(query.record_type);

        match &result {
            Ok(lookup) => {
                debug!(server = %self.server_addr, query = %query, answers = lookup.len(), "Lookup answered")
            }
            Err(e) => debug!(server = %self.server_addr, query = %query, error = %e, "Lookup failed"),
        }
        result
    }

    fn server(&self) -> Ipv4Addr {
        self.server
    }
}
