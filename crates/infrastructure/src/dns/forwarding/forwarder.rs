use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use crate::dns::transport::udp::UdpTransport;
use crate::dns::transport::DnsTransport;
use alotame_application::ports::DnsExchange;
use alotame_domain::{DnsAnswer, DomainError};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, warn};

/// Sends single A queries over UDP to whichever resolver the caller names.
#[derive(Debug, Default, Clone, Copy)]
pub struct DnsForwarder;

impl DnsForwarder {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a `host:port` resolver address, preferring the first result.
    pub async fn resolve_server(server: &str) -> Result<SocketAddr, DomainError> {
        if let Ok(addr) = server.parse::<SocketAddr>() {
            return Ok(addr);
        }

        let mut addrs = tokio::net::lookup_host(server)
            .await
            .map_err(|e| DomainError::InvalidResolverAddress(format!("{}: {}", server, e)))?;

        addrs.next().ok_or_else(|| {
            DomainError::InvalidResolverAddress(format!("{}: no addresses found", server))
        })
    }

    pub async fn query(
        &self,
        server_addr: SocketAddr,
        domain: &str,
        timeout: Duration,
    ) -> Result<DnsAnswer, DomainError> {
        let (id, request_bytes) = MessageBuilder::build_query_with_id(domain)?;

        let response = UdpTransport::new(server_addr)
            .send(&request_bytes, timeout)
            .await?;

        let actual = ResponseParser::response_id(&response.bytes)?;
        if actual != id {
            return Err(DomainError::ResponseIdMismatch {
                expected: id,
                actual,
            });
        }

        let answer = ResponseParser::parse(&response.bytes)?;
        if answer.truncated {
            warn!(
                server = %server_addr,
                domain,
                "Truncated UDP response, answers may be incomplete"
            );
        }
        debug!(
            server = %server_addr,
            domain,
            protocol = response.protocol_used,
            "Resolver answered"
        );
        Ok(answer)
    }
}

#[async_trait]
impl DnsExchange for DnsForwarder {
    async fn exchange(
        &self,
        server: &str,
        domain: &str,
        timeout: Duration,
    ) -> Result<DnsAnswer, DomainError> {
        // Name lookup counts against the same per-attempt deadline as the query
        let attempt = async {
            let server_addr = Self::resolve_server(server).await?;
            self.query(server_addr, domain, timeout).await
        };

        tokio::time::timeout(timeout, attempt)
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: server.to_string(),
            })?
    }
}
