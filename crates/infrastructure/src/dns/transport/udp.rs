//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). A truncated reply is returned to the
//! caller unchanged; there is no TCP fallback.

use super::{DnsTransport, TransportResponse};
use alotame_domain::DomainError;
use async_trait::async_trait;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    fn map_io_error(&self, e: io::Error) -> DomainError {
        let server = self.server_addr.to_string();
        match e.kind() {
            io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused { server },
            io::ErrorKind::ConnectionReset => DomainError::TransportConnectionReset { server },
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => {
                DomainError::TransportTimeout { server }
            }
            _ => DomainError::IoError(format!("{}: {}", server, e)),
        }
    }

    fn timeout_error(&self) -> DomainError {
        DomainError::TransportTimeout {
            server: self.server_addr.to_string(),
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.map_io_error(e))?;

        // Connected so ICMP port-unreachable surfaces as ConnectionRefused
        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| self.map_io_error(e))?;

        let exchange = async {
            let bytes_sent = socket.send(message_bytes).await?;
            debug!(server = %self.server_addr, bytes_sent, "UDP query sent");

            let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
            let bytes_received = socket.recv(&mut recv_buf).await?;
            recv_buf.truncate(bytes_received);
            Ok::<_, io::Error>(recv_buf)
        };

        let bytes = tokio::time::timeout(timeout, exchange)
            .await
            .map_err(|_| self.timeout_error())?
            .map_err(|e| self.map_io_error(e))?;

        debug!(
            server = %self.server_addr,
            bytes_received = bytes.len(),
            "UDP response received"
        );

        Ok(TransportResponse {
            bytes,
            protocol_used: "UDP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
