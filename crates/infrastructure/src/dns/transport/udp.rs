//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is over a connected socket, so datagrams from any
//! other source are discarded by the kernel. Replies whose ID does not match
//! the query are skipped until the deadline.

use super::{resolve_endpoint, with_timeout, DnsTransport, TransportResponse};
use async_trait::async_trait;
use ferrous_rdns_domain::{DomainError, ResolverEndpoint};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
pub struct UdpTransport {
    endpoint: ResolverEndpoint,
}

impl UdpTransport {
    pub fn new(endpoint: ResolverEndpoint) -> Self {
        Self { endpoint }
    }

    async fn connect(&self, timeout: Option<Duration>) -> Result<UdpSocket, DomainError> {
        let server_addr = resolve_endpoint(&self.endpoint, timeout).await?;

        let bind_addr: SocketAddr = if server_addr.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::TransportError {
                server: self.endpoint.to_string(),
                reason: format!("failed to bind UDP socket: {}", e),
            })?;

        socket
            .connect(server_addr)
            .await
            .map_err(|e| DomainError::TransportError {
                server: self.endpoint.to_string(),
                reason: format!("failed to connect UDP socket: {}", e),
            })?;

        Ok(socket)
    }

    /// Reads datagrams until one carries `query_id`; stray replies are
    /// dropped.
    async fn recv_matching(
        &self,
        socket: &UdpSocket,
        query_id: Option<u16>,
    ) -> Result<Vec<u8>, DomainError> {
        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let bytes_received = socket.recv(&mut recv_buf).await.map_err(|e| match e.kind() {
                std::io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused {
                    server: self.endpoint.to_string(),
                },
                _ => DomainError::TransportError {
                    server: self.endpoint.to_string(),
                    reason: format!("failed to receive UDP response: {}", e),
                },
            })?;

            let response = &recv_buf[..bytes_received];
            if query_id.is_none() || message_id(response) == query_id {
                return Ok(response.to_vec());
            }

            debug!(
                server = %self.endpoint,
                expected = ?query_id,
                received = ?message_id(response),
                "Discarding UDP datagram with mismatched ID"
            );
        }
    }
}

fn message_id(message: &[u8]) -> Option<u16> {
    match message {
        [hi, lo, ..] => Some(u16::from_be_bytes([*hi, *lo])),
        _ => None,
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Option<Duration>,
    ) -> Result<TransportResponse, DomainError> {
        let socket = self.connect(timeout).await?;

        let bytes_sent = with_timeout(timeout, socket.send(message_bytes), || {
            DomainError::TransportTimeout {
                server: self.endpoint.to_string(),
            }
        })
        .await?
        .map_err(|e| DomainError::TransportError {
            server: self.endpoint.to_string(),
            reason: format!("failed to send UDP query: {}", e),
        })?;

        debug!(
            server = %self.endpoint,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let query_id = message_id(message_bytes);

        let recv_buf = with_timeout(timeout, self.recv_matching(&socket, query_id), || {
            DomainError::TransportTimeout {
                server: self.endpoint.to_string(),
            }
        })
        .await??;

        debug!(
            server = %self.endpoint,
            bytes_received = recv_buf.len(),
            "UDP response received"
        );

        Ok(TransportResponse { bytes: recv_buf })
    }
}
