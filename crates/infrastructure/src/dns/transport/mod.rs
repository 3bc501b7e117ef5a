pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use ferrous_rdns_domain::{DomainError, ResolverEndpoint, TransportProtocol};
use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,
}

/// One query/response exchange with a resolver endpoint.
///
/// Each call opens its own connection and releases it before returning,
/// whatever the outcome.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Option<Duration>,
    ) -> Result<TransportResponse, DomainError>;
}

pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Option<Duration>,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }
}

pub fn create_transport(protocol: TransportProtocol, endpoint: &ResolverEndpoint) -> Transport {
    match protocol {
        TransportProtocol::Udp => Transport::Udp(udp::UdpTransport::new(endpoint.clone())),
        TransportProtocol::Tcp => Transport::Tcp(tcp::TcpTransport::new(endpoint.clone())),
    }
}

/// Resolves `host:port` to the first socket address it names.
pub(crate) async fn resolve_endpoint(
    endpoint: &ResolverEndpoint,
    timeout: Option<Duration>,
) -> Result<SocketAddr, DomainError> {
    let mut addrs = with_timeout(timeout, tokio::net::lookup_host(endpoint.as_str()), || {
        DomainError::TransportTimeout {
            server: endpoint.to_string(),
        }
    })
    .await?
    .map_err(|e| DomainError::TransportError {
        server: endpoint.to_string(),
        reason: format!("cannot resolve endpoint: {}", e),
    })?;

    addrs.next().ok_or_else(|| DomainError::TransportError {
        server: endpoint.to_string(),
        reason: "endpoint resolved to no addresses".to_string(),
    })
}

/// Runs `fut` under `timeout`, or unbounded when `timeout` is `None`.
pub(crate) async fn with_timeout<F, T>(
    timeout: Option<Duration>,
    fut: F,
    on_elapsed: impl FnOnce() -> DomainError,
) -> Result<T, DomainError>
where
    F: Future<Output = T>,
{
    match timeout {
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| on_elapsed()),
        None => Ok(fut.await),
    }
}
