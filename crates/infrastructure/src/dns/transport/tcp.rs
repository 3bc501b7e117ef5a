//! TCP Transport for DNS queries (RFC 1035 §4.2.2)
//!
//! Every message is framed with a 2-byte big-endian length prefix. One
//! connection per exchange; it is closed when the exchange ends.

use super::{resolve_endpoint, with_timeout, DnsTransport, TransportResponse};
use async_trait::async_trait;
use ferrous_rdns_domain::{DomainError, ResolverEndpoint};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

pub struct TcpTransport {
    endpoint: ResolverEndpoint,
}

impl TcpTransport {
    pub fn new(endpoint: ResolverEndpoint) -> Self {
        Self { endpoint }
    }

    async fn connect(&self, timeout: Option<Duration>) -> Result<TcpStream, DomainError> {
        let server_addr = resolve_endpoint(&self.endpoint, timeout).await?;

        let stream = with_timeout(timeout, TcpStream::connect(server_addr), || {
            DomainError::TransportTimeout {
                server: self.endpoint.to_string(),
            }
        })
        .await?
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused {
                server: self.endpoint.to_string(),
            },
            _ => DomainError::TransportError {
                server: self.endpoint.to_string(),
                reason: format!("failed to connect: {}", e),
            },
        })?;

        stream
            .set_nodelay(true)
            .map_err(|e| DomainError::TransportError {
                server: self.endpoint.to_string(),
                reason: format!("failed to set TCP_NODELAY: {}", e),
            })?;

        Ok(stream)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Option<Duration>,
    ) -> Result<TransportResponse, DomainError> {
        let mut stream = self.connect(timeout).await?;

        with_timeout(
            timeout,
            send_with_length_prefix(&mut stream, message_bytes),
            || DomainError::TransportTimeout {
                server: self.endpoint.to_string(),
            },
        )
        .await??;

        debug!(
            server = %self.endpoint,
            message_len = message_bytes.len(),
            "TCP query sent"
        );

        let response_bytes = with_timeout(timeout, read_with_length_prefix(&mut stream), || {
            DomainError::TransportTimeout {
                server: self.endpoint.to_string(),
            }
        })
        .await??;

        debug!(
            server = %self.endpoint,
            response_len = response_bytes.len(),
            "TCP response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes,
        })
    }
}

pub(crate) async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> Result<(), DomainError>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        DomainError::MessageEncoding(format!(
            "DNS message too large for TCP framing: {} bytes",
            message_bytes.len()
        ))
    })?;

    stream
        .write_all(&length.to_be_bytes())
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to write length prefix: {}", e)))?;
    stream
        .write_all(message_bytes)
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to write DNS message: {}", e)))?;
    stream
        .flush()
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to flush stream: {}", e)))?;

    Ok(())
}

pub(crate) async fn read_with_length_prefix<S>(stream: &mut S) -> Result<Vec<u8>, DomainError>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream
        .read_exact(&mut len_buf)
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to read response length: {}", e)))?;

    let response_len = u16::from_be_bytes(len_buf) as usize;
    let mut response = vec![0u8; response_len];
    stream
        .read_exact(&mut response)
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to read response body: {}", e)))?;

    Ok(response)
}
