use async_trait::async_trait;
use ferrous_rdns_application::ports::ReverseLookup;
use ferrous_rdns_domain::{DomainError, ResolverEndpoint, TransportProtocol};
use std::net::IpAddr;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::dns::ptr::{reverse_domain, MessageBuilder, ResponseParser};
use crate::dns::transport::{create_transport, with_timeout};

/// Sends PTR queries straight to each resolver endpoint over the run's
/// transport.
pub struct PtrLookup {
    protocol: TransportProtocol,
    timeout: Option<Duration>,
}

impl PtrLookup {
    pub fn new(protocol: TransportProtocol, timeout: Option<Duration>) -> Self {
        Self { protocol, timeout }
    }

    async fn query(
        &self,
        ip: IpAddr,
        endpoint: &ResolverEndpoint,
    ) -> Result<Vec<String>, DomainError> {
        let (query_id, message) = MessageBuilder::build_ptr_query(&ip)?;
        let transport = create_transport(self.protocol, endpoint);

        let response = transport.send(&message, self.timeout).await?;
        let parsed = ResponseParser::parse_for(query_id, &response.bytes)?;

        if parsed.truncated {
            debug!(
                ip = %ip,
                resolver = %endpoint,
                "Truncated PTR response, using partial answer"
            );
        }

        parsed.into_hostnames()
    }
}

#[async_trait]
impl ReverseLookup for PtrLookup {
    async fn lookup(
        &self,
        ip: IpAddr,
        endpoint: &ResolverEndpoint,
        cancel: &CancellationToken,
    ) -> Result<Vec<String>, DomainError> {
        debug!(
            ip = %ip,
            resolver = %endpoint,
            reverse_domain = %reverse_domain(&ip),
            protocol = self.protocol.protocol_name(),
            "Performing PTR lookup"
        );

        let lookup = with_timeout(self.timeout, self.query(ip, endpoint), || {
            DomainError::QueryTimeout
        });

        let hostnames = tokio::select! {
            _ = cancel.cancelled() => return Err(DomainError::Cancelled),
            result = lookup => result??,
        };

        debug!(
            ip = %ip,
            resolver = %endpoint,
            hostnames = hostnames.len(),
            "PTR lookup successful"
        );

        Ok(hostnames)
    }
}
