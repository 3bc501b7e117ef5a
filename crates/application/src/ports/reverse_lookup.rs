use async_trait::async_trait;
use ferrous_rdns_domain::{DomainError, ResolverEndpoint};
use std::net::IpAddr;
use tokio_util::sync::CancellationToken;

#[async_trait]
pub trait ReverseLookup: Send + Sync {
    /// PTR lookup of `ip` through `endpoint`. Returns every hostname in the
    /// answer; an empty answer is `Ok(vec![])`.
    async fn lookup(
        &self,
        ip: IpAddr,
        endpoint: &ResolverEndpoint,
        cancel: &CancellationToken,
    ) -> Result<Vec<String>, DomainError>;
}
