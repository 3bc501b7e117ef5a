use std::path::PathBuf;
use std::time::Duration;

use crate::{ResolverEndpoint, TransportProtocol};

/// How a resolved hostname is written to the output sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `IP<TAB>hostname`, the IP as it appeared in the input and the
    /// hostname exactly as returned.
    #[default]
    AddressAndHost,
    /// Hostname only, with one trailing dot removed.
    DomainOnly,
}

impl OutputMode {
    pub fn format_line(&self, address: &str, hostname: &str) -> String {
        match self {
            OutputMode::AddressAndHost => format!("{}\t{}", address, hostname),
            OutputMode::DomainOnly => hostname
                .strip_suffix('.')
                .unwrap_or(hostname)
                .to_string(),
        }
    }
}

/// Immutable settings for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub workers: usize,
    pub resolver: Option<ResolverEndpoint>,
    pub resolvers_file: Option<PathBuf>,
    pub protocol: TransportProtocol,
    pub output_mode: OutputMode,
    /// `None` leaves connect and lookup unbounded.
    pub lookup_timeout: Option<Duration>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            workers: 8,
            resolver: None,
            resolvers_file: None,
            protocol: TransportProtocol::Udp,
            output_mode: OutputMode::AddressAndHost,
            lookup_timeout: Some(Duration::from_secs(5)),
        }
    }
}
