use serde::{Deserialize, Serialize};

use crate::TransportProtocol;

/// Resolution settings, as read from `[lookup]` in the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    /// Number of concurrent resolver workers.
    #[serde(default = "default_threads")]
    pub threads: usize,

    /// Single resolver host, paired with `port`.
    #[serde(default)]
    pub resolver: Option<String>,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub protocol: TransportProtocol,

    #[serde(default)]
    pub domain_only: bool,

    /// Newline-delimited `host:port` resolver list.
    #[serde(default)]
    pub resolvers_file: Option<String>,

    /// Per-lookup timeout in milliseconds, 0 disables it.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            threads: default_threads(),
            resolver: None,
            port: default_port(),
            protocol: TransportProtocol::default(),
            domain_only: false,
            resolvers_file: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_threads() -> usize {
    8
}

fn default_port() -> u16 {
    53
}

fn default_timeout_ms() -> u64 {
    5000
}
