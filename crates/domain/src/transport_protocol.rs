use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transport used to reach every resolver endpoint during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TransportProtocol {
    #[default]
    Udp,
    Tcp,
}

impl TransportProtocol {
    pub fn protocol_name(&self) -> &'static str {
        match self {
            TransportProtocol::Udp => "UDP",
            TransportProtocol::Tcp => "TCP",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportProtocol::Udp => "udp",
            TransportProtocol::Tcp => "tcp",
        }
    }
}

impl fmt::Display for TransportProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportProtocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "udp" | "udp4" | "udp6" => Ok(TransportProtocol::Udp),
            "tcp" | "tcp4" | "tcp6" => Ok(TransportProtocol::Tcp),
            other => Err(format!(
                "Unsupported protocol '{}'. Expected 'udp' or 'tcp'",
                other
            )),
        }
    }
}

impl TryFrom<String> for TransportProtocol {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TransportProtocol> for String {
    fn from(value: TransportProtocol) -> Self {
        value.as_str().to_string()
    }
}
