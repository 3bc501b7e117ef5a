use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::lookup::LookupConfig;
use crate::{OutputMode, ResolverEndpoint, RunConfig, TransportProtocol};

/// Main configuration structure for Ferrous rDNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Resolution settings
    #[serde(default)]
    pub lookup: LookupConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from an explicit file, or use defaults, then apply
    /// command-line overrides on top.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(threads) = overrides.threads {
            self.lookup.threads = threads;
        }
        if let Some(resolver) = overrides.resolver {
            self.lookup.resolver = Some(resolver);
        }
        if let Some(port) = overrides.port {
            self.lookup.port = port;
        }
        if let Some(protocol) = overrides.protocol {
            self.lookup.protocol = protocol;
        }
        if overrides.domain_only {
            self.lookup.domain_only = true;
        }
        if let Some(file) = overrides.resolvers_file {
            self.lookup.resolvers_file = Some(file);
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.lookup.timeout_ms = timeout_ms;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lookup.threads == 0 {
            return Err(ConfigError::Validation(
                "Worker thread count must be at least 1".to_string(),
            ));
        }

        if self.lookup.resolver.is_some() && self.lookup.port == 0 {
            return Err(ConfigError::Validation(
                "Resolver port cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Validates and converts into the immutable settings for a run.
    pub fn run_config(&self) -> Result<RunConfig, ConfigError> {
        self.validate()?;

        let resolver = self
            .lookup
            .resolver
            .as_deref()
            .map(str::trim)
            .filter(|host| !host.is_empty())
            .map(|host| ResolverEndpoint::from_host_port(host, self.lookup.port));

        let lookup_timeout = match self.lookup.timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        };

        let output_mode = if self.lookup.domain_only {
            OutputMode::DomainOnly
        } else {
            OutputMode::AddressAndHost
        };

        Ok(RunConfig {
            workers: self.lookup.threads,
            resolver,
            resolvers_file: self.lookup.resolvers_file.as_ref().map(PathBuf::from),
            protocol: self.lookup.protocol,
            output_mode,
            lookup_timeout,
        })
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub threads: Option<usize>,
    pub resolver: Option<String>,
    pub port: Option<u16>,
    pub protocol: Option<TransportProtocol>,
    pub domain_only: bool,
    pub resolvers_file: Option<String>,
    pub timeout_ms: Option<u64>,
    pub log_level: Option<String>,
}
