//! Ferrous rDNS Domain Layer
pub mod config;
pub mod errors;
pub mod pipeline_stats;
pub mod resolver_set;
pub mod run_config;
pub mod transport_protocol;
pub mod work_item;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, LookupConfig};
pub use errors::DomainError;
pub use pipeline_stats::{PipelineStats, WorkerStats};
pub use resolver_set::{ResolverEndpoint, ResolverSet};
pub use run_config::{OutputMode, RunConfig};
pub use transport_protocol::TransportProtocol;
pub use work_item::WorkItem;
