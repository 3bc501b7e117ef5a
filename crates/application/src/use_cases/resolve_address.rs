use crate::ports::{ResultSink, ReverseLookup};
use ferrous_rdns_domain::{OutputMode, ResolverSet, WorkItem};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// What resolving one work item produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddressOutcome {
    pub lines_emitted: u64,
    pub lookups_failed: u64,
}

/// Resolves one address against every resolver, in order, and writes each
/// hostname found to the sink.
pub struct ResolveAddressUseCase {
    lookup: Arc<dyn ReverseLookup>,
    sink: Arc<dyn ResultSink>,
    resolvers: Arc<ResolverSet>,
    output_mode: OutputMode,
}

impl ResolveAddressUseCase {
    pub fn new(
        lookup: Arc<dyn ReverseLookup>,
        sink: Arc<dyn ResultSink>,
        resolvers: Arc<ResolverSet>,
        output_mode: OutputMode,
    ) -> Self {
        Self {
            lookup,
            sink,
            resolvers,
            output_mode,
        }
    }

    pub async fn execute(&self, item: &WorkItem, cancel: &CancellationToken) -> AddressOutcome {
        let mut outcome = AddressOutcome::default();

        let ip = match item.ip() {
            Ok(ip) => ip,
            Err(e) => {
                debug!(item = %item, error = %e, "Skipping input line");
                outcome.lookups_failed += 1;
                return outcome;
            }
        };

        for endpoint in self.resolvers.iter() {
            if cancel.is_cancelled() {
                break;
            }

            let hostnames = match self.lookup.lookup(ip, endpoint, cancel).await {
                Ok(hostnames) => hostnames,
                Err(e) => {
                    debug!(
                        ip = %ip,
                        resolver = %endpoint,
                        error = %e,
                        "PTR lookup failed"
                    );
                    outcome.lookups_failed += 1;
                    continue;
                }
            };

            for hostname in &hostnames {
                let line = self.output_mode.format_line(item.as_str(), hostname);
                match self.sink.write_line(&line) {
                    Ok(()) => outcome.lines_emitted += 1,
                    Err(e) => warn!(ip = %ip, error = %e, "Failed to write result"),
                }
            }
        }

        outcome
    }
}
