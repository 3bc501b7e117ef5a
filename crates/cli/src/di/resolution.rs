use ferrous_rdns_application::pipeline::ResolutionPipeline;
use ferrous_rdns_application::ports::{ResultSink, ReverseLookup};
use ferrous_rdns_application::use_cases::{load_resolver_set, ResolveAddressUseCase};
use ferrous_rdns_domain::{ResolverSet, RunConfig};
use ferrous_rdns_infrastructure::output::StdoutSink;
use ferrous_rdns_infrastructure::system::PtrLookup;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub struct ResolutionServices {
    pub resolvers: Arc<ResolverSet>,
    pub resolve: Arc<ResolveAddressUseCase>,
    workers: usize,
}

impl ResolutionServices {
    pub fn new(config: &RunConfig) -> Self {
        let resolvers = Arc::new(load_resolver_set(config));

        info!(
            resolvers = resolvers.len(),
            protocol = config.protocol.protocol_name(),
            timeout_ms = config.lookup_timeout.map(|t| t.as_millis() as u64),
            "Initializing PTR lookup services"
        );

        let lookup: Arc<dyn ReverseLookup> =
            Arc::new(PtrLookup::new(config.protocol, config.lookup_timeout));
        let sink: Arc<dyn ResultSink> = Arc::new(StdoutSink::new());

        let resolve = Arc::new(ResolveAddressUseCase::new(
            lookup,
            sink,
            resolvers.clone(),
            config.output_mode,
        ));

        Self {
            resolvers,
            resolve,
            workers: config.workers,
        }
    }

    pub fn pipeline(&self, shutdown: CancellationToken) -> ResolutionPipeline {
        ResolutionPipeline::new(self.workers, self.resolve.clone()).with_cancellation(shutdown)
    }
}
