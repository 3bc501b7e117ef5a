use super::WorkReceiver;
use crate::use_cases::ResolveAddressUseCase;
use ferrous_rdns_domain::WorkerStats;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Pulls work items until the channel is closed and drained.
pub struct ResolverWorker {
    id: usize,
    receiver: WorkReceiver,
    resolve: Arc<ResolveAddressUseCase>,
    shutdown: CancellationToken,
}

impl ResolverWorker {
    pub fn new(id: usize, receiver: WorkReceiver, resolve: Arc<ResolveAddressUseCase>) -> Self {
        Self {
            id,
            receiver,
            resolve,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn run(self) -> WorkerStats {
        let mut stats = WorkerStats::default();

        loop {
            let item = tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => break,
                item = self.receiver.next() => item,
            };
            let Some(item) = item else {
                break;
            };

            let outcome = self.resolve.execute(&item, &self.shutdown).await;
            stats.processed += 1;
            stats.lines_emitted += outcome.lines_emitted;
            stats.lookups_failed += outcome.lookups_failed;
        }

        debug!(
            worker = self.id,
            processed = stats.processed,
            lines = stats.lines_emitted,
            "Resolver worker done"
        );
        stats
    }
}
