//! Bulk resolution pipeline: one line producer feeding N resolver workers
//! over a shared work channel.

pub mod channel;
pub mod producer;
pub mod worker;

pub use channel::{work_channel, WorkReceiver, WorkSender};
pub use producer::LineProducer;
pub use worker::ResolverWorker;

use crate::use_cases::ResolveAddressUseCase;
use ferrous_rdns_domain::PipelineStats;
use std::sync::Arc;
use tokio::io::AsyncBufRead;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

pub struct ResolutionPipeline {
    workers: usize,
    resolve: Arc<ResolveAddressUseCase>,
    shutdown: CancellationToken,
}

impl ResolutionPipeline {
    pub fn new(workers: usize, resolve: Arc<ResolveAddressUseCase>) -> Self {
        Self {
            workers,
            resolve,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Runs until `input` is exhausted and every queued item has been
    /// resolved, or until cancelled.
    pub async fn run<R>(&self, input: R) -> PipelineStats
    where
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        info!(workers = self.workers, "Starting resolution pipeline");

        let (sender, receiver) = work_channel();
        let producer = tokio::spawn(
            LineProducer::new(input, sender)
                .with_cancellation(self.shutdown.clone())
                .run(),
        );

        let mut join_set: JoinSet<_> = JoinSet::new();
        for id in 0..self.workers {
            let worker = ResolverWorker::new(id, receiver.clone(), self.resolve.clone())
                .with_cancellation(self.shutdown.clone());
            join_set.spawn(worker.run());
        }
        drop(receiver);

        let mut stats = PipelineStats::default();
        while let Some(result) = join_set.join_next().await {
            match result {
                Ok(worker_stats) => stats.absorb(worker_stats),
                Err(e) => {
                    error!(error = %e, "Resolver worker aborted");
                    stats.workers_failed += 1;
                }
            }
        }

        stats.queued = match producer.await {
            Ok(queued) => queued,
            Err(e) => {
                error!(error = %e, "Line producer aborted");
                stats.processed
            }
        };

        info!(
            queued = stats.queued,
            processed = stats.processed,
            lines = stats.lines_emitted,
            failed_lookups = stats.lookups_failed,
            "Resolution pipeline finished"
        );

        stats
    }
}
