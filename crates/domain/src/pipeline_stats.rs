/// Counters kept by a single resolver worker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerStats {
    pub processed: u64,
    pub lines_emitted: u64,
    pub lookups_failed: u64,
}

/// Totals for a finished pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub queued: u64,
    pub processed: u64,
    pub lines_emitted: u64,
    pub lookups_failed: u64,
    pub workers_failed: u64,
}

impl PipelineStats {
    pub fn absorb(&mut self, worker: WorkerStats) {
        self.processed += worker.processed;
        self.lines_emitted += worker.lines_emitted;
        self.lookups_failed += worker.lookups_failed;
    }
}
