use super::WorkSender;
use ferrous_rdns_domain::WorkItem;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Reads input lines and queues each non-blank one as a work item.
pub struct LineProducer<R> {
    reader: R,
    sender: WorkSender,
    shutdown: CancellationToken,
}

impl<R> LineProducer<R>
where
    R: AsyncBufRead + Unpin,
{
    pub fn new(reader: R, sender: WorkSender) -> Self {
        Self {
            reader,
            sender,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Returns the number of items queued. The channel closes when this
    /// returns, since the sender is dropped with `self`.
    pub async fn run(self) -> u64 {
        let mut lines = self.reader.lines();
        let mut queued = 0u64;

        loop {
            let line = tokio::select! {
                _ = self.shutdown.cancelled() => {
                    debug!(queued, "Line producer cancelled");
                    break;
                }
                line = lines.next_line() => line,
            };

            match line {
                Ok(Some(line)) => {
                    let Some(item) = WorkItem::from_line(&line) else {
                        continue;
                    };
                    if self.sender.push(item).is_err() {
                        warn!(queued, "No resolver workers left, stopping input");
                        break;
                    }
                    queued += 1;
                }
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, queued, "Input read failed, treating as end of input");
                    break;
                }
            }
        }

        debug!(queued, "Input exhausted, closing work channel");
        queued
    }
}
