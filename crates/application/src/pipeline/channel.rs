use ferrous_rdns_domain::{DomainError, WorkItem};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

/// Creates the unbounded producer → workers hand-off.
///
/// Dropping the [`WorkSender`] closes the channel; receivers then drain what
/// is left and see `None`.
pub fn work_channel() -> (WorkSender, WorkReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        WorkSender { inner: tx },
        WorkReceiver {
            inner: Arc::new(Mutex::new(rx)),
        },
    )
}

pub struct WorkSender {
    inner: mpsc::UnboundedSender<WorkItem>,
}

impl WorkSender {
    /// Never blocks. Fails only once every receiver is gone.
    pub fn push(&self, item: WorkItem) -> Result<(), DomainError> {
        self.inner.send(item).map_err(|_| DomainError::ChannelClosed)
    }
}

/// Shared consumer end; each item goes to exactly one `next()` caller.
#[derive(Clone)]
pub struct WorkReceiver {
    inner: Arc<Mutex<mpsc::UnboundedReceiver<WorkItem>>>,
}

impl WorkReceiver {
    /// Waits for the next item, `None` once the channel is closed and empty.
    pub async fn next(&self) -> Option<WorkItem> {
        self.inner.lock().await.recv().await
    }
}
