//! Most recently published batch, shared between the scheduler and readers

use std::sync::Arc;

use tokio::sync::watch;

use crate::monitor::types::Batch;

/// Handle to the published batch
///
/// Each publish replaces the whole `Arc<Batch>`, so a reader always holds
/// one complete batch. Reading only clones the pointer and never waits on a
/// cycle in progress.
#[derive(Clone)]
pub struct Snapshot {
    sender: Arc<watch::Sender<Arc<Batch>>>,
}

impl Snapshot {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(Arc::new(Batch::empty()));
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Replace the published batch
    pub fn publish(&self, batch: Batch) {
        self.sender.send_replace(Arc::new(batch));
    }

    /// Current batch
    pub fn read(&self) -> Arc<Batch> {
        self.sender.borrow().clone()
    }

    /// Receiver notified after every publish
    pub fn subscribe(&self) -> watch::Receiver<Arc<Batch>> {
        self.sender.subscribe()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new()
    }
}
