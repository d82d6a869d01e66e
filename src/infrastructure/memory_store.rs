// In-memory reading store - Process-lifetime latest reading and bounded history
use crate::application::reading_store::ReadingStore;
use crate::domain::history::BoundedHistory;
use crate::domain::reading::StampedReading;
use crate::domain::snapshot::{ReadySnapshot, Snapshot, WaitingDescriptor};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Single lock around the history; append and eviction happen under one write guard.
#[derive(Debug, Default)]
pub struct InMemoryReadingStore {
    history: RwLock<BoundedHistory<Arc<StampedReading>>>,
}

impl InMemoryReadingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReadingStore for InMemoryReadingStore {
    async fn append(&self, reading: StampedReading) -> anyhow::Result<()> {
        let mut history = self.history.write().await;
        if history.push(Arc::new(reading)).is_some() {
            tracing::trace!("History full, evicted oldest reading");
        }
        Ok(())
    }

    async fn snapshot(&self, recent_window: usize) -> Snapshot {
        let history = self.history.read().await;
        match history.latest() {
            None => Snapshot::Waiting(WaitingDescriptor::from_definitions()),
            Some(latest) => Snapshot::Ready(ReadySnapshot {
                latest: latest.clone(),
                recent_history: history.recent(recent_window).cloned().collect(),
                total_count: history.len(),
            }),
        }
    }
}
