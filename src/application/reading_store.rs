// Store trait for the latest reading and its bounded history
use crate::domain::reading::StampedReading;
use crate::domain::snapshot::Snapshot;
use async_trait::async_trait;

#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// Append a reading, evicting the oldest entry beyond capacity.
    /// Readers observe either the state before or after the whole append.
    async fn append(&self, reading: StampedReading) -> anyhow::Result<()>;

    /// Latest reading plus the last `recent_window` history entries, oldest first.
    /// Yields `Snapshot::Waiting` while nothing has been appended.
    async fn snapshot(&self, recent_window: usize) -> Snapshot;
}
