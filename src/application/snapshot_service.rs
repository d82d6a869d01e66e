// Snapshot service - Use cases for polling clients
use crate::application::reading_store::ReadingStore;
use crate::domain::snapshot::Snapshot;
use crate::domain::status_report::StatusReport;
use std::sync::Arc;

#[derive(Clone)]
pub struct SnapshotService {
    store: Arc<dyn ReadingStore>,
    recent_window: usize,
}

impl SnapshotService {
    pub fn new(store: Arc<dyn ReadingStore>, recent_window: usize) -> Self {
        Self {
            store,
            recent_window,
        }
    }

    pub async fn get_snapshot(&self) -> Snapshot {
        self.store.snapshot(self.recent_window).await
    }

    /// Classify the latest reading. Recomputed on every call.
    pub async fn status_report(&self) -> StatusReport {
        let snapshot = self.store.snapshot(1).await;
        StatusReport::from_latest(snapshot.latest())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reading::{Reading, StampedReading};
    use crate::domain::status::SensorStatus;
    use crate::infrastructure::memory_store::InMemoryReadingStore;
    use chrono::Utc;

    fn stamped(soil_moisture: f64) -> StampedReading {
        let reading = Reading {
            soil_moisture: Some(soil_moisture),
            ..Reading::default()
        };
        StampedReading::stamp(reading, Utc::now())
    }

    #[tokio::test]
    async fn test_waiting_before_first_reading() {
        let service = SnapshotService::new(Arc::new(InMemoryReadingStore::new()), 20);
        match service.get_snapshot().await {
            Snapshot::Waiting(waiting) => assert_eq!(waiting.expected.len(), 6),
            Snapshot::Ready(_) => panic!("expected waiting state"),
        }
    }

    #[tokio::test]
    async fn test_recent_window_applies() {
        let store = Arc::new(InMemoryReadingStore::new());
        for i in 0..30 {
            store.append(stamped(f64::from(i))).await.unwrap();
        }
        let service = SnapshotService::new(store, 20);

        let Snapshot::Ready(ready) = service.get_snapshot().await else {
            panic!("expected data");
        };
        assert_eq!(ready.recent_history.len(), 20);
        assert_eq!(ready.total_count, 30);
        assert_eq!(ready.recent_history[0].reading().soil_moisture, Some(10.0));
        assert_eq!(ready.recent_history.last(), Some(&ready.latest));
    }

    #[tokio::test]
    async fn test_status_report_follows_latest_value() {
        let store = Arc::new(InMemoryReadingStore::new());
        let service = SnapshotService::new(store.clone(), 20);

        store.append(stamped(60.0)).await.unwrap();
        assert_eq!(service.status_report().await.sensors[0].status, SensorStatus::Optimal);

        store.append(stamped(35.0)).await.unwrap();
        assert_eq!(service.status_report().await.sensors[0].status, SensorStatus::Warning);
    }
}
