// Application state for HTTP handlers
use crate::application::ingestion_service::IngestionService;
use crate::application::snapshot_service::SnapshotService;

#[derive(Clone)]
pub struct AppState {
    pub ingestion_service: IngestionService,
    pub snapshot_service: SnapshotService,
}
