// Application layer - Ingestion and query use cases
pub mod error;
pub mod ingestion_service;
pub mod reading_store;
pub mod snapshot_service;
