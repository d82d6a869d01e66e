// Ingestion errors surfaced to the submitting client
use crate::domain::reading::ReadingDecodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Malformed sensor payload: {0}")]
    MalformedPayload(String),

    #[error("No valid sensor data provided")]
    NoValidData,

    #[error("Failed to process sensor data")]
    Internal(#[source] anyhow::Error),
}

impl From<ReadingDecodeError> for IngestError {
    fn from(err: ReadingDecodeError) -> Self {
        IngestError::MalformedPayload(err.to_string())
    }
}

impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        IngestError::MalformedPayload(err.to_string())
    }
}
