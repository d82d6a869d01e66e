// Ingestion service - Validate, stamp and store sensor submissions
use crate::application::error::IngestError;
use crate::application::reading_store::ReadingStore;
use crate::domain::reading::{Reading, StampedReading};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Acknowledgment returned for an accepted submission
#[derive(Debug, Clone)]
pub struct Acknowledgment {
    /// The payload exactly as submitted
    pub received_data: Map<String, Value>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone)]
pub struct IngestionService {
    store: Arc<dyn ReadingStore>,
}

impl IngestionService {
    pub fn new(store: Arc<dyn ReadingStore>) -> Self {
        Self { store }
    }

    /// Decode a raw request body and submit it
    pub async fn submit(&self, body: &[u8]) -> Result<Acknowledgment, IngestError> {
        let result = match decode_payload(body) {
            Ok(payload) => self.submit_payload(payload).await,
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            match e {
                IngestError::Internal(source) => {
                    tracing::error!("Error processing sensor data: {:#}", source)
                }
                rejected => tracing::warn!("Rejected sensor submission: {}", rejected),
            }
        }

        result
    }

    /// Submit an already-decoded JSON object
    pub async fn submit_payload(
        &self,
        payload: Map<String, Value>,
    ) -> Result<Acknowledgment, IngestError> {
        let reading = Reading::from_payload(&payload)?;
        if !reading.has_sensor_data() {
            return Err(IngestError::NoValidData);
        }

        let sensor_count = reading.sensor_count();
        let passthrough_count = reading.passthrough.len();
        let timestamp = Utc::now();

        self.store
            .append(StampedReading::stamp(reading, timestamp))
            .await
            .map_err(IngestError::Internal)?;

        tracing::debug!(
            "Accepted reading with {} sensors and {} passthrough fields",
            sensor_count,
            passthrough_count
        );

        Ok(Acknowledgment {
            received_data: payload,
            timestamp,
        })
    }
}

fn decode_payload(body: &[u8]) -> Result<Map<String, Value>, IngestError> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Object(map) => Ok(map),
        other => Err(IngestError::MalformedPayload(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
