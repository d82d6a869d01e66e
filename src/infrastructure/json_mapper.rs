// Mapper to convert domain models to JSON response bodies
use crate::application::ingestion_service::Acknowledgment;
use crate::domain::reading::{format_iso_millis, StampedReading};
use crate::domain::snapshot::{ExpectedSensor, ReadySnapshot, Snapshot, WaitingDescriptor};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestAckResponse<'a> {
    pub success: bool,
    pub message: &'static str,
    pub received_data: &'a Map<String, Value>,
    pub timestamp: String,
}

impl<'a> From<&'a Acknowledgment> for IngestAckResponse<'a> {
    fn from(ack: &'a Acknowledgment) -> Self {
        Self {
            success: true,
            message: "Sensor data received successfully",
            received_data: &ack.received_data,
            timestamp: format_iso_millis(&ack.timestamp),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SensorsResponse<'a> {
    Waiting(WaitingResponse<'a>),
    Ready(ReadyResponse<'a>),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitingResponse<'a> {
    pub status: &'static str,
    pub message: &'static str,
    pub expected_format: ExpectedFormat<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyResponse<'a> {
    pub success: bool,
    pub data: &'a StampedReading,
    pub history: Vec<&'a StampedReading>,
    pub last_updated: String,
    pub total_readings: usize,
}

/// Serializes as a `{sensor-id: hint}` object in definition order
#[derive(Debug)]
pub struct ExpectedFormat<'a>(&'a [ExpectedSensor]);

impl Serialize for ExpectedFormat<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for sensor in self.0 {
            map.serialize_entry(sensor.id.as_str(), sensor.hint)?;
        }
        map.end()
    }
}

pub fn snapshot_to_response(snapshot: &Snapshot) -> SensorsResponse<'_> {
    match snapshot {
        Snapshot::Waiting(waiting) => SensorsResponse::Waiting(waiting_to_response(waiting)),
        Snapshot::Ready(ready) => SensorsResponse::Ready(ready_to_response(ready)),
    }
}

fn waiting_to_response(waiting: &WaitingDescriptor) -> WaitingResponse<'_> {
    WaitingResponse {
        status: "waiting",
        message: "No sensor data received yet. Send POST requests with sensor data to this endpoint",
        expected_format: ExpectedFormat(&waiting.expected),
    }
}

fn ready_to_response(ready: &ReadySnapshot) -> ReadyResponse<'_> {
    ReadyResponse {
        success: true,
        data: &ready.latest,
        history: ready.recent_history.iter().map(Arc::as_ref).collect(),
        last_updated: format_iso_millis(&ready.latest.timestamp()),
        total_readings: ready.total_count,
    }
}
