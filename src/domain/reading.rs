// Reading domain models - Typed sensor values plus server receipt stamps
use super::sensor::SensorId;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// Keys the server stamps onto every reading; a payload cannot supply them.
const RESERVED_KEYS: [&str; 2] = ["timestamp", "receivedAt"];

#[derive(Debug, Error, PartialEq)]
pub enum ReadingDecodeError {
    #[error("field `{0}` must be a number or null")]
    NonNumeric(SensorId),
}

/// One submission's sensor values
///
/// Recognized sensor keys are decoded into typed fields. Everything else is
/// kept verbatim in `passthrough` and never interpreted.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Reading {
    #[serde(rename = "soil-moisture", skip_serializing_if = "Option::is_none")]
    pub soil_moisture: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(rename = "light-intensity", skip_serializing_if = "Option::is_none")]
    pub light_intensity: Option<f64>,
    #[serde(rename = "wind-speed", skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rainfall: Option<f64>,
    #[serde(flatten)]
    pub passthrough: Map<String, Value>,
}

impl Reading {
    /// Permissive decode of a JSON object
    ///
    /// A recognized key with `null` counts as absent. A recognized key with any
    /// other non-numeric value is rejected.
    pub fn from_payload(payload: &Map<String, Value>) -> Result<Self, ReadingDecodeError> {
        let mut reading = Reading::default();

        for (key, value) in payload {
            match SensorId::parse(key) {
                Some(id) => match value {
                    Value::Null => {}
                    Value::Number(n) => reading.set(id, n.as_f64()),
                    _ => return Err(ReadingDecodeError::NonNumeric(id)),
                },
                None if RESERVED_KEYS.contains(&key.as_str()) => {}
                None => {
                    reading.passthrough.insert(key.clone(), value.clone());
                }
            }
        }

        Ok(reading)
    }

    pub fn value(&self, id: SensorId) -> Option<f64> {
        match id {
            SensorId::SoilMoisture => self.soil_moisture,
            SensorId::Temperature => self.temperature,
            SensorId::Humidity => self.humidity,
            SensorId::LightIntensity => self.light_intensity,
            SensorId::WindSpeed => self.wind_speed,
            SensorId::Rainfall => self.rainfall,
        }
    }

    fn set(&mut self, id: SensorId, value: Option<f64>) {
        let slot = match id {
            SensorId::SoilMoisture => &mut self.soil_moisture,
            SensorId::Temperature => &mut self.temperature,
            SensorId::Humidity => &mut self.humidity,
            SensorId::LightIntensity => &mut self.light_intensity,
            SensorId::WindSpeed => &mut self.wind_speed,
            SensorId::Rainfall => &mut self.rainfall,
        };
        *slot = value;
    }

    /// Number of recognized sensors carrying a value
    pub fn sensor_count(&self) -> usize {
        SensorId::ALL
            .iter()
            .filter(|id| self.value(**id).is_some())
            .count()
    }

    pub fn has_sensor_data(&self) -> bool {
        self.sensor_count() > 0
    }
}

/// A reading stamped with server receipt time. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StampedReading {
    #[serde(flatten)]
    reading: Reading,
    #[serde(serialize_with = "serialize_iso_millis")]
    timestamp: DateTime<Utc>,
    received_at: i64,
}

impl StampedReading {
    pub fn stamp(reading: Reading, received: DateTime<Utc>) -> Self {
        Self {
            reading,
            timestamp: received,
            received_at: received.timestamp_millis(),
        }
    }

    pub fn reading(&self) -> &Reading {
        &self.reading
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn received_at(&self) -> i64 {
        self.received_at
    }
}

/// ISO-8601 with millisecond precision and `Z` suffix, e.g. `2025-03-01T08:15:30.123Z`
pub fn format_iso_millis(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_iso_millis<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_iso_millis(time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_decode_recognized_and_passthrough() {
        let payload = object(json!({
            "soil-moisture": 62.5,
            "temperature": 21,
            "wind-speed": null,
            "device": "pi-garden",
            "battery": 3.7
        }));

        let reading = Reading::from_payload(&payload).unwrap();

        assert_eq!(reading.soil_moisture, Some(62.5));
        assert_eq!(reading.temperature, Some(21.0));
        assert_eq!(reading.wind_speed, None);
        assert_eq!(reading.sensor_count(), 2);
        assert_eq!(reading.passthrough.len(), 2);
        assert_eq!(reading.passthrough["device"], json!("pi-garden"));
        assert!(!reading.passthrough.contains_key("wind-speed"));
    }

    #[test]
    fn test_decode_rejects_non_numeric_sensor() {
        let payload = object(json!({ "humidity": "wet" }));
        assert_eq!(
            Reading::from_payload(&payload),
            Err(ReadingDecodeError::NonNumeric(SensorId::Humidity))
        );
    }

    #[test]
    fn test_decode_drops_reserved_keys() {
        let payload = object(json!({ "rainfall": 1.2, "timestamp": "yesterday", "receivedAt": 0 }));
        let reading = Reading::from_payload(&payload).unwrap();
        assert!(reading.passthrough.is_empty());
    }

    #[test]
    fn test_only_unknown_keys_has_no_sensor_data() {
        let payload = object(json!({ "pressure": 1013, "soil-moisture": null }));
        let reading = Reading::from_payload(&payload).unwrap();
        assert!(!reading.has_sensor_data());
    }

    #[test]
    fn test_stamped_reading_serializes_flat() {
        let payload = object(json!({ "temperature": 22.25, "node": "north" }));
        let reading = Reading::from_payload(&payload).unwrap();
        let received = Utc.with_ymd_and_hms(2025, 3, 1, 8, 15, 30).unwrap();

        let stamped = StampedReading::stamp(reading, received);
        let value = serde_json::to_value(&stamped).unwrap();

        assert_eq!(
            value,
            json!({
                "temperature": 22.25,
                "node": "north",
                "timestamp": "2025-03-01T08:15:30.000Z",
                "receivedAt": 1740816930000_i64
            })
        );
    }
}
