// Status report domain model - Per-sensor classification of the latest reading
use super::reading::{format_iso_millis, StampedReading};
use super::sensor::{SensorId, Threshold, SENSOR_DEFINITIONS};
use super::status::{classify, SensorStatus};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorStatusEntry {
    pub id: SensorId,
    pub name: &'static str,
    pub unit: &'static str,
    pub value: Option<f64>,
    pub status: SensorStatus,
    pub threshold: Threshold,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSummary {
    pub critical: usize,
    pub warning: usize,
    pub no_data: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub sensors: Vec<SensorStatusEntry>,
    pub alerts: AlertSummary,
    pub last_updated: Option<String>,
}

impl StatusReport {
    /// Classify every defined sensor against the latest reading, if any
    pub fn from_latest(latest: Option<&StampedReading>) -> Self {
        let sensors: Vec<SensorStatusEntry> = SENSOR_DEFINITIONS
            .iter()
            .map(|definition| {
                let value = latest.and_then(|r| r.reading().value(definition.id));
                SensorStatusEntry {
                    id: definition.id,
                    name: definition.name,
                    unit: definition.unit,
                    value,
                    status: classify(definition, value),
                    threshold: definition.threshold,
                }
            })
            .collect();

        let mut alerts = AlertSummary::default();
        for entry in &sensors {
            match entry.status {
                SensorStatus::Critical => alerts.critical += 1,
                SensorStatus::Warning => alerts.warning += 1,
                SensorStatus::NoData => alerts.no_data += 1,
                SensorStatus::Optimal | SensorStatus::Normal => {}
            }
        }

        Self {
            sensors,
            alerts,
            last_updated: latest.map(|r| format_iso_millis(&r.timestamp())),
        }
    }
}
