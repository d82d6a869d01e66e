// Status classification - Pure rules deriving a sensor's state from its latest value
use super::sensor::{ClassificationRule, SensorDefinition, Threshold};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SensorStatus {
    Optimal,
    Normal,
    Warning,
    Critical,
    NoData,
}

/// Classify a value against its sensor definition
///
/// Never cached: callers pass the value they just read and get the status
/// for exactly that value.
pub fn classify(definition: &SensorDefinition, value: Option<f64>) -> SensorStatus {
    let Some(value) = value else {
        return SensorStatus::NoData;
    };

    match definition.rule {
        ClassificationRule::SoilMoistureBands => classify_soil_moisture(value),
        ClassificationRule::Threshold => classify_against_threshold(value, &definition.threshold),
    }
}

fn classify_soil_moisture(value: f64) -> SensorStatus {
    if (50.0..=75.0).contains(&value) {
        SensorStatus::Optimal
    } else if value < 30.0 || value > 85.0 {
        SensorStatus::Critical
    } else if value < 40.0 || value > 80.0 {
        SensorStatus::Warning
    } else {
        SensorStatus::Normal
    }
}

// Critical takes precedence over warning.
fn classify_against_threshold(value: f64, threshold: &Threshold) -> SensorStatus {
    if value < threshold.min * 0.8 || value > threshold.max * 1.2 {
        SensorStatus::Critical
    } else if value < threshold.min || value > threshold.max {
        SensorStatus::Warning
    } else {
        SensorStatus::Normal
    }
}
