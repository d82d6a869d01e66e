// Sensor domain model - Static definitions for the six microclimate sensors
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorId {
    SoilMoisture,
    Temperature,
    Humidity,
    LightIntensity,
    WindSpeed,
    Rainfall,
}

impl SensorId {
    pub const ALL: [SensorId; 6] = [
        SensorId::SoilMoisture,
        SensorId::Temperature,
        SensorId::Humidity,
        SensorId::LightIntensity,
        SensorId::WindSpeed,
        SensorId::Rainfall,
    ];

    /// Wire key used by sensor agents, e.g. `soil-moisture`
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorId::SoilMoisture => "soil-moisture",
            SensorId::Temperature => "temperature",
            SensorId::Humidity => "humidity",
            SensorId::LightIntensity => "light-intensity",
            SensorId::WindSpeed => "wind-speed",
            SensorId::Rainfall => "rainfall",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == key)
    }

    pub fn definition(&self) -> &'static SensorDefinition {
        &SENSOR_DEFINITIONS[*self as usize]
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SensorId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Acceptable `{min, max}` range for a sensor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Threshold {
    pub min: f64,
    pub max: f64,
}

impl Threshold {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Which classification rule applies to a sensor's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationRule {
    /// Fixed optimal/normal/warning/critical bands for soil moisture
    SoilMoistureBands,
    /// Generic threshold rule with 20% critical margin
    Threshold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorDefinition {
    pub id: SensorId,
    pub name: &'static str,
    pub unit: &'static str,
    pub threshold: Threshold,
    /// Human-readable shape of the expected value, shown while waiting for data
    pub value_hint: &'static str,
    pub rule: ClassificationRule,
}

// Indexed by `SensorId as usize`, keep in the same order as `SensorId::ALL`.
pub static SENSOR_DEFINITIONS: [SensorDefinition; 6] = [
    SensorDefinition {
        id: SensorId::SoilMoisture,
        name: "Soil Moisture",
        unit: "%",
        threshold: Threshold::new(40.0, 80.0),
        value_hint: "number (0-100)",
        rule: ClassificationRule::SoilMoistureBands,
    },
    SensorDefinition {
        id: SensorId::Temperature,
        name: "Temperature (DHT22)",
        unit: "°C",
        threshold: Threshold::new(15.0, 35.0),
        value_hint: "number (celsius)",
        rule: ClassificationRule::Threshold,
    },
    SensorDefinition {
        id: SensorId::Humidity,
        name: "Humidity (DHT22)",
        unit: "%",
        threshold: Threshold::new(30.0, 70.0),
        value_hint: "number (0-100)",
        rule: ClassificationRule::Threshold,
    },
    SensorDefinition {
        id: SensorId::LightIntensity,
        name: "Light Intensity (LDR)",
        unit: "lux",
        threshold: Threshold::new(200.0, 1000.0),
        value_hint: "number (lux)",
        rule: ClassificationRule::Threshold,
    },
    SensorDefinition {
        id: SensorId::WindSpeed,
        name: "Wind Speed",
        unit: "km/h",
        threshold: Threshold::new(0.0, 50.0),
        value_hint: "number (km/h)",
        rule: ClassificationRule::Threshold,
    },
    SensorDefinition {
        id: SensorId::Rainfall,
        name: "Rainfall Intensity",
        unit: "mm/h",
        threshold: Threshold::new(0.0, 10.0),
        value_hint: "number (mm/h)",
        rule: ClassificationRule::Threshold,
    },
];
