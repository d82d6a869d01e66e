// Snapshot domain model - What a query sees of the store
use super::reading::StampedReading;
use super::sensor::{SensorId, SENSOR_DEFINITIONS};
use std::sync::Arc;

/// Number of history entries returned alongside the latest reading
pub const DEFAULT_RECENT_WINDOW: usize = 20;

#[derive(Debug, Clone)]
pub enum Snapshot {
    /// No reading has been accepted since the process started
    Waiting(WaitingDescriptor),
    Ready(ReadySnapshot),
}

impl Snapshot {
    pub fn latest(&self) -> Option<&StampedReading> {
        match self {
            Snapshot::Waiting(_) => None,
            Snapshot::Ready(ready) => Some(ready.latest.as_ref()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReadySnapshot {
    pub latest: Arc<StampedReading>,
    /// Oldest first, ending with `latest`
    pub recent_history: Vec<Arc<StampedReading>>,
    pub total_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedSensor {
    pub id: SensorId,
    pub hint: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaitingDescriptor {
    pub expected: Vec<ExpectedSensor>,
}

impl WaitingDescriptor {
    pub fn from_definitions() -> Self {
        let expected = SENSOR_DEFINITIONS
            .iter()
            .map(|d| ExpectedSensor {
                id: d.id,
                hint: d.value_hint,
            })
            .collect();
        Self { expected }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waiting_lists_all_sensors() {
        let waiting = WaitingDescriptor::from_definitions();
        let ids: Vec<SensorId> = waiting.expected.iter().map(|e| e.id).collect();
        assert_eq!(ids, SensorId::ALL.to_vec());
        assert_eq!(waiting.expected[0].hint, "number (0-100)");
        assert!(Snapshot::Waiting(waiting).latest().is_none());
    }
}
