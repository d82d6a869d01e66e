// Domain layer - Sensors, readings, history and status rules
pub mod history;
pub mod reading;
pub mod sensor;
pub mod snapshot;
pub mod status;
pub mod status_report;
