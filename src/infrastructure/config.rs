use crate::domain::history::HISTORY_CAPACITY;
use crate::domain::snapshot::DEFAULT_RECENT_WINDOW;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct HubConfig {
    pub server: ServerSettings,
    pub snapshot: SnapshotSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SnapshotSettings {
    /// History entries returned with each snapshot (1..=100)
    pub recent_window: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    /// Fallback filter directive when `RUST_LOG` is unset
    pub filter: String,
}

impl HubConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn validate(self) -> anyhow::Result<Self> {
        let window = self.snapshot.recent_window;
        if window == 0 || window > HISTORY_CAPACITY {
            anyhow::bail!(
                "snapshot.recent_window must be between 1 and {}, got {}",
                HISTORY_CAPACITY,
                window
            );
        }
        Ok(self)
    }
}

/// Defaults, then optional `config/server.*`, then `HUB__*` environment variables
pub fn load_hub_config() -> anyhow::Result<HubConfig> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config/server").required(false));
    build_hub_config(builder)
}

fn build_hub_config(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> anyhow::Result<HubConfig> {
    let settings = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080_i64)?
        .set_default("snapshot.recent_window", DEFAULT_RECENT_WINDOW as i64)?
        .set_default("logging.filter", "info")?
        .add_source(config::Environment::with_prefix("HUB").separator("__"))
        .build()?;

    let config: HubConfig = settings.try_deserialize()?;
    config.validate()
}
