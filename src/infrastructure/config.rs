use crate::domain::section::DayCode;
use crate::domain::time_axis::{TimeAxis, STANDARD_FIRST_HOUR, STANDARD_LAST_HOUR};
use anyhow::Context;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Environment overrides look like `SMARTSCHEDULE__DATASOURCE__TOKEN`.
const ENV_PREFIX: &str = "SMARTSCHEDULE";

#[derive(Debug, Deserialize, Clone)]
pub struct DataSourceConfig {
    pub datasource: DataSourceSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSourceSettings {
    pub base_url: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TimetableConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub axis: AxisSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AxisSettings {
    #[serde(default = "default_days")]
    pub days: Vec<String>,
    #[serde(default = "default_first_hour")]
    pub first_hour: u32,
    #[serde(default = "default_last_hour")]
    pub last_hour: u32,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            days: default_days(),
            first_hour: default_first_hour(),
            last_hour: default_last_hour(),
        }
    }
}

impl AxisSettings {
    pub fn to_axis(&self) -> anyhow::Result<TimeAxis> {
        let days = self
            .days
            .iter()
            .map(|d| d.parse::<DayCode>())
            .collect::<Result<Vec<_>, _>>()
            .context("Invalid day in [axis] configuration")?;

        TimeAxis::hourly(days, self.first_hour, self.last_hour)
            .context("Invalid [axis] configuration")
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_days() -> Vec<String> {
    DayCode::ALL.iter().map(|d| d.label().to_string()).collect()
}

fn default_first_hour() -> u32 {
    STANDARD_FIRST_HOUR
}

fn default_last_hour() -> u32 {
    STANDARD_LAST_HOUR
}

pub fn load_datasource_config() -> anyhow::Result<DataSourceConfig> {
    load("config/datasource")
}

pub fn load_timetable_config() -> anyhow::Result<TimetableConfig> {
    load("config/timetable")
}

fn load<T: DeserializeOwned>(name: &str) -> anyhow::Result<T> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(name))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()
        .with_context(|| format!("Failed to read {}", name))?;

    Ok(settings.try_deserialize()?)
}
