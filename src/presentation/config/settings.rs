use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::Environment;
use crate::infrastructure::observability::DEFAULT_DIRECTIVES;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub normalizer: NormalizerSettings,
    pub inference: InferenceSettings,
    pub models: ModelSettings,
    pub audit: AuditSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers `appsettings.<env>.toml` (optional) under `APP__SECTION__KEY` variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub root: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./data"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NormalizerSettings {
    pub program: String,
}

impl Default for NormalizerSettings {
    fn default() -> Self {
        Self {
            program: "ffmpeg".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InferenceSettings {
    pub program: String,
    pub model_dir: PathBuf,
    pub threads: usize,
    pub max_concurrent: usize,
    pub progress_interval_secs: u64,
}

impl InferenceSettings {
    pub fn progress_interval(&self) -> Duration {
        Duration::from_secs(self.progress_interval_secs)
    }
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            program: "whisper-cli".to_string(),
            model_dir: PathBuf::from("./models"),
            threads: 4,
            max_concurrent: 1,
            progress_interval_secs: 2,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    pub default: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditProviderSetting {
    #[default]
    Memory,
    Postgres,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuditSettings {
    pub provider: AuditProviderSetting,
    pub database_url: Option<String>,
    pub max_connections: u32,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            provider: AuditProviderSetting::Memory,
            database_url: None,
            max_connections: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_DIRECTIVES.to_string(),
            json: false,
        }
    }
}
