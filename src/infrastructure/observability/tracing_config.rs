use crate::presentation::config::{Environment, LoggingSettings};

pub const DEFAULT_DIRECTIVES: &str = "info,scribe=debug,tower_http=debug";

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub directives: String,
}

impl TracingConfig {
    /// `LOG_FORMAT=json` forces JSON output regardless of the settings file.
    pub fn from_settings(environment: Environment, logging: &LoggingSettings) -> Self {
        Self {
            environment: environment.to_string(),
            json_format: logging.json || json_requested_by_env(),
            directives: logging.level.clone(),
        }
    }
}

fn json_requested_by_env() -> bool {
    std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false)
}
